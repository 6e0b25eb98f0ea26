//! Template mask: render a string with `{{path}}` placeholders resolved
//! against the context record.
//!
//! Placeholders accept dotted paths (`{{customer.identity.name}}`) that
//! resolve into nested records. The template is parsed once at
//! construction; delimiter problems are rejected there, unresolvable
//! placeholders fail at render time.

use crate::domain::{MaskError, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(Vec<String>),
}

/// Renders the configured template against `contexts[0]`, ignoring the
/// input value entirely.
#[derive(Debug)]
pub struct TemplateMask {
    template: String,
    segments: Vec<Segment>,
}

impl TemplateMask {
    pub fn new(template: &str) -> Result<Self> {
        let segments = parse(template)?;
        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }
}

fn bad(template: &str, reason: &str) -> MaskError {
    MaskError::BadTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}

fn parse(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let (literal, tail) = rest.split_at(start);
        if literal.contains("}}") {
            return Err(bad(template, "unmatched '}}'"));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal.to_string()));
        }

        let tail = &tail[2..];
        let Some(end) = tail.find("}}") else {
            return Err(bad(template, "unterminated placeholder"));
        };
        let inner = &tail[..end];
        if inner.contains('{') || inner.contains('}') {
            return Err(bad(template, "unbalanced delimiters"));
        }

        let path: Vec<String> = inner.trim().split('.').map(str::to_string).collect();
        if path.iter().any(String::is_empty) {
            return Err(bad(template, "empty placeholder path"));
        }
        segments.push(Segment::Placeholder(path));

        rest = &tail[end + 2..];
    }

    if rest.contains("}}") {
        return Err(bad(template, "unmatched '}}'"));
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }

    Ok(segments)
}

/// Walk a dotted path through nested records.
fn resolve<'a>(record: &'a Record, path: &[String]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let value = record.get(first)?;
    if rest.is_empty() {
        Some(value)
    } else {
        resolve(value.as_record()?, rest)
    }
}

impl MaskStrategy for TemplateMask {
    fn mask(&mut self, _value: &Value, contexts: &[Record]) -> Result<Value> {
        let context = contexts
            .first()
            .ok_or_else(|| MaskError::MissingContext(self.template.clone()))?;

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(path) => {
                    let value = resolve(context, path)
                        .ok_or_else(|| MaskError::UnknownField(path.join(".")))?;
                    out.push_str(&value.render());
                }
            }
        }
        Ok(Value::Text(out))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    _seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(template) = rule.mask.template.as_deref() else {
        return Ok((configuration, false));
    };
    let mask = TemplateMask::new(template)?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
