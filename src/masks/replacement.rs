//! Field-copy mask: replace a value with the value of another field of
//! the same record.

use crate::domain::{MaskError, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};

/// Ignores its input and returns `contexts[0][field]`.
///
/// This is the one strategy with a hard dependency on non-empty context:
/// no context, or a context without the named field, is a runtime
/// failure. Combined with the driver's fail-closed policy the target
/// field ends up removed rather than silently null.
pub struct ReplacementMask {
    field: String,
}

impl ReplacementMask {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl MaskStrategy for ReplacementMask {
    fn mask(&mut self, _value: &Value, contexts: &[Record]) -> Result<Value> {
        let context = contexts
            .first()
            .ok_or_else(|| MaskError::MissingContext(self.field.clone()))?;
        context
            .get(&self.field)
            .cloned()
            .ok_or_else(|| MaskError::UnknownField(self.field.clone()))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    _seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(field) = rule.mask.replacement.as_deref() else {
        return Ok((configuration, false));
    };
    let mask = ReplacementMask::new(field);
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
