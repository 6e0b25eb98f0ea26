//! Incremental mask: replace with a counter advancing on every call.

use crate::domain::{IncrementalParams, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};

pub struct IncrementalMask {
    next: i64,
    increment: i64,
}

impl IncrementalMask {
    pub fn new(params: IncrementalParams) -> Self {
        Self {
            next: params.start,
            increment: params.increment,
        }
    }
}

impl MaskStrategy for IncrementalMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        let current = self.next;
        self.next = self.next.wrapping_add(self.increment);
        Ok(Value::Int(current))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    _seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(params) = rule.mask.incremental else {
        return Ok((configuration, false));
    };
    Ok((
        configuration.with_entry(
            &rule.selector.jsonpath,
            Box::new(IncrementalMask::new(params)),
        ),
        true,
    ))
}
