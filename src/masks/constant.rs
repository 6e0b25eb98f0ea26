//! Constant mask: replace with a fixed configured value.

use crate::domain::{Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};

pub struct ConstantMask {
    value: Value,
}

impl ConstantMask {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl MaskStrategy for ConstantMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        Ok(self.value.clone())
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    _seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(value) = rule.mask.constant.clone() else {
        return Ok((configuration, false));
    };
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(ConstantMask::new(value))),
        true,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_returns_configured_value() {
        let mut mask = ConstantMask::new(Value::from("X"));
        assert_eq!(mask.mask(&Value::from("a"), &[]).unwrap(), Value::from("X"));
        assert_eq!(mask.mask(&Value::Int(12), &[]).unwrap(), Value::from("X"));
    }
}
