//! Keyed-select mask: deterministically pick a replacement from a fixed
//! candidate list by hashing the input value.

use crate::domain::{MaskError, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};
use sha2::{Digest, Sha256};

/// Selects `choices[sha256(input) % len]`.
///
/// Same input, same output, within a run and across runs: the digest is
/// stable. Never fails at masking time.
#[derive(Debug)]
pub struct HashMask {
    choices: Vec<Value>,
}

impl HashMask {
    pub fn new(choices: Vec<Value>) -> Result<Self> {
        if choices.is_empty() {
            return Err(MaskError::InvalidRule {
                kind: "hash",
                reason: "candidate list must not be empty".to_string(),
            });
        }
        Ok(Self { choices })
    }
}

impl MaskStrategy for HashMask {
    fn mask(&mut self, value: &Value, _contexts: &[Record]) -> Result<Value> {
        let digest = Sha256::digest(value.render().as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let index = (u64::from_be_bytes(prefix) % self.choices.len() as u64) as usize;
        Ok(self.choices[index].clone())
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    _seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    if rule.mask.hash.is_empty() {
        return Ok((configuration, false));
    }
    let mask = HashMask::new(rule.mask.hash.clone())?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
