//! Pattern-generate mask: produce a fresh random value conforming to a
//! regular expression on every call.

use crate::domain::{MaskError, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound substituted for unbounded repetitions (`*`, `+`).
const MAX_REPEAT: u32 = 100;

/// Generates a random string matching the configured pattern.
///
/// Explicitly NOT deterministic per input: repeated calls for the same
/// value yield fresh samples. The owned RNG advances on every call, so a
/// `PatternMask` must not be shared across concurrent callers without
/// external synchronization.
#[derive(Debug)]
pub struct PatternMask {
    generator: rand_regex::Regex,
    rng: StdRng,
}

impl PatternMask {
    pub fn new(pattern: &str, seed: u64) -> Result<Self> {
        let generator = rand_regex::Regex::compile(pattern, MAX_REPEAT).map_err(|err| {
            MaskError::BadPattern {
                pattern: pattern.to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(Self {
            generator,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl MaskStrategy for PatternMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        let generated: String = self.rng.sample(&self.generator);
        Ok(Value::Text(generated))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(pattern) = rule.mask.regex.as_deref() else {
        return Ok((configuration, false));
    };
    let mask = PatternMask::new(pattern, seed)?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
