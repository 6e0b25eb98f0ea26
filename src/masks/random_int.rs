//! Random integer mask: replace with an integer drawn within inclusive
//! bounds.

use crate::domain::{MaskError, RandIntBounds, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct RandomIntMask {
    bounds: RandIntBounds,
    rng: StdRng,
}

impl RandomIntMask {
    pub fn new(bounds: RandIntBounds, seed: u64) -> Result<Self> {
        if bounds.min > bounds.max {
            return Err(MaskError::InvalidRule {
                kind: "randomInt",
                reason: format!("min {} is greater than max {}", bounds.min, bounds.max),
            });
        }
        Ok(Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl MaskStrategy for RandomIntMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        Ok(Value::Int(
            self.rng.gen_range(self.bounds.min..=self.bounds.max),
        ))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(bounds) = rule.mask.random_int else {
        return Ok((configuration, false));
    };
    let mask = RandomIntMask::new(bounds, seed)?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
