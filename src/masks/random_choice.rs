//! Random choice mask: replace with a uniformly chosen candidate.

use crate::domain::{MaskError, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct RandomChoiceMask {
    choices: Vec<Value>,
    rng: StdRng,
}

impl RandomChoiceMask {
    pub fn new(choices: Vec<Value>, seed: u64) -> Result<Self> {
        if choices.is_empty() {
            return Err(MaskError::InvalidRule {
                kind: "randomChoice",
                reason: "candidate list must not be empty".to_string(),
            });
        }
        Ok(Self {
            choices,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl MaskStrategy for RandomChoiceMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        let index = self.rng.gen_range(0..self.choices.len());
        Ok(self.choices[index].clone())
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    if rule.mask.random_choice.is_empty() {
        return Ok((configuration, false));
    }
    let mask = RandomChoiceMask::new(rule.mask.random_choice.clone(), seed)?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
