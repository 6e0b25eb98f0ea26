//! Weighted choice mask: replace with a weight-biased candidate.

use crate::domain::{MaskError, Record, Result, Rule, Value, WeightedChoice};
use crate::masking::{MaskStrategy, MaskingConfiguration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct WeightedChoiceMask {
    choices: Vec<WeightedChoice>,
    total_weight: u32,
    rng: StdRng,
}

impl WeightedChoiceMask {
    pub fn new(choices: Vec<WeightedChoice>, seed: u64) -> Result<Self> {
        let total_weight: u32 = choices.iter().map(|c| c.weight).sum();
        if total_weight == 0 {
            return Err(MaskError::InvalidRule {
                kind: "weightedChoice",
                reason: "total weight must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            choices,
            total_weight,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl MaskStrategy for WeightedChoiceMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        let mut roll = self.rng.gen_range(0..self.total_weight);
        for candidate in &self.choices {
            if roll < candidate.weight {
                return Ok(candidate.choice.clone());
            }
            roll -= candidate.weight;
        }
        // Unreachable: the roll is strictly below the summed weights.
        Ok(self
            .choices
            .last()
            .map(|c| c.choice.clone())
            .unwrap_or(Value::Null))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    if rule.mask.weighted_choice.is_empty() {
        return Ok((configuration, false));
    }
    let mask = WeightedChoiceMask::new(rule.mask.weighted_choice.clone(), seed)?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
