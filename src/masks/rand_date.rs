//! Random date mask: replace with a timestamp drawn within a window.

use crate::domain::{MaskError, RandDateBounds, Record, Result, Rule, Value};
use crate::masking::{MaskStrategy, MaskingConfiguration};
use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws uniformly from `[dateMin, dateMax)` with second granularity.
#[derive(Debug)]
pub struct RandDateMask {
    bounds: RandDateBounds,
    span_seconds: i64,
    rng: StdRng,
}

impl RandDateMask {
    pub fn new(bounds: RandDateBounds, seed: u64) -> Result<Self> {
        let span_seconds = (bounds.date_max - bounds.date_min).num_seconds();
        if span_seconds <= 0 {
            return Err(MaskError::InvalidRule {
                kind: "randDate",
                reason: format!(
                    "dateMin {} must be before dateMax {}",
                    bounds.date_min, bounds.date_max
                ),
            });
        }
        Ok(Self {
            bounds,
            span_seconds,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl MaskStrategy for RandDateMask {
    fn mask(&mut self, _value: &Value, _contexts: &[Record]) -> Result<Value> {
        let offset = self.rng.gen_range(0..self.span_seconds);
        Ok(Value::Timestamp(
            self.bounds.date_min + Duration::seconds(offset),
        ))
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    let Some(bounds) = rule.mask.rand_date else {
        return Ok((configuration, false));
    };
    let mask = RandDateMask::new(bounds, seed)?;
    Ok((
        configuration.with_entry(&rule.selector.jsonpath, Box::new(mask)),
        true,
    ))
}
