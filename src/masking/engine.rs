//! Masking driver
//!
//! The [`MaskingEngine`] is the top-level entry point: it copies the
//! input record, applies every configured binding in order, threads
//! context, and returns the transformed record together with an
//! aggregated outcome.
//!
//! # Context propagation
//!
//! A ROOT engine passes the current working output itself as the single
//! context record, so later bindings see earlier bindings' effects, and
//! a cross-field strategy may reference a sibling that is not yet masked
//! (or already masked) depending on binding order. A NESTED engine,
//! reached through a dotted path, passes the caller's contexts through
//! unchanged.
//!
//! # Failure policy
//!
//! On a binding failure the target key is deleted from the working
//! output (fail-closed: a failed transform must never surface the
//! original sensitive value; absence is acceptable degradation, leakage
//! is not). Processing continues, and only the LAST failure across the
//! whole record is retained.

use crate::domain::{MaskError, Record, Result, Value};
use crate::masking::configuration::MaskingConfiguration;
use crate::masking::strategy::MaskStrategy;

/// Outcome of one masking pass: always a record, plus the last failure
/// encountered (if any).
#[derive(Debug)]
pub struct MaskedRecord {
    /// The transformed record; fields whose masking failed are absent.
    pub record: Record,
    /// Last failure encountered, `None` on full success.
    pub failure: Option<MaskError>,
}

impl MaskedRecord {
    /// True when every configured binding applied cleanly.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Applies a [`MaskingConfiguration`] to records, one at a time.
///
/// Strategies may hold mutable internal state (seeded RNGs, counters),
/// so masking takes `&mut self`; sharing an engine across threads
/// requires external synchronization.
pub struct MaskingEngine {
    configuration: MaskingConfiguration,
    root: bool,
}

impl MaskingEngine {
    pub(crate) fn root(configuration: MaskingConfiguration) -> Self {
        Self {
            configuration,
            root: true,
        }
    }

    pub(crate) fn nested(configuration: MaskingConfiguration) -> Self {
        Self {
            configuration,
            root: false,
        }
    }

    /// Mask one record to completion.
    pub fn mask(&mut self, record: &Record) -> MaskedRecord {
        self.mask_with_contexts(record, &[])
    }

    fn mask_with_contexts(&mut self, record: &Record, contexts: &[Record]) -> MaskedRecord {
        let mut output = record.clone();
        let mut failure = None;
        let root = self.root;

        for binding in self.configuration.bindings_mut() {
            let key = binding.key().to_string();
            let (next, err) = if root {
                // The context is the working output as it stands before
                // this binding mutates it.
                let context = [output.clone()];
                binding.strategy_mut().mask_field(output, &key, &context)
            } else {
                binding.strategy_mut().mask_field(output, &key, contexts)
            };
            output = next;
            if let Some(err) = err {
                output.remove(&key);
                failure = Some(err);
            }
        }

        MaskedRecord {
            record: output,
            failure,
        }
    }
}

impl MaskStrategy for MaskingEngine {
    /// A nested engine is itself a scalar strategy: record input runs a
    /// full pass, anything else passes through untouched. A failed pass
    /// surfaces as an error so the parent binding fail-closes the whole
    /// subtree.
    fn mask(&mut self, value: &Value, contexts: &[Record]) -> Result<Value> {
        let Value::Record(record) = value else {
            return Ok(value.clone());
        };
        let MaskedRecord { record, failure } = self.mask_with_contexts(record, contexts);
        match failure {
            Some(err) => Err(err),
            None => Ok(Value::Record(record)),
        }
    }
}
