//! Record-aware adapter
//!
//! Lifts a scalar [`MaskStrategy`] to the [`RecordStrategy`] contract by
//! locating the target key inside a record and dispatching on the shape
//! of the value found there.

use crate::domain::{MaskError, Record, Value};
use crate::masking::strategy::{MaskStrategy, RecordStrategy};

/// Wraps one scalar strategy and applies it at a single record key.
pub struct FieldAdapter {
    inner: Box<dyn MaskStrategy>,
}

impl FieldAdapter {
    pub fn new(inner: Box<dyn MaskStrategy>) -> Self {
        Self { inner }
    }
}

impl RecordStrategy for FieldAdapter {
    /// Dispatch by the shape of the value under `key`:
    ///
    /// - list (of scalars or of records): apply per element; a failing
    ///   element keeps its original value and processing continues;
    /// - any other shape (scalar or nested record): apply once; on
    ///   failure the field keeps its original value, and the driver,
    ///   not the adapter, performs fail-closed deletion;
    /// - absent key: record passes through untouched.
    ///
    /// Only the last failure among the processed elements is reported.
    fn mask_field(
        &mut self,
        mut record: Record,
        key: &str,
        contexts: &[Record],
    ) -> (Record, Option<MaskError>) {
        let Some(current) = record.get(key).cloned() else {
            return (record, None);
        };

        let mut failure = None;
        let masked = match current {
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match self.inner.mask(&item, contexts) {
                        Ok(masked) => out.push(masked),
                        Err(err) => {
                            failure = Some(err);
                            out.push(item);
                        }
                    }
                }
                Some(Value::List(out))
            }
            // Scalars and nested records share the single-apply path; a
            // nested record reaches here when the wrapped strategy is a
            // nested engine built from a dotted path.
            other => match self.inner.mask(&other, contexts) {
                Ok(masked) => Some(masked),
                Err(err) => {
                    failure = Some(err);
                    None
                }
            },
        };

        if let Some(value) = masked {
            record.insert(key.to_string(), value);
        }
        (record, failure)
    }
}
