//! Remove mask: delete the field entirely.
//!
//! Deletion is inherently record-level, so this kind implements the
//! record-aware contract directly instead of going through the adapter.

use crate::domain::{MaskError, Record, Result, Rule};
use crate::masking::{MaskingConfiguration, RecordStrategy};

pub struct RemoveMask;

impl RecordStrategy for RemoveMask {
    fn mask_field(
        &mut self,
        mut record: Record,
        key: &str,
        _contexts: &[Record],
    ) -> (Record, Option<MaskError>) {
        record.remove(key);
        (record, None)
    }
}

pub fn register(
    rule: &Rule,
    configuration: MaskingConfiguration,
    _seed: u64,
) -> Result<(MaskingConfiguration, bool)> {
    if !rule.mask.remove {
        return Ok((configuration, false));
    }
    Ok((
        configuration.with_record_entry(&rule.selector.jsonpath, Box::new(RemoveMask)),
        true,
    ))
}
