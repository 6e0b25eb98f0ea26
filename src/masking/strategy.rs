//! Strategy contracts and the registration protocol
//!
//! Strategy authors implement [`MaskStrategy`] only; the engine lifts it
//! to the record-aware [`RecordStrategy`] contract through
//! [`FieldAdapter`](crate::masking::adapter::FieldAdapter).

use crate::domain::{MaskError, Record, Result, Rule, Value};
use crate::masking::configuration::MaskingConfiguration;

/// A scalar masking capability: transform one value, optionally reading
/// sibling data from the supplied context records.
///
/// Implementations are pure with respect to the record but may hold
/// private mutable state (counters, seeded RNGs) advanced across calls.
/// A strategy holding such state is not safe to share across concurrent
/// callers without external synchronization.
pub trait MaskStrategy {
    fn mask(&mut self, value: &Value, contexts: &[Record]) -> Result<Value>;
}

/// A record-aware masking capability: given a whole record and a target
/// key, replace the value(s) at that key and leave every other key
/// untouched.
///
/// The record is always handed back, alongside the LAST failure
/// encountered during the call (earlier failures are superseded).
pub trait RecordStrategy {
    fn mask_field(
        &mut self,
        record: Record,
        key: &str,
        contexts: &[Record],
    ) -> (Record, Option<MaskError>);
}

/// Registration protocol shared by every mask kind.
///
/// A factory inspects only the descriptor relevant to its kind:
/// - `Ok((configuration, false))`: rule not applicable, configuration
///   returned untouched, no error;
/// - `Ok((configuration, true))`: rule claimed and bound;
/// - `Err(..)`: applicable but invalid; fatal at startup regardless of
///   any claim.
pub type MaskFactory =
    fn(&Rule, MaskingConfiguration, u64) -> Result<(MaskingConfiguration, bool)>;
