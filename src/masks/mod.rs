//! Concrete mask kinds
//!
//! One module per kind. Each exposes a strategy type plus a `register`
//! factory following the shared registration protocol
//! ([`MaskFactory`](crate::masking::MaskFactory)); the registry tries
//! them in order until one claims a rule.

pub mod constant;
pub mod hash;
pub mod incremental;
pub mod pattern;
pub mod rand_date;
pub mod random_choice;
pub mod random_int;
pub mod remove;
pub mod replacement;
pub mod template;
pub mod weighted_choice;

pub use constant::ConstantMask;
pub use hash::HashMask;
pub use incremental::IncrementalMask;
pub use pattern::PatternMask;
pub use rand_date::RandDateMask;
pub use random_choice::RandomChoiceMask;
pub use random_int::RandomIntMask;
pub use remove::RemoveMask;
pub use replacement::ReplacementMask;
pub use template::TemplateMask;
pub use weighted_choice::WeightedChoiceMask;
