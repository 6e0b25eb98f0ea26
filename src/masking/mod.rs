//! Masking core
//!
//! The composition engine: strategy contracts, the record-aware adapter,
//! the ordered rule configuration with dotted-path nesting, the masking
//! driver, and the mask kind registry.
//!
//! One call to [`MaskingEngine::mask`] processes exactly one record to
//! completion, synchronously. Strategies hold exclusively-owned mutable
//! state (seeded RNGs, counters); masking many records in parallel
//! requires one engine per worker or external synchronization.

pub mod adapter;
pub mod configuration;
pub mod engine;
pub mod registry;
pub mod strategy;

pub use adapter::FieldAdapter;
pub use configuration::{Binding, MaskingConfiguration};
pub use engine::{MaskedRecord, MaskingEngine};
pub use registry::{build_configuration, build_engine, MASK_FACTORIES};
pub use strategy::{MaskFactory, MaskStrategy, RecordStrategy};
