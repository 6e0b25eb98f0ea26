//! Core domain types and models
//!
//! This module contains the value model shared by every strategy, the
//! rule declaration shapes, and the domain error hierarchy.

pub mod errors;
pub mod rule;
pub mod value;

pub use errors::{MaskError, Result};
pub use rule::{
    IncrementalParams, MaskType, RandDateBounds, RandIntBounds, Rule, Selector, WeightedChoice,
};
pub use value::{record_from_json, Record, Value};
