//! Rule declaration shapes
//!
//! These structs mirror the external declaration format: one rule binds a
//! dot-separated field selector to exactly one populated mask descriptor.
//! An external loader (YAML or JSON) deserializes directly into them; the
//! registry then resolves each rule to a concrete strategy.

use crate::domain::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field selector: a dot-separated path into the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    pub jsonpath: String,
}

impl Selector {
    pub fn new(jsonpath: impl Into<String>) -> Self {
        Self {
            jsonpath: jsonpath.into(),
        }
    }
}

/// Bounds for the random integer mask (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandIntBounds {
    pub min: i64,
    pub max: i64,
}

/// Bounds for the random date mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandDateBounds {
    pub date_min: DateTime<Utc>,
    pub date_max: DateTime<Utc>,
}

/// Parameters for the incremental counter mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementalParams {
    pub start: i64,
    #[serde(default = "default_increment")]
    pub increment: i64,
}

fn default_increment() -> i64 {
    1
}

/// One candidate of the weighted choice mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedChoice {
    pub choice: Value,
    pub weight: u32,
}

/// Strategy descriptors; exactly one should be populated per rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaskType {
    /// Replace with a fixed value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,
    /// Replace with a uniformly chosen candidate
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub random_choice: Vec<Value>,
    /// Replace with a weight-biased candidate
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weighted_choice: Vec<WeightedChoice>,
    /// Generate a fresh value matching a regular expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Deterministically select a candidate by hashing the input
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hash: Vec<Value>,
    /// Replace with a random integer within bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_int: Option<RandIntBounds>,
    /// Replace with a random date within bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rand_date: Option<RandDateBounds>,
    /// Replace with an incrementing counter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental: Option<IncrementalParams>,
    /// Copy the value of another field of the same record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    /// Render a template against the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Remove the field entirely
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub remove: bool,
}

impl MaskType {
    /// True when no descriptor is populated; such a rule is claimed by no
    /// mask kind.
    pub fn is_empty(&self) -> bool {
        self.constant.is_none()
            && self.random_choice.is_empty()
            && self.weighted_choice.is_empty()
            && self.regex.is_none()
            && self.hash.is_empty()
            && self.random_int.is_none()
            && self.rand_date.is_none()
            && self.incremental.is_none()
            && self.replacement.is_none()
            && self.template.is_none()
            && !self.remove
    }
}

/// A declared masking rule: selector + strategy descriptor + advisory
/// cache flag (the cache flag is consumed by external collaborators only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub selector: Selector,
    #[serde(default)]
    pub mask: MaskType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
}
