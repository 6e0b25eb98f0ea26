//! Domain error types
//!
//! Two failure classes flow through the engine: construction-time failures
//! (invalid rule parameters, fatal at startup) and runtime per-field
//! failures (recovered locally by the driver's fail-closed policy).

use thiserror::Error;

/// Result alias used throughout the masking core.
pub type Result<T> = std::result::Result<T, MaskError>;

/// Masking error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaskError {
    /// Rule file or configuration assembly problems
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No registered mask kind recognized the rule
    #[error("no mask kind claims selector '{0}'")]
    UnclaimedRule(String),

    /// Malformed generation pattern (construction-time)
    #[error("malformed generation pattern '{pattern}': {reason}")]
    BadPattern { pattern: String, reason: String },

    /// Malformed template string (construction-time)
    #[error("malformed template '{template}': {reason}")]
    BadTemplate { template: String, reason: String },

    /// Invalid parameters for an otherwise recognized mask kind
    #[error("invalid {kind} mask: {reason}")]
    InvalidRule { kind: &'static str, reason: String },

    /// A cross-field strategy was invoked without any context record
    #[error("no context available to resolve field '{0}'")]
    MissingContext(String),

    /// A cross-field strategy referenced a field absent from the context
    #[error("field '{0}' not found in context")]
    UnknownField(String),
}

impl From<std::io::Error> for MaskError {
    fn from(err: std::io::Error) -> Self {
        MaskError::Configuration(format!("I/O error: {err}"))
    }
}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> Self {
        MaskError::Configuration(format!("JSON parse error: {err}"))
    }
}

impl From<serde_yaml::Error> for MaskError {
    fn from(err: serde_yaml::Error) -> Self {
        MaskError::Configuration(format!("YAML parse error: {err}"))
    }
}
