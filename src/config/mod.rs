//! Configuration management
//!
//! Loads declared masking rules from a YAML or JSON rule file into the
//! [`Rule`] shapes the registry consumes. The file format is chosen by
//! extension (`.json` is JSON, anything else is treated as YAML).

use crate::domain::{MaskError, Result, Rule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed rule file: format version plus the ordered rule list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub masking: Vec<Rule>,
}

impl RuleSet {
    /// Load and validate a rule file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            MaskError::Configuration(format!(
                "cannot read rule file {}: {err}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let ruleset: RuleSet = if is_json {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };

        ruleset.validate()?;
        Ok(ruleset)
    }

    /// Structural checks that do not need strategy construction: every
    /// rule must carry a selector path.
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.masking.iter().enumerate() {
            if rule.selector.jsonpath.is_empty() {
                return Err(MaskError::Configuration(format!(
                    "rule #{} has an empty selector",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}
