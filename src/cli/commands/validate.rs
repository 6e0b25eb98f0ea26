//! Validate command: dry-run the rule file through the registry.

use anyhow::Result;
use clap::Args;
use tracing::error;

use crate::config::RuleSet;
use crate::masking::build_configuration;

#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    pub fn execute(&self, rules_path: &str) -> Result<i32> {
        let ruleset = match RuleSet::from_file(rules_path) {
            Ok(ruleset) => ruleset,
            Err(err) => {
                error!(path = rules_path, error = %err, "rule file rejected");
                eprintln!("✗ {rules_path}: {err}");
                return Ok(1);
            }
        };

        // Seed is irrelevant here; only construction-time failures matter.
        match build_configuration(&ruleset.masking, 0) {
            Ok(configuration) => {
                println!(
                    "✓ {rules_path}: {} rules, {} bindings",
                    ruleset.masking.len(),
                    configuration.entries().len()
                );
                Ok(0)
            }
            Err(err) => {
                error!(path = rules_path, error = %err, "rule file rejected");
                eprintln!("✗ {rules_path}: {err}");
                Ok(1)
            }
        }
    }
}
