//! Init command: write a starter rule file.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

const STARTER_RULES: &str = r#"version: "1"
masking:
  - selector:
      jsonpath: "name"
    mask:
      hash: ["Michel", "Marc", "Matthias", "Youen", "Alexis"]
  - selector:
      jsonpath: "surname"
    mask:
      randomChoice: ["Dupont", "Durand", "Martin"]
  - selector:
      jsonpath: "mail"
    mask:
      template: "{{name}}.{{surname}}@example.com"
  - selector:
      jsonpath: "phone"
    mask:
      regex: "0[1-7]( [0-9]{2}){4}"
  - selector:
      jsonpath: "ssn"
    mask:
      remove: true
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the starter rule file
    #[arg(short, long, default_value = "masking.yml")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn execute(&self) -> Result<i32> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        std::fs::write(&self.output, STARTER_RULES)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        info!(path = %self.output.display(), "starter rule file written");
        println!("Wrote {}", self.output.display());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSet;

    #[test]
    fn test_starter_rules_parse_and_resolve() {
        let ruleset: RuleSet = serde_yaml::from_str(STARTER_RULES).unwrap();
        assert_eq!(ruleset.masking.len(), 5);
        crate::masking::build_configuration(&ruleset.masking, 0).unwrap();
    }
}
