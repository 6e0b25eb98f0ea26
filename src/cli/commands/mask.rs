//! Mask command: run the engine as a JSON-lines filter.

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::RuleSet;
use crate::domain::{record_from_json, Value};
use crate::masking::build_engine;

#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Seed for randomized masks; fresh entropy when omitted
    #[arg(short, long, env = "VEIL_SEED")]
    pub seed: Option<u64>,

    /// Read records from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Exit non-zero when any record came out partially masked
    #[arg(long)]
    pub strict: bool,
}

impl MaskArgs {
    pub fn execute(&self, rules_path: &str) -> Result<i32> {
        let ruleset = RuleSet::from_file(rules_path)
            .with_context(|| format!("failed to load rule file {rules_path}"))?;

        let seed = self.seed.unwrap_or_else(rand::random);
        debug!(seed, rules = ruleset.masking.len(), "assembling masking engine");

        let mut engine = build_engine(&ruleset.masking, seed)
            .context("failed to assemble masking configuration")?;

        let reader: Box<dyn BufRead> = match &self.input {
            Some(path) => Box::new(BufReader::new(File::open(path).with_context(
                || format!("failed to open input file {}", path.display()),
            )?)),
            None => Box::new(io::stdin().lock()),
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();

        let mut records: u64 = 0;
        let mut failures: u64 = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.context("failed to read input line")?;
            if line.trim().is_empty() {
                continue;
            }

            let raw: serde_json::Value = serde_json::from_str(&line)
                .with_context(|| format!("line {}: invalid JSON", index + 1))?;
            let Some(record) = record_from_json(raw) else {
                warn!(line = index + 1, "skipping non-object document");
                continue;
            };

            let masked = engine.mask(&record);
            if let Some(failure) = &masked.failure {
                failures += 1;
                warn!(line = index + 1, error = %failure, "record partially masked");
            }

            let output: serde_json::Value = Value::Record(masked.record).into();
            serde_json::to_writer(&mut out, &output).context("failed to write record")?;
            out.write_all(b"\n").context("failed to write record")?;
            records += 1;
        }
        out.flush().context("failed to flush output")?;

        info!(records, failures, "masking finished");

        if self.strict && failures > 0 {
            return Ok(1);
        }
        Ok(0)
    }
}
