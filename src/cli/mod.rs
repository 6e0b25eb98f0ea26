//! Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

use commands::init::InitArgs;
use commands::mask::MaskArgs;
use commands::validate::ValidateArgs;

#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(about = "Declarative record masking for JSON-lines streams")]
#[command(version)]
pub struct Cli {
    /// Path to the masking rule file
    #[arg(short, long, global = true, default_value = "masking.yml", env = "VEIL_RULES")]
    pub rules: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info", env = "VEIL_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable lines
    #[arg(long, global = true, env = "VEIL_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask a stream of JSON-lines records from stdin to stdout
    Mask(MaskArgs),
    /// Check that a rule file parses and every rule resolves to a mask
    Validate(ValidateArgs),
    /// Write a starter rule file
    Init(InitArgs),
}
