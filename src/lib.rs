// Veil - Declarative Record Masking Engine
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - Declarative Record Masking
//!
//! Veil masks sensitive fields in JSON-like records according to a
//! declarative rule file. Each rule binds a dotted field path to a mask
//! kind; the engine applies the resolved bindings in declaration order
//! and never lets a failed binding leak its original value.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Declaring** masks in a YAML or JSON rule file
//! - **Resolving** rules into strategies through a factory registry
//! - **Masking** records with fail-closed semantics and context-aware
//!   masks (field copy, template rendering)
//! - **Streaming** JSON-lines input through the engine as a filter
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`masking`] - Engine, configuration, adapter, and registry
//! - [`masks`] - Concrete mask kinds
//! - [`domain`] - Core domain types (values, rules, errors)
//! - [`config`] - Rule file loading
//! - [`logging`] - Structured logging setup
//!
//! ## Example
//!
//! ```no_run
//! use veil::config::RuleSet;
//! use veil::domain::{record_from_json, Value};
//! use veil::masking::build_engine;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ruleset = RuleSet::from_file("masking.yml")?;
//! let mut engine = build_engine(&ruleset.masking, 42)?;
//!
//! let record = record_from_json(serde_json::json!({"name": "Alexis"})).unwrap();
//! let masked = engine.mask(&record);
//! assert!(masked.is_complete());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;
pub mod masks;
