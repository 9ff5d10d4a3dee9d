//! Meshvet core library.
//!
//! This crate exposes programmatic APIs for deriving service-mesh
//! validation status indicators and traffic bands from telemetry
//! snapshot files.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `status`: Severity aggregation into the three-way validation status.
//! - `indicator`: Status presentation, tooltip messages, size tokens.
//! - `legend`: Edge legend rows and traffic-rate classification.
//! - `runner`: Snapshot file walking and report aggregation.
//! - `models`: Data models for snapshots and report output structs.
//! - `output`: Human/JSON printers for check/traffic/legend.
//! - `utils`: Supporting console helpers.
pub mod cli;
pub mod config;
pub mod indicator;
pub mod legend;
pub mod models;
pub mod output;
pub mod runner;
pub mod status;
pub mod utils;
