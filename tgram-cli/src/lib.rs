//! # tgram-cli
//!
//! Command-line surface for tgram: argument parsing, upload fixtures and the operational
//! scenario run against a real channel.

pub mod cli;
pub mod fixtures;
pub mod scenarios;

pub use cli::{load_config, Cli, Commands};
pub use scenarios::{render_table, run_scenarios, ScenarioResult, Status};
