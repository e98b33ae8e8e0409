//! mcp-sweep Library
//!
//! Finds and terminates Node.js processes belonging to the AI Terminal
//! MCP server, leaving unrelated Node.js work untouched. The pipeline
//! shells out to `tasklist`, `wmic` and `taskkill` through a narrow
//! runner trait, so every stage can be driven by tests with a scripted
//! runner instead of the real OS tools.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod process;
pub mod runner;
pub mod signal;
pub mod sweeper;

pub use config::SweepConfig;
pub use error::{SweepError, SweepResult};
pub use process::{
    BulkOutcome, CommandLineInspector, ProcessLister, ProcessRecord, RelevanceClassifier,
    Terminator,
};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use sweeper::Sweeper;
