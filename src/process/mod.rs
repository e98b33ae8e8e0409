//! Process pipeline: enumerate, inspect, classify, terminate

pub mod classifier;
pub mod inspector;
pub mod lister;
pub mod terminator;

pub use classifier::RelevanceClassifier;
pub use inspector::CommandLineInspector;
pub use lister::ProcessLister;
pub use terminator::{BulkOutcome, Terminator};

/// One row of `tasklist` output.
///
/// Fields stay textual: every value is read from one command's output
/// and, at most, written into another command's argument list. The tool
/// never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub name: String,
    pub pid: String,
    /// Session name column; empty when the row did not carry it.
    pub session: String,
    /// Memory usage column (e.g. `45,678 K`); empty when absent.
    pub memory: String,
}
