//! Per-PID command line lookup via `wmic`

use std::sync::Arc;

use crate::console;
use crate::runner::CommandRunner;

const WMIC: &str = "wmic";
const COMMAND_LINE_KEY: &str = "CommandLine=";

/// Fetches the full command line of a single process.
///
/// `wmic ... /format:value` prints `CommandLine=<text>` surrounded by
/// blank lines. The empty string is the designed "unknown" sentinel:
/// dead PIDs racing the enumeration, query errors and processes without
/// an accessible command line all collapse to it, and the classifier
/// treats it as not related.
pub struct CommandLineInspector {
    runner: Arc<dyn CommandRunner>,
}

impl CommandLineInspector {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    pub fn command_line(&self, pid: &str) -> String {
        let selector = format!("ProcessId={pid}");
        let args = [
            "process",
            "where",
            selector.as_str(),
            "get",
            "CommandLine",
            "/format:value",
        ];
        match self.runner.run(WMIC, &args) {
            Ok(output) if output.success() => extract_command_line(&output.stdout),
            Ok(output) => {
                // Routine for PIDs that exited between enumeration and
                // inspection; not worth console noise.
                tracing::debug!(pid, code = ?output.code, "wmic query failed");
                String::new()
            }
            Err(err) => {
                console::warning(format!("Failed to query command line for PID {pid}: {err}"));
                String::new()
            }
        }
    }
}

fn extract_command_line(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix(COMMAND_LINE_KEY))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
