//! Narrow seam for external command execution
//!
//! Everything the tool does against the OS goes through `tasklist`,
//! `wmic` and `taskkill`. Routing every invocation through one trait
//! keeps the pipeline testable with a scripted runner.

use std::io;
use std::process::Command;

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a program with arguments, capturing exit code and both streams.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        // Windows tools localize their prose, but every token the
        // pipeline parses (image names, PIDs, CommandLine=, SUCCESS)
        // is ASCII, so a lossy decode never loses anything we read.
        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(program, args = ?args, code = ?result.code, "external command finished");
        Ok(result)
    }
}
