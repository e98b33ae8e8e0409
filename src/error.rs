//! Unified error handling for mcp-sweep
//!
//! External commands are the only things that can fail here. Components
//! absorb these errors at their own boundary (log a marker, return an
//! empty result); nothing escalates past `main` except a failed read of
//! the menu choice.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum SweepError {
    /// The command binary could not be launched at all
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The command ran but reported failure
    #[error("{command} failed: {detail}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        detail: String,
    },
}

impl SweepError {
    /// Name of the command that produced this error.
    pub fn command(&self) -> &str {
        match self {
            SweepError::Spawn { command, .. } => command,
            SweepError::CommandFailed { command, .. } => command,
        }
    }
}

/// Result type alias for sweep operations
pub type SweepResult<T> = std::result::Result<T, SweepError>;

/// Convenience constructors
pub mod errors {
    use super::*;

    pub fn spawn_error(command: impl Into<String>, source: io::Error) -> SweepError {
        SweepError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Builds the failure detail from stderr, falling back to the exit
    /// status when the command said nothing.
    pub fn command_failed(
        command: impl Into<String>,
        code: Option<i32>,
        stderr: impl AsRef<str>,
    ) -> SweepError {
        let trimmed = stderr.as_ref().trim();
        let detail = if trimmed.is_empty() {
            match code {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            }
        } else {
            trimmed.to_string()
        };
        SweepError::CommandFailed {
            command: command.into(),
            code,
            detail,
        }
    }
}
