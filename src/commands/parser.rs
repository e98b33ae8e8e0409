//! CLI argument parsing and routing

use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// mcp-sweep - find and terminate AI Terminal MCP Node.js processes
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mcps",
    about = "Windows cleanup tool for AI Terminal MCP Node.js processes",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive mode selection (default when no subcommand is given)
    Menu,

    /// Terminate only MCP-related node.exe processes, then verify
    Smart,

    /// Terminate all node.exe processes, then verify
    Force,

    /// List node.exe processes without terminating anything
    List,

    /// Show version information
    #[command(name = "v")]
    Version,
}

impl Cli {
    /// Parse the process arguments into the final command (default Menu).
    pub fn parse_command() -> Commands {
        Self::parse_command_from(std::env::args_os())
    }

    /// Try parsing custom argv (for tests).
    pub fn try_parse_command_from<I, T>(iter: I) -> Result<Commands, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cli = Cli::try_parse_from(iter)?;
        Ok(cli.command.take().unwrap_or(Commands::Menu))
    }

    /// Parse custom argv; on failure clap prints the error and exits.
    pub fn parse_command_from<I, T>(iter: I) -> Commands
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_command_from(iter) {
            Ok(command) => command,
            Err(err) => err.exit(),
        }
    }
}
