use std::process::ExitCode;
use std::sync::Arc;

use mcp_sweep::commands::{self, Cli, Commands};
use mcp_sweep::runner::SystemRunner;
use mcp_sweep::sweeper::Sweeper;
use mcp_sweep::{signal, SweepConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    signal::install();

    let command = Cli::parse_command();
    match main_impl(command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("❌ {err}");
            ExitCode::from(1)
        }
    }
}

fn main_impl(command: Commands) -> Result<ExitCode, String> {
    match command {
        Commands::Menu => {
            commands::run_menu(&build_sweeper()).map_err(|e| e.to_string())?;
            Ok(ExitCode::from(0))
        }
        Commands::Smart => {
            commands::run_smart(&build_sweeper()).map_err(|e| e.to_string())?;
            Ok(ExitCode::from(0))
        }
        Commands::Force => {
            commands::run_force(&build_sweeper()).map_err(|e| e.to_string())?;
            Ok(ExitCode::from(0))
        }
        Commands::List => {
            commands::run_list(&build_sweeper()).map_err(|e| e.to_string())?;
            Ok(ExitCode::from(0))
        }
        Commands::Version => {
            println!("mcp-sweep {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::from(0))
        }
    }
}

fn build_sweeper() -> Sweeper {
    Sweeper::new(Arc::new(SystemRunner), SweepConfig::default())
}
