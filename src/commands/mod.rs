//! CLI command handling
//!
//! The interactive menu plus the direct-mode handlers behind it.

pub mod parser;

// Re-exports (used by main.rs)
pub use parser::{Cli, Commands};

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::console;
use crate::sweeper::Sweeper;

const MENU_RULE_WIDTH: usize = 60;

/// Interactive single-shot menu: print the options, read one trimmed
/// line from stdin, dispatch, done. Unrecognized input performs no
/// action at all.
pub fn run_menu(sweeper: &Sweeper) -> Result<()> {
    print_banner();
    print_options(sweeper);

    print!("\nEnter choice (1/2/3/0): ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read menu choice")?;

    // EOF leaves the line empty and falls through to the invalid arm.
    match line.trim() {
        "1" => {
            let killed = sweeper.smart_sweep();
            finish_kill_run(sweeper, "Smart", killed);
        }
        "2" => {
            let killed = sweeper.force_sweep();
            finish_kill_run(sweeper, "Force", killed);
        }
        "3" => sweeper.list_processes(),
        "0" => println!("👋 Exiting without changes"),
        _ => console::error("Invalid choice"),
    }
    Ok(())
}

/// `mcps smart` - selective kill without the menu.
pub fn run_smart(sweeper: &Sweeper) -> Result<()> {
    let killed = sweeper.smart_sweep();
    finish_kill_run(sweeper, "Smart", killed);
    Ok(())
}

/// `mcps force` - bulk kill without the menu.
pub fn run_force(sweeper: &Sweeper) -> Result<()> {
    let killed = sweeper.force_sweep();
    finish_kill_run(sweeper, "Force", killed);
    Ok(())
}

/// `mcps list` - report-only mode.
pub fn run_list(sweeper: &Sweeper) -> Result<()> {
    sweeper.list_processes();
    Ok(())
}

fn finish_kill_run(sweeper: &Sweeper, mode: &str, killed: usize) {
    println!("\n📊 {mode} mode finished, terminated {killed} processes");
    sweeper.settle();
    sweeper.verify_remaining();
    println!("\n🎉 Done!");
}

fn print_banner() {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    println!("{rule}");
    println!("🚀 AI Terminal MCP process cleanup");
    println!("{rule}");
}

fn print_options(sweeper: &Sweeper) {
    let image = &sweeper.config().image_name;
    println!("\nSelect a mode:");
    println!("1. 🎯 Smart mode (terminate MCP-related processes only)");
    println!("2. 🔥 Force mode (terminate all {image} processes)");
    println!("3. 📋 List {image} processes (no termination)");
    println!("0. ❌ Exit");
}
