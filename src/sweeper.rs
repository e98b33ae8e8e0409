//! The three cleanup strategies and the post-action check

use std::sync::Arc;
use std::thread;

use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

use crate::config::SweepConfig;
use crate::console;
use crate::process::{
    BulkOutcome, CommandLineInspector, ProcessLister, RelevanceClassifier, Terminator,
};
use crate::runner::CommandRunner;

/// Coordinates enumeration, classification and termination for one run.
///
/// Every strategy enumerates first and short-circuits when nothing is
/// running; no kill command is ever issued against an empty system.
pub struct Sweeper {
    config: SweepConfig,
    lister: ProcessLister,
    inspector: CommandLineInspector,
    classifier: RelevanceClassifier,
    terminator: Terminator,
}

impl Sweeper {
    pub fn new(runner: Arc<dyn CommandRunner>, config: SweepConfig) -> Self {
        let lister = ProcessLister::new(runner.clone(), config.image_name.clone());
        let inspector = CommandLineInspector::new(runner.clone());
        let classifier = RelevanceClassifier::new(
            CommandLineInspector::new(runner.clone()),
            &config.keywords,
        );
        let terminator = Terminator::new(runner);
        Self {
            config,
            lister,
            inspector,
            classifier,
            terminator,
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Smart mode: terminate only processes whose command line marks
    /// them as MCP work. Returns how many kills succeeded.
    pub fn smart_sweep(&self) -> usize {
        console::search("Smart mode: scanning for MCP-related processes...");
        let records = self.lister.list();
        if records.is_empty() {
            console::info(format!("No {} processes found", self.config.image_name));
            return 0;
        }
        console::note(format!(
            "Found {} {} processes, analyzing...",
            records.len(),
            self.config.image_name
        ));

        let mut related = Vec::new();
        for record in &records {
            if self.classifier.is_related(&record.pid) {
                console::target(format!("Found MCP-related process: PID {}", record.pid));
                related.push(record);
            }
        }
        if related.is_empty() {
            console::info(format!(
                "No MCP-related {} processes found",
                self.config.image_name
            ));
            return 0;
        }

        println!(
            "\n🚀 Terminating {} MCP-related processes...",
            related.len()
        );
        let mut killed = 0;
        for record in related {
            if self.terminator.kill_by_pid(&record.pid) {
                killed += 1;
            }
        }
        killed
    }

    /// Force mode: terminate every process with the target image name.
    /// Returns the best available kill count.
    pub fn force_sweep(&self) -> usize {
        console::fire(format!(
            "Force mode: terminating all {} processes...",
            self.config.image_name
        ));
        let records = self.lister.list();
        if records.is_empty() {
            console::info(format!("No {} processes found", self.config.image_name));
            return 0;
        }

        match self.terminator.kill_by_image(&self.config.image_name) {
            BulkOutcome::Terminated {
                confirmed: Some(count),
            } => {
                console::fire(format!(
                    "Force mode terminated {count} {} processes",
                    self.config.image_name
                ));
                count
            }
            BulkOutcome::Terminated { confirmed: None } => {
                // taskkill said yes but printed nothing countable
                // (localized build); it signalled every match it saw.
                console::fire(format!(
                    "Force mode terminated all {} enumerated {} processes",
                    records.len(),
                    self.config.image_name
                ));
                records.len()
            }
            BulkOutcome::Failed => 0,
        }
    }

    /// List mode: report what is running without touching anything.
    pub fn list_processes(&self) {
        console::search(format!("Listing {} processes...", self.config.image_name));
        let records = self.lister.list();
        if records.is_empty() {
            console::info(format!("No {} processes found", self.config.image_name));
            return;
        }
        console::note(format!(
            "Found {} {} processes:",
            records.len(),
            self.config.image_name
        ));

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.add_row(Row::new(vec![
            Cell::new("#").style_spec("b"),
            Cell::new("TYPE").style_spec("b"),
            Cell::new("PID").style_spec("b"),
            Cell::new("MEM USAGE").style_spec("b"),
            Cell::new("COMMAND LINE").style_spec("b"),
        ]));

        for (index, record) in records.iter().enumerate() {
            let command_line = self.inspector.command_line(&record.pid);
            let tag = if self.classifier.matches_command_line(&command_line) {
                "🎯 MCP".cyan().to_string()
            } else {
                "🔹 other".to_string()
            };
            table.add_row(Row::new(vec![
                Cell::new(&(index + 1).to_string()),
                Cell::new(&tag),
                Cell::new(&record.pid),
                Cell::new(&record.memory),
                Cell::new(&preview(&command_line, self.config.preview_width)),
            ]));
        }
        table.printstd();
    }

    /// Verification pass: re-enumerate after a kill action and report
    /// what survived. Returns the number still running.
    pub fn verify_remaining(&self) -> usize {
        console::search("Verifying remaining processes...");
        let records = self.lister.list();
        if records.is_empty() {
            console::success(format!(
                "All {} processes terminated",
                self.config.image_name
            ));
            return 0;
        }
        console::warning(format!(
            "{} {} processes still running:",
            records.len(),
            self.config.image_name
        ));
        for record in &records {
            println!("   PID: {} | Mem: {}", record.pid, record.memory);
        }
        records.len()
    }

    /// Give the OS a moment to reap killed processes before verifying.
    pub fn settle(&self) {
        thread::sleep(self.config.settle_delay);
    }
}

fn preview(command_line: &str, width: usize) -> String {
    if command_line.is_empty() {
        return "<unknown>".to_string();
    }
    if command_line.chars().count() <= width {
        command_line.to_string()
    } else {
        let cut: String = command_line.chars().take(width).collect();
        format!("{cut}...")
    }
}
