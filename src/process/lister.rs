//! Process enumeration via `tasklist`

use std::sync::Arc;

use crate::console;
use crate::error::{errors, SweepResult};
use crate::process::ProcessRecord;
use crate::runner::CommandRunner;

const TASKLIST: &str = "tasklist";

/// Lists processes whose image name matches the configured target.
pub struct ProcessLister {
    runner: Arc<dyn CommandRunner>,
    image_name: String,
}

impl ProcessLister {
    pub fn new(runner: Arc<dyn CommandRunner>, image_name: impl Into<String>) -> Self {
        Self {
            runner,
            image_name: image_name.into(),
        }
    }

    /// Enumerate matching processes, absorbing any failure to an empty
    /// list. The error is reported on the console; callers treat the
    /// result exactly like "nothing is running".
    pub fn list(&self) -> Vec<ProcessRecord> {
        match self.try_list() {
            Ok(records) => records,
            Err(err) => {
                console::error(format!("Failed to list processes: {err}"));
                Vec::new()
            }
        }
    }

    /// Fallible enumeration.
    pub fn try_list(&self) -> SweepResult<Vec<ProcessRecord>> {
        let filter = format!("IMAGENAME eq {}", self.image_name);
        let output = self
            .runner
            .run(TASKLIST, &["/FI", &filter, "/FO", "CSV"])
            .map_err(|e| errors::spawn_error(TASKLIST, e))?;
        if !output.success() {
            return Err(errors::command_failed(TASKLIST, output.code, &output.stderr));
        }
        Ok(parse_tasklist_csv(&output.stdout))
    }
}

/// Parses `tasklist /FO CSV` output into records.
///
/// The first line is the column header and is always skipped. Rows are
/// split on the quoted delimiter so the thousands separator inside the
/// memory column survives, then the surrounding quotes are stripped.
/// Anything that does not yield at least an image name and a PID (blank
/// lines, localized "no tasks" notices) is dropped silently.
pub fn parse_tasklist_csv(output: &str) -> Vec<ProcessRecord> {
    output
        .trim()
        .lines()
        .skip(1)
        .filter_map(parse_tasklist_line)
        .collect()
}

fn parse_tasklist_line(line: &str) -> Option<ProcessRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split("\",\"").map(|f| f.trim_matches('"')).collect();
    if fields.len() < 2 {
        return None;
    }
    Some(ProcessRecord {
        name: fields[0].to_string(),
        pid: fields[1].to_string(),
        session: fields.get(2).map(|s| s.to_string()).unwrap_or_default(),
        memory: fields.get(4).map(|s| s.to_string()).unwrap_or_default(),
    })
}
