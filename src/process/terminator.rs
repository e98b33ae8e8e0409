//! Process termination via `taskkill`

use std::sync::Arc;

use crate::console;
use crate::runner::CommandRunner;

const TASKKILL: &str = "taskkill";

/// Result of a bulk image-name kill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// taskkill exited zero. `confirmed` counts the per-process success
    /// markers found in stdout; `None` when the output carried none
    /// (localized installations print different prose).
    Terminated { confirmed: Option<usize> },
    /// taskkill could not be run or reported failure.
    Failed,
}

pub struct Terminator {
    runner: Arc<dyn CommandRunner>,
}

impl Terminator {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Force-kill one PID. Reports the outcome on the console and
    /// returns whether it worked; failures never stop the caller.
    pub fn kill_by_pid(&self, pid: &str) -> bool {
        match self.runner.run(TASKKILL, &["/F", "/PID", pid]) {
            Ok(output) if output.success() => {
                console::success(format!("Terminated process PID {pid}"));
                true
            }
            Ok(output) => {
                console::error(format!(
                    "Failed to terminate PID {pid}: {}",
                    output.stderr.trim()
                ));
                false
            }
            Err(err) => {
                console::error(format!("Failed to terminate PID {pid}: {err}"));
                false
            }
        }
    }

    /// Force-kill every process with the given image name.
    pub fn kill_by_image(&self, image: &str) -> BulkOutcome {
        match self.runner.run(TASKKILL, &["/F", "/IM", image]) {
            Ok(output) if output.success() => BulkOutcome::Terminated {
                confirmed: count_success_markers(&output.stdout, image),
            },
            Ok(output) => {
                console::error(format!("Bulk termination failed: {}", output.stderr.trim()));
                BulkOutcome::Failed
            }
            Err(err) => {
                console::error(format!("Bulk termination failed: {err}"));
                BulkOutcome::Failed
            }
        }
    }
}

/// Best-effort count of per-process success lines in taskkill output.
///
/// English builds print one `SUCCESS: The process "node.exe" with PID
/// ... has been terminated.` line per kill. Localized builds print
/// something else entirely; the caller then falls back to the
/// enumeration it did beforehand.
fn count_success_markers(stdout: &str, image: &str) -> Option<usize> {
    let image = image.to_lowercase();
    let count = stdout
        .lines()
        .filter(|line| {
            let line = line.to_lowercase();
            line.contains("success") && line.contains(&image)
        })
        .count();
    (count > 0).then_some(count)
}
