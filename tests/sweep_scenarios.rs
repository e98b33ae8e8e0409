//! Full-pipeline scenarios driven through a scripted command runner.
//!
//! The runner replays canned `tasklist` / `wmic` / `taskkill` output
//! and records every invocation, so each test can assert both the
//! returned counts and exactly which kills were attempted.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mcp_sweep::{CommandOutput, CommandRunner, SweepConfig, Sweeper};
use pretty_assertions::assert_eq;

/// One recorded external-command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    program: String,
    args: Vec<String>,
}

/// Scripted runner: canned responses per tool, every call recorded.
#[derive(Default)]
struct FakeRunner {
    tasklist_stdout: String,
    command_lines: HashMap<String, String>,
    failing_pids: HashSet<String>,
    bulk_response: Option<CommandOutput>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    fn with_processes(rows: &[(&str, &str)]) -> Self {
        Self {
            tasklist_stdout: tasklist_csv(rows),
            ..Self::default()
        }
    }

    fn command_line(mut self, pid: &str, command_line: &str) -> Self {
        self.command_lines
            .insert(pid.to_string(), command_line.to_string());
        self
    }

    fn failing_pid(mut self, pid: &str) -> Self {
        self.failing_pids.insert(pid.to_string());
        self
    }

    fn bulk_response(mut self, output: CommandOutput) -> Self {
        self.bulk_response = Some(output);
        self
    }

    fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    fn taskkill_calls(&self) -> Vec<Invocation> {
        self.calls()
            .into_iter()
            .filter(|call| call.program == "taskkill")
            .collect()
    }

    fn wmic_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.program == "wmic")
            .count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        match program {
            "tasklist" => Ok(ok_output(&self.tasklist_stdout)),
            "wmic" => {
                let pid = args
                    .iter()
                    .find_map(|a| a.strip_prefix("ProcessId="))
                    .unwrap_or_default();
                match self.command_lines.get(pid) {
                    Some(command_line) => Ok(ok_output(&format!(
                        "\r\n\r\nCommandLine={command_line}\r\n\r\n"
                    ))),
                    None => Ok(ok_output("No Instance(s) Available.\r\n")),
                }
            }
            "taskkill" if args.contains(&"/IM") => {
                Ok(self.bulk_response.clone().unwrap_or_else(|| ok_output("")))
            }
            "taskkill" => {
                let pid = args.last().copied().unwrap_or_default();
                if self.failing_pids.contains(pid) {
                    Ok(CommandOutput {
                        code: Some(128),
                        stdout: String::new(),
                        stderr: format!("ERROR: The process \"{pid}\" not found.\r\n"),
                    })
                } else {
                    Ok(ok_output(&format!(
                        "SUCCESS: The process with PID {pid} has been terminated.\r\n"
                    )))
                }
            }
            other => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("unexpected program {other}"),
            )),
        }
    }
}

fn ok_output(stdout: &str) -> CommandOutput {
    CommandOutput {
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn tasklist_csv(rows: &[(&str, &str)]) -> String {
    let mut out =
        String::from("\"Image Name\",\"PID\",\"Session Name\",\"Session#\",\"Mem Usage\"\r\n");
    for (name, pid) in rows {
        out.push_str(&format!(
            "\"{name}\",\"{pid}\",\"Console\",\"1\",\"45,678 K\"\r\n"
        ));
    }
    out
}

fn sweeper_over(runner: &Arc<FakeRunner>) -> Sweeper {
    let config = SweepConfig {
        settle_delay: Duration::from_millis(0),
        ..SweepConfig::default()
    };
    Sweeper::new(runner.clone(), config)
}

#[test]
fn smart_mode_kills_only_related_processes() {
    let runner = Arc::new(
        FakeRunner::with_processes(&[
            ("node.exe", "1111"),
            ("node.exe", "2222"),
            ("node.exe", "3333"),
        ])
        .command_line("1111", "node C:\\work\\ai-terminal-mcp\\server.js")
        .command_line("2222", "node C:\\sites\\blog\\build.js"),
        // 3333 has no command line: it died between enumeration and
        // inspection, and unknown processes are never targets.
    );
    let sweeper = sweeper_over(&runner);

    assert_eq!(sweeper.smart_sweep(), 1);

    let kills = runner.taskkill_calls();
    assert_eq!(kills.len(), 1);
    assert_eq!(kills[0].args, vec!["/F", "/PID", "1111"]);
}

#[test]
fn smart_mode_spares_a_system_with_only_unrelated_processes() {
    let runner = Arc::new(
        FakeRunner::with_processes(&[("node.exe", "9999")])
            .command_line("9999", "node C:\\sites\\blog\\build.js"),
    );

    assert_eq!(sweeper_over(&runner).smart_sweep(), 0);
    assert!(runner.taskkill_calls().is_empty());
}

#[test]
fn smart_mode_counts_only_successful_kills() {
    let runner = Arc::new(
        FakeRunner::with_processes(&[("node.exe", "1111"), ("node.exe", "2222")])
            .command_line("1111", "node gui-server.js")
            .command_line("2222", "node server.js")
            .failing_pid("1111"),
    );
    let sweeper = sweeper_over(&runner);

    assert_eq!(sweeper.smart_sweep(), 1);
    // The failed kill did not stop the second attempt.
    assert_eq!(runner.taskkill_calls().len(), 2);
}

#[test]
fn empty_enumeration_short_circuits_every_mode() {
    for mode in ["smart", "force", "list"] {
        let runner = Arc::new(FakeRunner::default());
        let sweeper = sweeper_over(&runner);
        match mode {
            "smart" => assert_eq!(sweeper.smart_sweep(), 0),
            "force" => assert_eq!(sweeper.force_sweep(), 0),
            _ => sweeper.list_processes(),
        }
        assert_eq!(runner.wmic_calls(), 0, "{mode} mode must not classify");
        assert!(
            runner.taskkill_calls().is_empty(),
            "{mode} mode must not kill"
        );
    }
}

#[test]
fn force_mode_reports_the_confirmed_count() {
    let stdout = "SUCCESS: The process \"node.exe\" with PID 1111 has been terminated.\r\n\
SUCCESS: The process \"node.exe\" with PID 2222 has been terminated.\r\n";
    let runner = Arc::new(
        FakeRunner::with_processes(&[("node.exe", "1111"), ("node.exe", "2222")]).bulk_response(
            CommandOutput {
                code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        ),
    );
    let sweeper = sweeper_over(&runner);

    assert_eq!(sweeper.force_sweep(), 2);

    let kills = runner.taskkill_calls();
    assert_eq!(kills.len(), 1);
    assert_eq!(kills[0].args, vec!["/F", "/IM", "node.exe"]);
}

#[test]
fn force_mode_falls_back_to_the_enumerated_count() {
    // Localized taskkill prose carries no countable markers.
    let runner = Arc::new(
        FakeRunner::with_processes(&[("node.exe", "1111"), ("node.exe", "2222")]).bulk_response(
            CommandOutput {
                code: Some(0),
                stdout: "成功: 已终止进程。\r\n".to_string(),
                stderr: String::new(),
            },
        ),
    );

    assert_eq!(sweeper_over(&runner).force_sweep(), 2);
}

#[test]
fn force_mode_returns_zero_when_bulk_kill_fails() {
    let runner = Arc::new(
        FakeRunner::with_processes(&[("node.exe", "1111")]).bulk_response(CommandOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "ERROR: Access is denied.\r\n".to_string(),
        }),
    );

    assert_eq!(sweeper_over(&runner).force_sweep(), 0);
}

#[test]
fn list_mode_inspects_without_killing_and_is_idempotent() {
    let runner = Arc::new(
        FakeRunner::with_processes(&[("node.exe", "1111"), ("node.exe", "2222")])
            .command_line("1111", "node ai-terminal-mcp\\gui-server.js")
            .command_line("2222", "node C:\\sites\\blog\\build.js"),
    );
    let sweeper = sweeper_over(&runner);

    sweeper.list_processes();
    let first_pass = runner.calls();
    assert!(runner.taskkill_calls().is_empty());
    // One tasklist call plus one wmic call per row.
    assert_eq!(first_pass.len(), 3);

    sweeper.list_processes();
    let all = runner.calls();
    assert_eq!(all.len(), 6);
    assert_eq!(&all[..3], &all[3..], "second pass must replay the first");
}

#[test]
fn verification_reports_survivors() {
    let runner = Arc::new(FakeRunner::with_processes(&[("node.exe", "4444")]));
    assert_eq!(sweeper_over(&runner).verify_remaining(), 1);

    let empty = Arc::new(FakeRunner::default());
    assert_eq!(sweeper_over(&empty).verify_remaining(), 0);
}
