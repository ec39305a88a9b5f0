// src/core/recipe_executor.rs

//! Runs recipes step by step.

use crate::constants::{EXIT_FAILURE, EXIT_OK};
use crate::core::session::Session;
use crate::core::template::{self, Bindings, TemplateError};
use crate::models::{Failure, Recipe, Step};
use crate::system::executor::{ExecutionError, Invocation};
use colored::*;
use std::fmt::Display;
use std::path::Path;

/// How a recipe ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran; individual best-effort failures were reported in place.
    Completed,
    /// A `Choose` step got an answer it has no arm for.
    Stopped,
    /// A critical step failed.
    Failed,
}

impl Outcome {
    /// Process status for this outcome: 1 for `Failed`, otherwise 0.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Completed | Self::Stopped => EXIT_OK,
            Self::Failed => EXIT_FAILURE,
        }
    }
}

/// Runs the steps of a recipe in declaration order.
///
/// `bindings` arrives holding the positional arguments; prompt answers are
/// added to it as the recipe goes.
pub fn execute_recipe(recipe: &Recipe, bindings: &mut Bindings, session: &mut Session<'_>) -> Outcome {
    execute_steps(&recipe.steps, bindings, session)
}

fn execute_steps(steps: &[Step], bindings: &mut Bindings, session: &mut Session<'_>) -> Outcome {
    for step in steps {
        let outcome = execute_step(step, bindings, session);
        if outcome != Outcome::Completed {
            return outcome;
        }
    }
    Outcome::Completed
}

fn execute_step(step: &Step, bindings: &mut Bindings, session: &mut Session<'_>) -> Outcome {
    match step {
        Step::Notice(text) => {
            session.console.say(template::render(text, bindings));
            Outcome::Completed
        }

        Step::Exec {
            command,
            on_failure,
        } => {
            let result = template::split_command(command, bindings)
                .map_err(StepError::from)
                .and_then(|argv| Invocation::from_argv(argv).map_err(StepError::from))
                .and_then(|inv| session.exec(&inv).map_err(StepError::from));
            match (result, on_failure) {
                (Ok(()), _) => Outcome::Completed,
                (Err(StepError::Interrupted(e)), _) => interrupted(session, e),
                (Err(StepError::Other(e)), Failure::Report) => {
                    report_error(session, &e);
                    Outcome::Completed
                }
                (Err(StepError::Other(e)), Failure::Abort(message)) => {
                    log::debug!("Critical step '{}' failed, aborting recipe", command);
                    session
                        .console
                        .say(format!("{}: {}", message, e).red().bold());
                    Outcome::Failed
                }
            }
        }

        Step::Shell { script } => {
            let result = template::render_shell(script, bindings)
                .map_err(StepError::from)
                .and_then(|s| session.exec(&Invocation::shell(s)).map_err(StepError::from));
            match result {
                Ok(()) => Outcome::Completed,
                Err(StepError::Interrupted(e)) => interrupted(session, e),
                Err(StepError::Other(e)) => {
                    report_error(session, &e);
                    Outcome::Completed
                }
            }
        }

        Step::Prompt {
            key,
            message,
            default,
        } => {
            let answer = session.console.read_line(&template::render(message, bindings));
            let value = match default {
                Some(fallback) if answer.is_empty() => (*fallback).to_string(),
                _ => answer,
            };
            log::debug!("Bound '{}' = {:?}", key, value);
            bindings.insert(*key, value);
            Outcome::Completed
        }

        Step::WriteFile {
            path,
            contents,
            mode,
        } => {
            let path = template::render(path, bindings);
            let body = template::render(contents, bindings);
            if let Err(e) = session.write_file(Path::new(&path), body.as_bytes(), *mode) {
                report_error(session, format!("{} {}: {}", t!("recipe.write_failed"), path, e));
            }
            Outcome::Completed
        }

        Step::Choose { key, arms } => {
            let answer = bindings.get(key).unwrap_or_default().to_string();
            match arms.iter().find(|(value, _)| *value == answer) {
                Some((_, steps)) => execute_steps(steps, bindings, session),
                None => {
                    log::debug!("No arm of '{}' matches {:?}", key, answer);
                    session.console.say(t!("common.invalid_option"));
                    Outcome::Stopped
                }
            }
        }
    }
}

/// Why a command step did not succeed.
enum StepError {
    /// The user interrupted the child. Nothing after it may run.
    Interrupted(String),
    Other(String),
}

impl From<ExecutionError> for StepError {
    fn from(e: ExecutionError) -> Self {
        match e {
            ExecutionError::Interrupted(_) => Self::Interrupted(e.to_string()),
            _ => Self::Other(e.to_string()),
        }
    }
}

impl From<TemplateError> for StepError {
    fn from(e: TemplateError) -> Self {
        Self::Other(e.to_string())
    }
}

/// An interrupted child ends the whole action, critical or not.
fn interrupted(session: &mut Session<'_>, message: String) -> Outcome {
    log::debug!("{}", message);
    report_error(session, &message);
    Outcome::Failed
}

/// `Error: <message>` on stdout; the recipe carries on.
fn report_error(session: &mut Session<'_>, message: impl Display) {
    session
        .console
        .say(format!("{} {}", t!("common.error_prefix"), message).red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::Console;
    use crate::system::executor::CommandRunner;
    use std::cell::RefCell;
    use std::io::{self, Cursor};

    #[derive(Default)]
    struct FakeRunner {
        calls: RefCell<Vec<String>>,
        failing: Vec<&'static str>,
        interrupting: Vec<&'static str>,
        unwritable: Vec<&'static str>,
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, inv: &Invocation) -> Result<(), ExecutionError> {
            self.calls.borrow_mut().push(inv.to_string());
            if self.interrupting.contains(&inv.program.as_str()) {
                return Err(ExecutionError::Interrupted(inv.to_string()));
            }
            if self.failing.contains(&inv.program.as_str()) {
                return Err(ExecutionError::NonZeroExitStatus {
                    command: inv.to_string(),
                    status: "exit status: 32".into(),
                });
            }
            Ok(())
        }

        fn write_file(&self, path: &Path, _: &[u8], _: u32) -> io::Result<()> {
            self.calls.borrow_mut().push(format!("write {}", path.display()));
            if self.unwritable.iter().any(|p| Path::new(p) == path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"));
            }
            Ok(())
        }
    }

    fn run(steps: Vec<Step>, input: &str, runner: &FakeRunner) -> (Outcome, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = {
            let console = Console::new(&mut input, &mut out, &mut err);
            let mut session = Session::new(console, runner);
            execute_recipe(&Recipe { steps }, &mut Bindings::new(), &mut session)
        };
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_best_effort_failure_continues() {
        let runner = FakeRunner {
            failing: vec!["dkms"],
            ..Default::default()
        };
        let (outcome, out) = run(
            vec![Step::exec("dkms status"), Step::exec("mkinitcpio -P")],
            "",
            &runner,
        );
        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("Error: Command 'dkms status' failed"));
        assert_eq!(*runner.calls.borrow(), vec!["dkms status", "mkinitcpio -P"]);
    }

    #[test]
    fn test_critical_failure_stops_recipe() {
        let runner = FakeRunner {
            failing: vec!["mount"],
            ..Default::default()
        };
        let (outcome, out) = run(
            vec![
                Step::critical("mount /dev/x /mnt", "Failed to mount"),
                Step::notice("done"),
            ],
            "",
            &runner,
        );
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(outcome.exit_code(), 1);
        assert!(out.starts_with("Failed to mount: "));
        assert!(!out.contains("done"));
    }

    #[test]
    fn test_interrupted_step_ends_recipe() {
        let runner = FakeRunner {
            interrupting: vec!["pacman", "sh"],
            ..Default::default()
        };
        let (outcome, out) = run(
            vec![Step::exec("pacman -S nvidia-dkms"), Step::exec("dkms autoinstall")],
            "",
            &runner,
        );
        assert_eq!(outcome, Outcome::Failed);
        assert!(out.contains("Error: Command 'pacman -S nvidia-dkms' was interrupted."));
        assert_eq!(*runner.calls.borrow(), vec!["pacman -S nvidia-dkms"]);

        runner.calls.borrow_mut().clear();
        let (outcome, _) = run(
            vec![Step::shell("dmesg | grep -i nvidia"), Step::exec("mkinitcpio -P")],
            "",
            &runner,
        );
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_failed_write_is_reported_and_skipped() {
        let runner = FakeRunner {
            unwritable: vec!["/etc/a.conf"],
            ..Default::default()
        };
        let (outcome, out) = run(
            vec![Step::write("/etc/a.conf", "x\n", 0o644), Step::exec("systemctl daemon-reload")],
            "",
            &runner,
        );
        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("Error: Could not write /etc/a.conf: Permission denied"));
        assert_eq!(
            *runner.calls.borrow(),
            vec!["write /etc/a.conf", "systemctl daemon-reload"]
        );
    }

    #[test]
    fn test_prompt_default_and_substitution() {
        let runner = FakeRunner::default();
        let (_, out) = run(
            vec![
                Step::prompt_or("src", "Source: ", "/home"),
                Step::prompt("dst", "Dest: "),
                Step::exec("restic backup {src} --repo {dst}"),
                Step::write("/tmp/{dst}.conf", "{src}\n", 0o644),
            ],
            "\n/mnt/backup drive\n",
            &runner,
        );
        assert_eq!(out, "Source: Dest: ");
        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "restic backup /home --repo /mnt/backup drive",
                "write /tmp//mnt/backup drive.conf"
            ]
        );
    }

    #[test]
    fn test_choose_unmatched_stops_quietly() {
        let runner = FakeRunner::default();
        let (outcome, out) = run(
            vec![
                Step::prompt("pick", "Pick: "),
                Step::choose("pick", vec![("1", vec![Step::exec("a")])]),
                Step::exec("after"),
            ],
            "9\n",
            &runner,
        );
        assert_eq!(outcome, Outcome::Stopped);
        assert_eq!(outcome.exit_code(), 0);
        assert!(out.contains("Invalid option."));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_verbose_announces_each_invocation_once() {
        colored::control::set_override(false);
        let runner = FakeRunner::default();
        let mut input = Cursor::new(Vec::new());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        {
            let console = Console::new(&mut input, &mut out, &mut err);
            let mut session = Session::new(console, &runner);
            session.verbose = true;
            let recipe = Recipe {
                steps: vec![Step::exec("sudo pacman -Syu --noconfirm")],
            };
            execute_recipe(&recipe, &mut Bindings::new(), &mut session);
        }
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "Running: sudo pacman -Syu --noconfirm\n");
    }
}
