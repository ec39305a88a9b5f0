// src/system/executor.rs

//! Process spawning and file writes.

use crate::system::interrupt;
use scopeguard::defer;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

/// Why an external step did not succeed.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The rendered command line had no program.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The program could not be spawned or waited on.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The program ran and reported failure.
    #[error("Command '{command}' failed ({status}).")]
    NonZeroExitStatus {
        /// Command line as displayed.
        command: String,
        /// The exit status, or the signal that ended the program.
        status: String,
    },
    /// Ctrl+C arrived while the program ran.
    #[error("Command '{0}' was interrupted.")]
    Interrupted(String),
}

/// A program plus its argument vector. Nothing in here is ever interpreted by
/// a shell; a literal `|` is just another argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Looked up on `PATH`.
    pub program: String,
    /// Passed verbatim.
    pub args: Vec<String>,
}

impl Invocation {
    /// `program` with `args`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `sh -c "<script>"`.
    pub fn shell(script: impl Into<String>) -> Self {
        Self::new(crate::constants::SHELL_PROGRAM, ["-c".to_string(), script.into()])
    }

    /// Builds an invocation from an already split argv (program first).
    pub fn from_argv(mut argv: Vec<String>) -> Result<Self, ExecutionError> {
        if argv.is_empty() {
            return Err(ExecutionError::EmptyCommand);
        }
        let program = argv.remove(0);
        Ok(Self {
            program,
            args: argv,
        })
    }
}

impl fmt::Display for Invocation {
    /// `<program> <args joined by a single space>`, as printed by verbose mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.join(" "))
        }
    }
}

/// The seam between recipes and the operating system.
///
/// Every external effect of an action goes through one of these two calls, so
/// a recording implementation can stand in for the real system in tests.
pub trait CommandRunner {
    /// Runs the program to completion with stdin, stdout and stderr inherited.
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError>;

    /// Open-truncate-write-close. `mode` applies when the file is created.
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;
}

/// Runs real processes and writes real files.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// The real system.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError> {
        execute_command(invocation)
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(mode)
            .open(path)?;
        file.write_all(contents)?;
        file.flush()
    }
}

/// Spawns the program found on `PATH` and blocks until it exits.
///
/// The child shares the terminal's process group, so a Ctrl+C reaches it
/// directly; the interrupt is only recorded here and surfaces as
/// `ExecutionError::Interrupted` once the child is gone.
pub fn execute_command(invocation: &Invocation) -> Result<(), ExecutionError> {
    let command_line = invocation.to_string();
    if invocation.program.trim().is_empty() {
        return Err(ExecutionError::EmptyCommand);
    }

    let mut child = StdCommand::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

    log::debug!("Spawned '{}' (PID: {})", command_line, child.id());

    let status = {
        interrupt::enter_foreground();
        defer! {
            interrupt::leave_foreground();
        }
        child.wait()
    }
    .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

    if interrupt::take_interrupted() {
        return Err(ExecutionError::Interrupted(command_line));
    }

    if !status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: command_line,
            status: status.to_string(),
        });
    }
    Ok(())
}
