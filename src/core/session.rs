// src/core/session.rs

//! Per-run state shared by recipes and menus.

use crate::core::prompt::Console;
use crate::system::executor::{CommandRunner, ExecutionError, Invocation};
use std::io;
use std::path::Path;

/// Everything one invocation needs beyond the tree: the terminal, the runner
/// that performs external effects, and the global flag values.
///
/// Menus pass the same session down into the commands they dispatch, so the
/// flags and the terminal carry over to nested invocations.
pub struct Session<'a> {
    /// Terminal handles.
    pub console: Console<'a>,
    runner: &'a dyn CommandRunner,
    /// `-v/--verbose`: announce each external command.
    pub verbose: bool,
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("console", &self.console)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl<'a> Session<'a> {
    /// A quiet session over `console` and `runner`.
    pub fn new(console: Console<'a>, runner: &'a dyn CommandRunner) -> Self {
        Self {
            console,
            runner,
            verbose: false,
        }
    }

    /// Runs one external program. Under verbose mode the command line is
    /// announced first, exactly once.
    pub fn exec(&mut self, invocation: &Invocation) -> Result<(), ExecutionError> {
        if self.verbose {
            self.console
                .say(format!("{} {}", t!("session.running"), invocation));
        }
        // Child output shares the terminal; anything we buffered goes first.
        self.console.flush();
        log::debug!("Executing: {:?}", invocation);
        self.runner.run(invocation)
    }

    /// Writes a file through the runner.
    pub fn write_file(&mut self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        log::debug!("Writing {} bytes to {}", contents.len(), path.display());
        self.runner.write_file(path, contents, mode)
    }
}
