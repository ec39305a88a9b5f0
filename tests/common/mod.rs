// tests/common/mod.rs
#![allow(dead_code)]

use ghostctl::cli::dispatcher;
use ghostctl::cli::tree::CommandTree;
use ghostctl::core::prompt::Console;
use ghostctl::core::session::Session;
use ghostctl::system::executor::{CommandRunner, ExecutionError, Invocation};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// A written file as the runner saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub contents: String,
    pub mode: u32,
}

/// Records every invocation and keeps written files in memory. Invocations
/// whose command line starts with one of `failing` report a non-zero exit,
/// ones starting with one of `interrupting` report a Ctrl+C, and writes to an
/// `unwritable` path are refused.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    history: RefCell<Vec<Invocation>>,
    files: RefCell<BTreeMap<PathBuf, WrittenFile>>,
    failing: Vec<String>,
    interrupting: Vec<String>,
    unwritable: Vec<PathBuf>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(prefixes: &[&str]) -> Self {
        Self {
            failing: prefixes.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn interrupting(mut self, prefixes: &[&str]) -> Self {
        self.interrupting = prefixes.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn unwritable(mut self, paths: &[&str]) -> Self {
        self.unwritable = paths.iter().map(PathBuf::from).collect();
        self
    }

    /// Recorded command lines, program and args joined by spaces.
    pub fn commands(&self) -> Vec<String> {
        self.history.borrow().iter().map(|i| i.to_string()).collect()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.history.borrow().clone()
    }

    pub fn file(&self, path: &str) -> Option<WrittenFile> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError> {
        self.history.borrow_mut().push(invocation.clone());
        let line = invocation.to_string();
        if self.interrupting.iter().any(|p| line.starts_with(p.as_str())) {
            return Err(ExecutionError::Interrupted(line));
        }
        if self.failing.iter().any(|p| line.starts_with(p.as_str())) {
            return Err(ExecutionError::NonZeroExitStatus {
                command: line,
                status: "exit status: 32".to_string(),
            });
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        if self.unwritable.iter().any(|p| p == path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"));
        }
        self.files.borrow_mut().insert(
            path.to_path_buf(),
            WrittenFile {
                contents: String::from_utf8_lossy(contents).into_owned(),
                mode,
            },
        );
        Ok(())
    }
}

/// What one run of the tool produced.
#[derive(Debug)]
pub struct Run {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `ghostctl <argv>` against the recording runner with scripted stdin.
pub fn ghostctl(runner: &RecordingRunner, argv: &[&str], stdin: &str) -> Run {
    colored::control::set_override(false);
    let tree = CommandTree::build();
    let argv: Vec<String> = argv.iter().map(|a| a.to_string()).collect();

    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = {
        let console = Console::new(&mut input, &mut out, &mut err);
        let mut session = Session::new(console, runner);
        dispatcher::run(&tree, &argv, &mut session)
    };

    Run {
        code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}
