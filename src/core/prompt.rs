// src/core/prompt.rs

//! Line-oriented user input and output.

use std::io::{BufRead, Write};

/// Outcome of reading a numbered menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A decimal integer, possibly negative or out of range.
    Number(i64),
    /// The trimmed text did not parse as a decimal integer.
    Invalid(String),
    /// Standard input is exhausted.
    Closed,
}

/// The terminal handles of one invocation.
///
/// Borrowed rather than owned so the binary can hand in locked stdio while
/// tests hand in byte buffers.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    closed: bool,
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl<'a> Console<'a> {
    /// Wraps the given handles. The console starts open.
    pub fn new(
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            input,
            out,
            err,
            closed: false,
        }
    }

    /// Writes the prompt with no newline and reads one line, trimmed.
    ///
    /// End of input (or an unreadable stdin) yields the empty string and marks
    /// the console closed.
    pub fn read_line(&mut self, prompt: &str) -> String {
        self.print(prompt);
        self.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                String::new()
            }
            Ok(_) => line.trim().to_string(),
            Err(e) => {
                log::warn!("Could not read from standard input: {}", e);
                self.closed = true;
                String::new()
            }
        }
    }

    /// Like `read_line`, then parses the answer as a decimal integer.
    pub fn read_choice(&mut self, prompt: &str) -> Choice {
        let answer = self.read_line(prompt);
        if self.closed {
            return Choice::Closed;
        }
        match answer.parse::<i64>() {
            Ok(n) => Choice::Number(n),
            Err(_) => Choice::Invalid(answer),
        }
    }

    /// Whether a previous read hit end of input.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Prints a line to stdout.
    pub fn say(&mut self, line: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Could not write to standard output: {}", e);
        }
    }

    /// Prints without a trailing newline.
    pub fn print(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = write!(self.out, "{}", text) {
            log::warn!("Could not write to standard output: {}", e);
        }
    }

    /// Prints a line to stderr.
    pub fn complain(&mut self, line: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.err, "{}", line) {
            log::warn!("Could not write to standard error: {}", e);
        }
    }

    /// Flushes both output streams, ignoring errors.
    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }

    /// Raw stdout, for generators that write into an `io::Write`.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Raw stderr.
    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }
}
