// src/cli/handlers/builtins.rs

//! `version` and `completion`.

use crate::models::{ArgSpec, Builtin, CommandNode};

/// Shells `completion` can generate a script for.
pub const COMPLETION_SHELLS: &[&str] = &["bash", "zsh"];

/// `ghostctl version`.
pub fn version() -> CommandNode {
    CommandNode::new("version", t!("builtin.version.about")).builtin(Builtin::Version)
}

/// `ghostctl completion <bash|zsh>`.
pub fn completion() -> CommandNode {
    CommandNode::new("completion", t!("builtin.completion.about"))
        .long_about(t!("builtin.completion.long_about"))
        .arg(ArgSpec::one_of(
            "shell",
            t!("builtin.completion.arg.shell"),
            COMPLETION_SHELLS,
        ))
        .builtin(Builtin::Completion)
}
