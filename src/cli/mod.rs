// src/cli/mod.rs

//! Turns the declarative command tree into a `clap::Command`.
//!
//! clap owns parsing, help rendering, arity checks and usage errors; the tree
//! in `models` stays the single description of what exists.

use crate::constants::BIN_NAME;
use crate::models::CommandNode;
use clap::builder::styling::AnsiColor;
use clap::builder::{PossibleValuesParser, Styles};
use clap::{Arg, ArgAction, Args, Command};
use std::path::PathBuf;

pub mod dispatcher;
pub mod handlers;
pub mod tree;

/// Flags accepted at every level of the tree.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Config file to load (contents are echoed under --verbose)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print every external command before running it
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Same palette as the rest of the tool's output.
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Yellow.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Green.on_default())
}

/// Builds the root `clap::Command` for the whole tree.
pub fn build_command(root: &CommandNode) -> Command {
    let cmd = node_command(root)
        .name(BIN_NAME)
        .bin_name(BIN_NAME)
        .styles(styles());
    GlobalArgs::augment_args(cmd)
}

fn node_command(node: &CommandNode) -> Command {
    let mut cmd = Command::new(node.name)
        .about(node.about)
        .disable_help_subcommand(true);
    if let Some(long) = node.long_about {
        cmd = cmd.long_about(long);
    }

    for spec in &node.args {
        let mut arg = Arg::new(spec.name)
            .help(spec.help)
            .required(true)
            .action(ArgAction::Set);
        if !spec.choices.is_empty() {
            arg = arg.value_parser(PossibleValuesParser::new(spec.choices.iter().copied()));
        }
        cmd = cmd.arg(arg);
    }

    node.children
        .iter()
        .fold(cmd, |cmd, child| cmd.subcommand(node_command(child)))
}
