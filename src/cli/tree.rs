// src/cli/tree.rs

//! The one tree every dispatch walks.

use crate::cli::{build_command, handlers};
use crate::models::CommandNode;
use clap::Command;

/// The command tree plus its clap rendering, built once per process and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct CommandTree {
    /// Unnamed root; its children are the top-level commands.
    pub root: CommandNode,
    /// clap rendering of `root`.
    pub cli: Command,
}

impl CommandTree {
    /// The full `ghostctl` tree.
    pub fn build() -> Self {
        Self::from_root(handlers::root())
    }

    /// Any tree, rendered for clap.
    pub fn from_root(root: CommandNode) -> Self {
        let cli = build_command(&root);
        Self { root, cli }
    }

    /// Every node below the root with its path, depth first, in declaration order.
    pub fn walk(&self) -> Vec<(Vec<&'static str>, &CommandNode)> {
        let mut out = Vec::new();
        collect(&self.root, &mut Vec::new(), &mut out);
        out
    }
}

fn collect<'t>(
    node: &'t CommandNode,
    path: &mut Vec<&'static str>,
    out: &mut Vec<(Vec<&'static str>, &'t CommandNode)>,
) {
    for child in &node.children {
        path.push(child.name);
        out.push((path.clone(), child));
        collect(child, path, out);
        path.pop();
    }
}
