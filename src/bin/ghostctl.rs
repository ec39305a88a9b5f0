// src/bin/ghostctl.rs

//! The `ghostctl` executable.

use ghostctl::{
    cli::{dispatcher, tree::CommandTree},
    core::{prompt::Console, session::Session},
    system::{executor::SystemRunner, interrupt},
};
use std::io;

/// Entry point: logging, Ctrl+C handling, then one dispatch over real stdio.
/// The exit code is whatever the dispatched command reports.
fn main() {
    env_logger::init();

    if let Err(e) = interrupt::install() {
        // Without the handler Ctrl+C still works, it just also ends the menu.
        log::warn!("Could not install the interrupt handler: {}", e);
    }

    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let tree = CommandTree::build();
    let runner = SystemRunner::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let code = {
        let console = Console::new(&mut input, &mut out, &mut err);
        let mut session = Session::new(console, &runner);
        let code = dispatcher::run(&tree, &argv, &mut session);
        session.console.flush();
        code
    };

    log::debug!("Exiting with status {}", code);
    std::process::exit(code);
}
