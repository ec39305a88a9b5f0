// src/cli/dispatcher.rs

//! From argv to an executed action.

use crate::cli::GlobalArgs;
use crate::cli::tree::CommandTree;
use crate::constants::{BIN_NAME, EXIT_OK, EXIT_USAGE};
use crate::core::config_loader;
use crate::core::menu_engine;
use crate::core::recipe_executor;
use crate::core::session::Session;
use crate::core::template::Bindings;
use crate::models::{Action, Builtin, CommandNode};
use clap::{ArgMatches, FromArgMatches};
use clap_complete::Shell;

/// Process entry: parses `argv` (without the program name), applies the global
/// flags, echoes the config file if one was given, and runs the command.
pub fn run(tree: &CommandTree, argv: &[String], session: &mut Session<'_>) -> i32 {
    log::debug!("Dispatching args: {:?}", argv);
    let resolved = match resolve(tree, argv, session) {
        Ok(resolved) => resolved,
        Err(code) => return code,
    };

    session.verbose = resolved.globals.verbose;
    if let Some(path) = &resolved.globals.config {
        config_loader::load_and_echo(path, session.verbose, &mut session.console);
    }
    execute(tree, &resolved, session)
}

/// Re-entrant dispatch used by menus. The config file is not echoed again and
/// an inner `-v` can only turn verbose mode on.
pub fn dispatch(tree: &CommandTree, argv: &[String], session: &mut Session<'_>) -> i32 {
    log::debug!("Dispatching args: {:?}", argv);
    let resolved = match resolve(tree, argv, session) {
        Ok(resolved) => resolved,
        Err(code) => return code,
    };

    session.verbose |= resolved.globals.verbose;
    execute(tree, &resolved, session)
}

/// A parsed argv: the node it lands on and the values bound for it.
struct Resolved<'t> {
    node: &'t CommandNode,
    path: Vec<String>,
    bindings: Bindings,
    globals: GlobalArgs,
}

fn resolve<'t>(
    tree: &'t CommandTree,
    argv: &[String],
    session: &mut Session<'_>,
) -> Result<Resolved<'t>, i32> {
    let matches = parse(tree, argv).map_err(|e| report_clap(e, session))?;

    let mut node = &tree.root;
    let mut current: &ArgMatches = &matches;
    let mut path = Vec::new();
    while let Some((name, sub)) = current.subcommand() {
        node = node.find_child(name).ok_or_else(|| {
            log::error!("clap matched '{}' which is not in the tree", name);
            EXIT_USAGE
        })?;
        path.push(name.to_string());
        current = sub;
    }

    let globals = GlobalArgs::from_arg_matches(current).map_err(|e| report_clap(e, session))?;

    let mut bindings = Bindings::new();
    for spec in &node.args {
        if let Some(value) = current.get_one::<String>(spec.name) {
            bindings.insert(spec.name, value.as_str());
        }
    }

    Ok(Resolved {
        node,
        path,
        bindings,
        globals,
    })
}

fn parse(tree: &CommandTree, argv: &[String]) -> Result<ArgMatches, clap::Error> {
    tree.cli
        .clone()
        .try_get_matches_from(std::iter::once(BIN_NAME.to_string()).chain(argv.iter().cloned()))
}

fn execute(tree: &CommandTree, resolved: &Resolved<'_>, session: &mut Session<'_>) -> i32 {
    let Some(action) = &resolved.node.action else {
        // Groups without an action of their own explain themselves.
        return print_help(tree, &resolved.path, session);
    };

    match action {
        Action::Recipe(recipe) => {
            let mut bindings = resolved.bindings.clone();
            recipe_executor::execute_recipe(recipe, &mut bindings, session).exit_code()
        }
        Action::Menu(menu) => menu_engine::run_menu(menu, session, &mut |argv, inner| {
            dispatch(tree, argv, inner)
        }),
        Action::Builtin(Builtin::Version) => {
            session.console.say(format!(
                t!("builtin.version.line"),
                version = env!("CARGO_PKG_VERSION")
            ));
            EXIT_OK
        }
        Action::Builtin(Builtin::Completion) => {
            let shell = match resolved.bindings.get("shell") {
                Some("bash") => Shell::Bash,
                Some("zsh") => Shell::Zsh,
                other => {
                    log::error!("completion reached with shell {:?}", other);
                    return EXIT_USAGE;
                }
            };
            let mut cli = tree.cli.clone();
            clap_complete::generate(shell, &mut cli, BIN_NAME, session.console.out());
            session.console.flush();
            EXIT_OK
        }
    }
}

fn print_help(tree: &CommandTree, path: &[String], session: &mut Session<'_>) -> i32 {
    let mut argv = path.to_vec();
    argv.push("--help".to_string());
    match parse(tree, &argv) {
        Err(help) => report_clap(help, session),
        Ok(_) => EXIT_OK,
    }
}

/// Writes a clap outcome to the stream clap intends (help to stdout, usage
/// errors to stderr) and returns clap's exit code.
fn report_clap(err: clap::Error, session: &mut Session<'_>) -> i32 {
    let rendered = err.render();
    let text = if colored::control::SHOULD_COLORIZE.should_colorize() {
        rendered.ansi().to_string()
    } else {
        rendered.to_string()
    };
    if err.use_stderr() {
        session.console.complain(text.trim_end());
    } else {
        session.console.say(text.trim_end());
    }
    err.exit_code()
}
