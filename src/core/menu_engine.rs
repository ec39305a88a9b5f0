// src/core/menu_engine.rs

//! Numbered interactive menus.

use crate::constants::EXIT_OK;
use crate::core::prompt::Choice;
use crate::core::session::Session;
use crate::core::template::{self, Bindings};
use crate::models::{Menu, MenuExit, MenuOption};
use colored::*;

/// Re-enters the dispatcher with an absolute argv and returns its exit code.
pub type Dispatch<'d> = dyn FnMut(&[String], &mut Session<'_>) -> i32 + 'd;

/// Runs a menu until the user picks `0` or standard input closes.
///
/// A failing inner command is reported by that command itself; the loop just
/// comes back to the prompt.
pub fn run_menu(menu: &Menu, session: &mut Session<'_>, dispatch: &mut Dispatch<'_>) -> i32 {
    loop {
        print_menu(menu, session);

        match session.console.read_choice(menu.prompt) {
            Choice::Closed => {
                log::debug!("Input closed, leaving menu '{}'", menu.title);
                session.console.say("");
                return EXIT_OK;
            }
            Choice::Number(0) => {
                if let MenuExit::Exit {
                    farewell: Some(text),
                } = menu.exit
                {
                    session.console.say(text);
                }
                return EXIT_OK;
            }
            Choice::Number(n) => {
                let picked = usize::try_from(n)
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| menu.options.get(i));
                match picked {
                    Some(option) => {
                        if !run_option(option, session, dispatch) {
                            return EXIT_OK;
                        }
                    }
                    None => session.console.say(t!("common.invalid_option")),
                }
            }
            Choice::Invalid(text) => {
                log::debug!("Unparseable menu choice {:?}", text);
                session.console.say(t!("common.invalid_option"));
            }
        }
    }
}

fn print_menu(menu: &Menu, session: &mut Session<'_>) {
    session.console.say(format!("\n{}:", menu.title).bold());
    for (i, option) in menu.options.iter().enumerate() {
        match option.description {
            Some(desc) => session
                .console
                .say(format!("{}) {} - {}", i + 1, option.label, desc)),
            None => session.console.say(format!("{}) {}", i + 1, option.label)),
        }
    }
    let exit_line = match menu.exit {
        MenuExit::Back => t!("menu.back"),
        MenuExit::Exit { .. } => t!("menu.exit"),
    };
    session.console.say(exit_line);
}

/// Asks the option's inline questions and dispatches. Returns `false` when
/// input closed halfway through the questions.
fn run_option(option: &MenuOption, session: &mut Session<'_>, dispatch: &mut Dispatch<'_>) -> bool {
    let mut answers = Bindings::new();
    for (key, message) in &option.prompts {
        let answer = session.console.read_line(message);
        if session.console.is_closed() {
            return false;
        }
        answers.insert(*key, answer);
    }

    // Answers are operands, never flags: `--` goes in front of the first one.
    let mut argv = Vec::with_capacity(option.argv.len() + 1);
    let mut operands = false;
    for token in &option.argv {
        if !operands && template::has_placeholders(token) {
            argv.push("--".to_string());
            operands = true;
        }
        argv.push(template::render(token, &answers));
    }

    session
        .console
        .say(format!("\n--- {} ---", option.label).cyan());
    log::debug!("Menu option '{}' dispatches {:?}", option.label, argv);
    let code = dispatch(&argv, session);
    log::debug!("Menu option '{}' returned {}", option.label, code);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::Console;
    use crate::system::executor::{CommandRunner, ExecutionError, Invocation};
    use std::io::{self, Cursor};
    use std::path::Path;

    struct NoRunner;

    impl CommandRunner for NoRunner {
        fn run(&self, inv: &Invocation) -> Result<(), ExecutionError> {
            panic!("unexpected invocation {}", inv);
        }

        fn write_file(&self, path: &Path, _: &[u8], _: u32) -> io::Result<()> {
            panic!("unexpected write {}", path.display());
        }
    }

    fn menu() -> Menu {
        Menu::new("Recovery Menu", "Select option: ", MenuExit::Exit { farewell: Some("Bye.") })
            .option(MenuOption::new("List snapshots", &["btrfs", "list"]).describe("all subvolumes"))
            .option(
                MenuOption::new("Restore snapshot", &["restore-snapshot", "{snap}", "{mnt}"])
                    .ask("snap", "Enter snapshot name: ")
                    .ask("mnt", "Enter mountpoint: "),
            )
    }

    fn drive(input: &str) -> (i32, String, Vec<Vec<String>>) {
        colored::control::set_override(false);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut seen = Vec::new();
        let code = {
            let console = Console::new(&mut input, &mut out, &mut err);
            let mut session = Session::new(console, &NoRunner);
            run_menu(&menu(), &mut session, &mut |argv, _| {
                seen.push(argv.to_vec());
                0
            })
        };
        (code, String::from_utf8(out).unwrap(), seen)
    }

    #[test]
    fn test_zero_leaves_with_farewell() {
        let (code, out, seen) = drive("0\n");
        assert_eq!(code, 0);
        assert!(seen.is_empty());
        assert_eq!(
            out,
            "\nRecovery Menu:\n1) List snapshots - all subvolumes\n2) Restore snapshot\n0) Exit\nSelect option: Bye.\n"
        );
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (code, out, seen) = drive("abc\n7\n-3\n0\n");
        assert_eq!(code, 0);
        assert!(seen.is_empty());
        assert_eq!(out.matches("Invalid option.").count(), 3);
        assert_eq!(out.matches("Recovery Menu:").count(), 4);
    }

    #[test]
    fn test_inline_prompts_build_absolute_argv() {
        let (_, out, seen) = drive("2\n@snap 1\n/mnt\n1\n0\n");
        assert_eq!(
            seen,
            vec![
                vec!["restore-snapshot".to_string(), "--".into(), "@snap 1".into(), "/mnt".into()],
                vec!["btrfs".to_string(), "list".into()],
            ]
        );
        assert!(out.contains("\n--- Restore snapshot ---\n"));
    }

    #[test]
    fn test_closed_input_returns() {
        let (code, _, seen) = drive("");
        assert_eq!(code, 0);
        assert!(seen.is_empty());

        // Input ends in the middle of the inline questions.
        let (code, _, seen) = drive("2\nsnap\n");
        assert_eq!(code, 0);
        assert!(seen.is_empty());
    }
}
