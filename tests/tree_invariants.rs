// tests/tree_invariants.rs
//
// Properties that hold for every node of the command tree.

mod common;

use common::{RecordingRunner, ghostctl};
use ghostctl::cli::tree::CommandTree;
use ghostctl::models::Action;

fn argv_for(path: &[&'static str], extra: &[&'static str]) -> Vec<&'static str> {
    path.iter().chain(extra.iter()).copied().collect()
}

#[test]
fn help_on_every_node_runs_nothing() {
    let tree = CommandTree::build();
    for (path, _) in tree.walk() {
        let runner = RecordingRunner::new();
        let run = ghostctl(&runner, &argv_for(&path, &["--help"]), "");

        assert_eq!(run.code, 0, "{:?}", path);
        assert!(!run.stdout.is_empty(), "{:?} printed no help", path);
        assert!(runner.commands().is_empty(), "{:?} ran {:?}", path, runner.commands());
    }
}

#[test]
fn top_level_help_lists_commands() {
    let runner = RecordingRunner::new();
    let run = ghostctl(&runner, &["--help"], "");

    assert_eq!(run.code, 0);
    for name in ["restore-snapshot", "nvidia-dkms-fix", "backup-menu", "completion"] {
        assert!(run.stdout.contains(name), "help lacks {}", name);
    }
}

#[test]
fn surplus_operands_are_rejected_everywhere() {
    let tree = CommandTree::build();
    for (path, node) in tree.walk() {
        let surplus = vec!["surplus"; node.arity() + 1];
        let runner = RecordingRunner::new();
        let run = ghostctl(&runner, &argv_for(&path, &surplus), "");

        assert_eq!(run.code, 2, "{:?} accepted {} operands", path, surplus.len());
        assert!(runner.commands().is_empty(), "{:?}", path);
        assert!(!run.stderr.is_empty(), "{:?} gave no usage error", path);
    }
}

#[test]
fn missing_operands_are_rejected() {
    let tree = CommandTree::build();
    let with_args: Vec<_> = tree.walk().into_iter().filter(|(_, n)| n.arity() > 0).collect();
    assert!(!with_args.is_empty());

    for (path, node) in with_args {
        let short = vec!["bash"; node.arity() - 1];
        let runner = RecordingRunner::new();
        let run = ghostctl(&runner, &argv_for(&path, &short), "");

        assert_eq!(run.code, 2, "{:?} ran with {} operands", path, short.len());
        assert!(runner.commands().is_empty(), "{:?}", path);
    }
}

#[test]
fn every_menu_leaves_on_zero() {
    let tree = CommandTree::build();
    for (path, node) in tree.walk() {
        if !matches!(node.action, Some(Action::Menu(_))) {
            continue;
        }
        let runner = RecordingRunner::new();
        let run = ghostctl(&runner, &path, "0\n");

        assert_eq!(run.code, 0, "{:?}", path);
        assert!(runner.commands().is_empty(), "{:?}", path);
        assert!(
            run.stdout.contains("0) Back") || run.stdout.contains("0) Exit"),
            "{:?} printed no exit line",
            path
        );
    }
}

#[test]
fn every_menu_survives_bad_input_and_eof() {
    let tree = CommandTree::build();
    for (path, node) in tree.walk() {
        if !matches!(node.action, Some(Action::Menu(_))) {
            continue;
        }
        let runner = RecordingRunner::new();
        let run = ghostctl(&runner, &path, "abc\n99\n");

        assert_eq!(run.code, 0, "{:?}", path);
        assert_eq!(run.stdout.matches("Invalid option.").count(), 2, "{:?}", path);
        assert!(runner.commands().is_empty(), "{:?}", path);
    }
}
