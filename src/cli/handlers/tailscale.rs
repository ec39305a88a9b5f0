// src/cli/handlers/tailscale.rs

//! Tailscale and Headscale commands.

use crate::models::{ArgSpec, CommandNode, Menu, MenuExit, MenuOption, Step};

/// Both `routes` and `tailscale routes` print the node's route state.
const ROUTES_COMMAND: &str = "tailscale status --json";

/// `tailscale` leaves and menu.
pub fn tailscale() -> CommandNode {
    CommandNode::new("tailscale", t!("tailscale.about"))
        .child(
            CommandNode::new("status", t!("tailscale.status.about"))
                .recipe(vec![Step::exec("tailscale status")]),
        )
        .child(
            CommandNode::new("up", t!("tailscale.up.about"))
                .recipe(vec![Step::exec("sudo tailscale up --accept-routes")]),
        )
        .child(
            CommandNode::new("advertise", t!("tailscale.advertise.about"))
                .arg(ArgSpec::new("subnet", t!("tailscale.arg.subnet")))
                .recipe(vec![Step::exec(
                    "sudo tailscale up --accept-routes --advertise-routes {subnet}",
                )]),
        )
        .child(
            CommandNode::new("down", t!("tailscale.down.about"))
                .recipe(vec![Step::exec("sudo tailscale down")]),
        )
        .child(
            CommandNode::new("routes", t!("tailscale.routes.about"))
                .recipe(vec![Step::exec(ROUTES_COMMAND)]),
        )
        .child(
            CommandNode::new("debug", t!("tailscale.debug.about"))
                .recipe(vec![Step::exec("tailscale bugreport")]),
        )
        .child(CommandNode::new("menu", t!("tailscale.menu.about")).menu(tailscale_menu()))
}

fn tailscale_menu() -> Menu {
    Menu::new(t!("tailscale.menu.title"), t!("tailscale.menu.prompt"), MenuExit::Back)
        .option(MenuOption::new("acls", &["acls", "list"]).describe(t!("acls.about")))
        .option(MenuOption::new("routes", &["routes"]).describe(t!("routes.about")))
        .option(MenuOption::new("status", &["tailscale", "status"]).describe(t!("tailscale.status.about")))
}

/// Top-level `routes`.
pub fn routes() -> CommandNode {
    CommandNode::new("routes", t!("routes.about"))
        .long_about(t!("routes.long_about"))
        .recipe(vec![Step::exec(ROUTES_COMMAND)])
}

/// Headscale policy, read back or replaced from a file.
pub fn acls() -> CommandNode {
    CommandNode::new("acls", t!("acls.about"))
        .child(
            CommandNode::new("list", t!("acls.list.about"))
                .recipe(vec![Step::exec("sudo headscale policy get")]),
        )
        .child(
            CommandNode::new("apply", t!("acls.apply.about"))
                .arg(ArgSpec::new("file", t!("acls.arg.file")))
                .recipe(vec![
                    Step::notice(t!("acls.apply.notice")),
                    Step::exec("sudo headscale policy set --file {file}"),
                ]),
        )
}
