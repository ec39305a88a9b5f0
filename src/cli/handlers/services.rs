// src/cli/handlers/services.rs

//! systemd unit management.

use crate::models::{ArgSpec, CommandNode, Menu, MenuExit, MenuOption, Step};

/// A `sudo systemctl <verb> <service>` leaf that confirms what it did.
fn unit_verb(name: &'static str, about: &'static str, command: &'static str, done: &'static str) -> CommandNode {
    CommandNode::new(name, about)
        .arg(ArgSpec::new("service", t!("services.arg.service")))
        .recipe(vec![Step::exec(command), Step::notice(done)])
}

/// `services`: running units, plus per-unit verbs.
pub fn services() -> CommandNode {
    CommandNode::new("services", t!("services.about"))
        .recipe(vec![
            Step::notice(t!("services.running_header")),
            Step::exec("systemctl list-units --type=service --state=running --no-pager"),
        ])
        .child(CommandNode::new("menu", t!("services.menu.about")).menu(services_menu()))
        .child(
            CommandNode::new("list", t!("services.list.about"))
                .recipe(vec![Step::exec("systemctl list-unit-files --type=service --no-pager")]),
        )
        .child(
            CommandNode::new("status", t!("services.status.about"))
                .arg(ArgSpec::new("service", t!("services.arg.service")))
                .recipe(vec![Step::exec("systemctl status {service} --no-pager")]),
        )
        .children([
            unit_verb("enable", t!("services.enable.about"), "sudo systemctl enable {service}", t!("services.enable.done")),
            unit_verb("disable", t!("services.disable.about"), "sudo systemctl disable {service}", t!("services.disable.done")),
            unit_verb("start", t!("services.start.about"), "sudo systemctl start {service}", t!("services.start.done")),
            unit_verb("stop", t!("services.stop.about"), "sudo systemctl stop {service}", t!("services.stop.done")),
            unit_verb("restart", t!("services.restart.about"), "sudo systemctl restart {service}", t!("services.restart.done")),
        ])
        .child(
            CommandNode::new("watchlist", t!("services.watchlist.about")).recipe(vec![
                Step::notice(t!("services.watchlist.header")),
                Step::exec("systemctl list-units --type=service --state=failed --no-pager"),
            ]),
        )
}

fn services_menu() -> Menu {
    let plain = |verb: &'static str, description: &'static str| {
        MenuOption::new(verb, &["services", verb]).describe(description)
    };
    let per_unit = |verb: &'static str, description: &'static str| {
        MenuOption::new(verb, &["services", verb, "{service}"])
            .describe(description)
            .ask("service", t!("services.prompt.service"))
    };

    Menu::new(t!("services.menu.title"), t!("services.menu.prompt"), MenuExit::Back)
        .option(plain("list", t!("services.list.about")))
        .option(per_unit("status", t!("services.status.about")))
        .option(per_unit("enable", t!("services.enable.about")))
        .option(per_unit("disable", t!("services.disable.about")))
        .option(per_unit("start", t!("services.start.about")))
        .option(per_unit("stop", t!("services.stop.about")))
        .option(per_unit("restart", t!("services.restart.about")))
        .option(plain("watchlist", t!("services.watchlist.about")))
}

/// Pick a verb, name a unit. Shared by `systemd-service` and
/// `scripts systemd-service`.
pub fn systemd_service_menu() -> Menu {
    let entries = [
        (t!("systemd_service.enable"), "enable"),
        (t!("systemd_service.disable"), "disable"),
        (t!("systemd_service.start"), "start"),
        (t!("systemd_service.stop"), "stop"),
        (t!("systemd_service.status"), "status"),
    ];
    entries.into_iter().fold(
        Menu::new(
            t!("systemd_service.title"),
            t!("common.select_option"),
            MenuExit::Exit { farewell: None },
        ),
        |menu, (label, verb)| {
            menu.option(
                MenuOption::new(label, &["services", verb, "{service}"])
                    .ask("service", t!("services.prompt.service")),
            )
        },
    )
}

/// Standalone `systemd-service` menu.
pub fn systemd_service() -> CommandNode {
    CommandNode::new("systemd-service", t!("systemd_service.about")).menu(systemd_service_menu())
}
