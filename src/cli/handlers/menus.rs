// src/cli/handlers/menus.rs

//! Standalone interactive entry points.

use crate::models::{CommandNode, Menu, MenuExit, MenuOption};

/// `ghostctl menu`, the top-level interactive entry.
pub fn main_menu() -> CommandNode {
    let menu = Menu::new(
        t!("menu.main.title"),
        t!("menu.main.prompt"),
        MenuExit::Exit {
            farewell: Some(t!("menu.main.farewell")),
        },
    )
    .option(MenuOption::new(t!("menu.main.system_info"), &["system-info"]))
    .option(MenuOption::new(t!("menu.main.scripts"), &["scripts", "menu"]))
    .option(MenuOption::new(t!("menu.main.tailscale"), &["tailscale", "menu"]))
    .option(MenuOption::new(t!("menu.main.backups"), &["backups", "menu"]))
    .option(MenuOption::new(t!("menu.main.services"), &["services", "menu"]))
    .option(MenuOption::new(t!("menu.main.check"), &["check"]));

    CommandNode::new("menu", t!("menu.main.about")).menu(menu)
}

/// List or restore snapshots.
pub fn recovery_menu() -> CommandNode {
    let menu = Menu::new(
        t!("recovery.title"),
        t!("common.select_option"),
        MenuExit::Exit { farewell: None },
    )
    .option(MenuOption::new(t!("recovery.list"), &["btrfs", "list"]))
    .option(
        MenuOption::new(t!("recovery.restore"), &["restore-snapshot", "{snapshot}", "{mountpoint}"])
            .ask("snapshot", t!("recovery.prompt.snapshot"))
            .ask("mountpoint", t!("common.prompt.mountpoint")),
    );

    CommandNode::new("recovery-menu", t!("recovery.about")).menu(menu)
}
