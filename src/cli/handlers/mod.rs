// src/cli/handlers/mod.rs

//! Node builders for every area of the tree. Each module returns finished
//! `CommandNode`s; `root` puts them in the order `--help` lists them.

use crate::constants::BIN_NAME;
use crate::models::CommandNode;

pub mod backups;
pub mod btrfs;
pub mod builtins;
pub mod maintenance;
pub mod menus;
pub mod nvidia;
pub mod scripts;
pub mod services;
pub mod system;
pub mod tailscale;

/// The complete `ghostctl` tree.
pub fn root() -> CommandNode {
    CommandNode::new(BIN_NAME, t!("cli.about"))
        .long_about(t!("cli.long_about"))
        .children([
            builtins::version(),
            builtins::completion(),
            menus::main_menu(),
            system::system_info(),
            system::network(),
            services::services(),
            system::users(),
            system::logs(),
            system::health(),
            system::check(),
            system::devices(),
            nvidia::nvidia(),
            btrfs::btrfs(),
            btrfs::chroot(),
            btrfs::snapper(),
            btrfs::phantomboot(),
            tailscale::routes(),
            tailscale::acls(),
            tailscale::tailscale(),
            backups::backups(),
            scripts::scripts(),
            btrfs::restore_snapshot(),
            maintenance::arch_fix(),
            maintenance::fix_makepkg(),
            menus::recovery_menu(),
            services::systemd_service(),
            backups::backup_menu(),
            nvidia::nvidia_dkms_fix(),
        ])
}
