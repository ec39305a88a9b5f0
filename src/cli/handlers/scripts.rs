// src/cli/handlers/scripts.rs

//! The `scripts` toolbox and its menu.

use crate::cli::handlers::{btrfs, nvidia, services};
use crate::models::{ArgSpec, CommandNode, Menu, MenuExit, MenuOption, Step};

/// A leaf that announces itself, then runs one command.
fn one_shot(name: &'static str, about: &'static str, notice: &'static str, command: &'static str) -> CommandNode {
    CommandNode::new(name, about).recipe(vec![Step::notice(notice), Step::exec(command)])
}

/// `scripts`: a group of one-shot fixes plus its menu.
pub fn scripts() -> CommandNode {
    CommandNode::new("scripts", t!("scripts.about"))
        .long_about(t!("scripts.long_about"))
        .child(CommandNode::new("menu", t!("scripts.menu.about")).menu(scripts_menu()))
        .child(nvidia::quick_fix())
        .child(one_shot(
            "mkinitcpio-fix",
            t!("scripts.mkinitcpio_fix.about"),
            t!("scripts.mkinitcpio_fix.notice"),
            "sudo mkinitcpio -P",
        ))
        .child(one_shot(
            "bootloader",
            t!("scripts.bootloader.about"),
            t!("scripts.bootloader.notice"),
            "sudo bootctl list",
        ))
        .child(
            CommandNode::new("systemd-service", t!("scripts.systemd_service.about"))
                .menu(services::systemd_service_menu()),
        )
        .child(
            CommandNode::new("pull", t!("scripts.pull.about"))
                .arg(ArgSpec::new("script", t!("scripts.arg.script")))
                .recipe(vec![
                    Step::notice(t!("scripts.pull.notice")),
                    Step::exec(
                        "curl -fsSL https://raw.githubusercontent.com/ghostkellz/ghostctl/main/scripts/{script}",
                    ),
                ]),
        )
        .child(one_shot(
            "update",
            t!("scripts.update.about"),
            t!("scripts.update.notice"),
            "sudo pacman -Syu --noconfirm",
        ))
        .child(one_shot(
            "clean",
            t!("scripts.clean.about"),
            t!("scripts.clean.notice"),
            "sudo pacman -Sc --noconfirm",
        ))
        .child(one_shot(
            "mirrorlist",
            t!("scripts.mirrorlist.about"),
            t!("scripts.mirrorlist.notice"),
            "sudo reflector --latest 20 --sort rate --save /etc/pacman.d/mirrorlist",
        ))
        .child(btrfs::fix_chroot())
        .child(
            CommandNode::new("keyring", t!("scripts.keyring.about")).recipe(vec![
                Step::notice(t!("scripts.keyring.notice")),
                Step::exec("sudo pacman-key --init"),
                Step::exec("sudo pacman-key --populate archlinux"),
            ]),
        )
        .child(one_shot(
            "timesync",
            t!("scripts.timesync.about"),
            t!("scripts.timesync.notice"),
            "sudo timedatectl set-ntp true",
        ))
        .child(one_shot(
            "locale",
            t!("scripts.locale.about"),
            t!("scripts.locale.notice"),
            "sudo locale-gen",
        ))
        .child(one_shot(
            "pacman-conf",
            t!("scripts.pacman_conf.about"),
            t!("scripts.pacman_conf.notice"),
            "cat /etc/pacman.conf",
        ))
        .child(one_shot(
            "pacman-log",
            t!("scripts.pacman_log.about"),
            t!("scripts.pacman_log.notice"),
            "tail -n 50 /var/log/pacman.log",
        ))
        .child(
            CommandNode::new("fsck", t!("scripts.fsck.about"))
                .arg(ArgSpec::new("device", t!("scripts.arg.device")))
                .recipe(vec![
                    Step::notice(t!("scripts.fsck.notice")),
                    Step::exec("sudo fsck -y {device}"),
                ]),
        )
}

fn scripts_menu() -> Menu {
    let simple = |name: &'static str, description: &'static str| {
        MenuOption::new(name, &["scripts", name]).describe(description)
    };

    Menu::new(t!("scripts.menu.title"), t!("scripts.menu.prompt"), MenuExit::Back)
        .option(simple("fix-nvidia-dkms", t!("scripts.fix_nvidia.about")))
        .option(simple("mkinitcpio-fix", t!("scripts.mkinitcpio_fix.about")))
        .option(simple("bootloader", t!("scripts.bootloader.about")))
        .option(simple("systemd-service", t!("scripts.systemd_service.about")))
        .option(
            MenuOption::new("pull", &["scripts", "pull", "{script}"])
                .describe(t!("scripts.pull.about"))
                .ask("script", t!("scripts.prompt.script")),
        )
        .option(simple("update", t!("scripts.update.about")))
        .option(simple("clean", t!("scripts.clean.about")))
        .option(simple("mirrorlist", t!("scripts.mirrorlist.about")))
        .option(
            MenuOption::new("fix-chroot", &["scripts", "fix-chroot", "{mountpoint}"])
                .describe(t!("scripts.fix_chroot.about"))
                .ask("mountpoint", t!("common.prompt.mountpoint")),
        )
        .option(simple("keyring", t!("scripts.keyring.about")))
        .option(simple("timesync", t!("scripts.timesync.about")))
        .option(simple("locale", t!("scripts.locale.about")))
        .option(simple("pacman-conf", t!("scripts.pacman_conf.about")))
        .option(simple("pacman-log", t!("scripts.pacman_log.about")))
        .option(
            MenuOption::new("fsck", &["scripts", "fsck", "{device}"])
                .describe(t!("scripts.fsck.about"))
                .ask("device", t!("scripts.prompt.device")),
        )
}
