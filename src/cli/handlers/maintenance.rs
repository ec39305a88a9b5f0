// src/cli/handlers/maintenance.rs

//! One-shot Arch repairs.

use crate::models::{CommandNode, Step};

/// Full upgrade, then the initramfs rebuilt.
pub fn arch_fix() -> CommandNode {
    CommandNode::new("arch-fix", t!("maintenance.arch_fix.about")).recipe(vec![
        Step::notice(t!("maintenance.arch_fix.upgrading")),
        Step::exec("pacman -Syu --noconfirm"),
        Step::notice(t!("maintenance.arch_fix.initramfs")),
        Step::exec("mkinitcpio -P"),
        Step::notice(t!("maintenance.arch_fix.done")),
    ])
}

/// Clears the package cache and reinstalls `base-devel`.
pub fn fix_makepkg() -> CommandNode {
    CommandNode::new("fix-makepkg", t!("maintenance.fix_makepkg.about")).recipe(vec![
        Step::notice(t!("maintenance.fix_makepkg.cleaning")),
        // Needs the shell for $HOME and the glob.
        Step::shell("rm -rf $HOME/.cache/pacman/pkg/*"),
        Step::notice(t!("maintenance.fix_makepkg.base_devel")),
        Step::exec("pacman -S --needed base-devel --noconfirm"),
        Step::notice(t!("maintenance.fix_makepkg.done")),
    ])
}
