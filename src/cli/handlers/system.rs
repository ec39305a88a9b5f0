// src/cli/handlers/system.rs

//! Read-only inspection leaves: nothing here changes the system.

use crate::models::{CommandNode, Step};

/// Kernel, memory and root filesystem.
pub fn system_info() -> CommandNode {
    CommandNode::new("system-info", t!("system.info.about")).recipe(vec![
        Step::notice(t!("system.info.header")),
        Step::exec("uname -a"),
        Step::exec("free -h"),
        Step::exec("df -h /"),
    ])
}

/// Interface addresses.
pub fn network() -> CommandNode {
    CommandNode::new("network", t!("system.network.about")).recipe(vec![
        Step::notice(t!("system.network.header")),
        Step::exec("ip addr"),
    ])
}

/// Local account names.
pub fn users() -> CommandNode {
    CommandNode::new("users", t!("system.users.about")).recipe(vec![
        Step::notice(t!("system.users.header")),
        Step::exec("cut -d: -f1 /etc/passwd"),
    ])
}

/// Recent journal entries.
pub fn logs() -> CommandNode {
    CommandNode::new("logs", t!("system.logs.about")).recipe(vec![
        Step::notice(t!("system.logs.header")),
        Step::exec("journalctl -n 50 --no-pager"),
    ])
}

/// Disk, memory and failed units.
pub fn health() -> CommandNode {
    CommandNode::new("health", t!("system.health.about")).recipe(vec![
        Step::notice(t!("system.health.header")),
        Step::exec("df -h"),
        Step::exec("free -h"),
        Step::exec("systemctl --failed --no-pager"),
    ])
}

/// Failed units and presence of the tools ghostctl drives.
pub fn check() -> CommandNode {
    CommandNode::new("check", t!("system.check.about")).recipe(vec![
        Step::notice(t!("system.check.header")),
        Step::exec("systemctl --failed --no-pager"),
        Step::shell("command -v pacman btrfs restic tailscale"),
    ])
}

/// PCI and USB devices.
pub fn devices() -> CommandNode {
    CommandNode::new("devices", t!("system.devices.about")).recipe(vec![
        Step::notice(t!("system.devices.pci")),
        Step::exec("lspci"),
        Step::notice(t!("system.devices.usb")),
        Step::exec("lsusb"),
    ])
}
