// src/cli/handlers/btrfs.rs

//! Snapshot creation, restore and chroot preparation.

use crate::models::{ArgSpec, CommandNode, Step};

/// `btrfs`: usage summary, plus `snapshot` and `list`.
pub fn btrfs() -> CommandNode {
    CommandNode::new("btrfs", t!("btrfs.about"))
        .long_about(t!("btrfs.long_about"))
        .recipe(vec![Step::exec("btrfs filesystem usage /")])
        .child(
            CommandNode::new("snapshot", t!("btrfs.snapshot.about"))
                .arg(ArgSpec::new("subvol", t!("btrfs.arg.subvol")))
                .arg(ArgSpec::new("dest", t!("btrfs.arg.dest")))
                .recipe(vec![
                    Step::notice(t!("btrfs.snapshot.notice")),
                    Step::exec("sudo btrfs subvolume snapshot {subvol} {dest}"),
                ]),
        )
        .child(
            CommandNode::new("list", t!("btrfs.list.about"))
                .recipe(vec![Step::exec("sudo btrfs subvolume list /")]),
        )
}

/// `snapper`: list snapshots, or `setup` root and home configs.
pub fn snapper() -> CommandNode {
    CommandNode::new("snapper", t!("snapper.about"))
        .recipe(vec![Step::exec("sudo snapper list")])
        .child(CommandNode::new("setup", t!("snapper.setup.about")).recipe(vec![
            Step::notice(t!("snapper.setup.notice")),
            Step::exec("snapper -c root create-config /"),
            Step::exec("snapper -c home create-config /home"),
            Step::notice(t!("snapper.setup.done")),
        ]))
}

/// `umount`, then the mount that everything after it depends on.
pub fn restore_snapshot() -> CommandNode {
    CommandNode::new("restore-snapshot", t!("restore.about"))
        .arg(ArgSpec::new("snapshot", t!("restore.arg.snapshot")))
        .arg(ArgSpec::new("mountpoint", t!("restore.arg.mountpoint")))
        .recipe(vec![
            Step::notice(t!("restore.notice")),
            Step::exec("umount {mountpoint}"),
            Step::critical(
                "mount -o subvol={snapshot} / {mountpoint}",
                t!("restore.mount_failed"),
            ),
            Step::notice(t!("restore.done")),
        ])
}

/// Bind mounts of the pseudo filesystems a chroot needs.
fn bind_mounts() -> Vec<Step> {
    vec![
        Step::exec("sudo mount --bind /dev {mountpoint}/dev"),
        Step::exec("sudo mount --bind /proc {mountpoint}/proc"),
        Step::exec("sudo mount --bind /sys {mountpoint}/sys"),
    ]
}

/// Bind mounts, then an interactive chroot.
pub fn chroot() -> CommandNode {
    let mut steps = vec![Step::notice(t!("chroot.notice"))];
    steps.extend(bind_mounts());
    steps.push(Step::notice(t!("chroot.launching")));
    steps.push(Step::exec("sudo chroot {mountpoint}"));

    CommandNode::new("chroot", t!("chroot.about"))
        .arg(ArgSpec::new("mountpoint", t!("chroot.arg.mountpoint")))
        .recipe(steps)
}

/// `scripts fix-chroot`: the mounts without entering the chroot.
pub fn fix_chroot() -> CommandNode {
    let mut steps = vec![Step::notice(t!("scripts.fix_chroot.notice"))];
    steps.extend(bind_mounts());
    steps.push(Step::notice(t!("scripts.fix_chroot.done")));

    CommandNode::new("fix-chroot", t!("scripts.fix_chroot.about"))
        .arg(ArgSpec::new("mountpoint", t!("chroot.arg.mountpoint")))
        .recipe(steps)
}

/// Snapshot send/receive; a group with no action of its own.
pub fn phantomboot() -> CommandNode {
    CommandNode::new("phantomboot", t!("phantomboot.about"))
        .long_about(t!("phantomboot.long_about"))
        .child(
            CommandNode::new("restore", t!("phantomboot.restore.about"))
                .arg(ArgSpec::new("snapshot", t!("restore.arg.snapshot")))
                .arg(ArgSpec::new("mountpoint", t!("restore.arg.mountpoint")))
                .recipe(vec![
                    Step::notice(t!("phantomboot.restore.notice")),
                    // The pipe needs a shell; both operands are quoted into it.
                    Step::shell("sudo btrfs send {snapshot} | sudo btrfs receive {mountpoint}"),
                ]),
        )
}
