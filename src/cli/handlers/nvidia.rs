// src/cli/handlers/nvidia.rs

//! NVIDIA status and the DKMS driver fix.

use crate::constants::{CONFIG_FILE_MODE, NOUVEAU_BLACKLIST_PATH};
use crate::models::{CommandNode, Step};

const NOUVEAU_BLACKLIST: &str = "blacklist nouveau\noptions nouveau modeset=0\n";

/// Driver status through `nvidia-smi`.
pub fn nvidia() -> CommandNode {
    CommandNode::new("nvidia", t!("nvidia.about")).recipe(vec![Step::exec("nvidia-smi")])
}

/// Headers, nouveau out, the chosen driver in, modules and initramfs rebuilt.
///
/// The driver question comes after the preparation steps; an answer other than
/// 1, 2 or 3 ends the recipe before any rebuild.
pub fn nvidia_dkms_fix() -> CommandNode {
    CommandNode::new("nvidia-dkms-fix", t!("nvidia.fix.about")).recipe(vec![
        Step::notice(t!("nvidia.fix.header")),
        Step::notice(t!("nvidia.fix.headers")),
        Step::exec("pacman -S --needed linux-headers --noconfirm"),
        Step::notice(t!("nvidia.fix.dkms_status")),
        Step::exec("dkms status"),
        Step::notice(t!("nvidia.fix.removing_nouveau")),
        Step::shell("pacman -Rns --noconfirm xf86-video-nouveau || true"),
        Step::notice(t!("nvidia.fix.blacklisting")),
        Step::write(NOUVEAU_BLACKLIST_PATH, NOUVEAU_BLACKLIST, CONFIG_FILE_MODE),
        Step::notice(t!("nvidia.fix.option.proprietary")),
        Step::notice(t!("nvidia.fix.option.open")),
        Step::notice(t!("nvidia.fix.option.open_beta")),
        Step::prompt("driver", t!("nvidia.fix.prompt")),
        Step::notice(t!("nvidia.fix.installing")),
        Step::choose(
            "driver",
            vec![
                ("1", vec![Step::exec("pacman -S --needed nvidia-dkms --noconfirm")]),
                ("2", vec![Step::exec("pacman -S --needed nvidia-open-dkms --noconfirm")]),
                (
                    "3",
                    vec![
                        Step::notice(t!("nvidia.fix.installing_yay")),
                        Step::shell("command -v yay || sudo pacman -S --noconfirm yay"),
                        Step::exec("yay -S --needed nvidia-open-beta-dkms --noconfirm"),
                    ],
                ),
            ],
        ),
        Step::notice(t!("nvidia.fix.rebuilding")),
        Step::exec("dkms autoinstall"),
        Step::notice(t!("nvidia.fix.initramfs")),
        Step::exec("mkinitcpio -P"),
        Step::notice(t!("nvidia.fix.dmesg")),
        Step::shell("dmesg | grep -i nvidia"),
        Step::notice(t!("nvidia.fix.done")),
    ])
}

/// `scripts fix-nvidia-dkms`: the quick variant, no driver change.
pub fn quick_fix() -> CommandNode {
    CommandNode::new("fix-nvidia-dkms", t!("scripts.fix_nvidia.about")).recipe(vec![
        Step::notice(t!("scripts.fix_nvidia.notice")),
        Step::exec("sudo mkinitcpio -P"),
        Step::exec("sudo systemctl restart systemd-modules-load.service"),
    ])
}
