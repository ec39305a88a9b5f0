// src/cli/handlers/backups.rs

//! Restic and rclone backups, plus the systemd timer wizard.

use crate::constants::{CONFIG_FILE_MODE, RESTIC_ENV_PATH, RESTIC_SERVICE_PATH, RESTIC_TIMER_PATH};
use crate::models::{CommandNode, Menu, MenuExit, MenuOption, Step};

const RESTIC_SERVICE_UNIT: &str = "\
[Unit]
Description=Restic Backup

[Service]
Type=oneshot
EnvironmentFile=/etc/restic.env
ExecStart=/usr/bin/restic backup {source} --repo {dest}
ExecStartPost=/usr/bin/restic forget --prune --keep-last 7 --repo {dest}
";

const RESTIC_TIMER_UNIT: &str = "\
[Unit]
Description=Restic Backup Timer

[Timer]
OnCalendar={sched}
Persistent=true

[Install]
WantedBy=timers.target
";

const RESTIC_ENV_TEMPLATE: &str = "\
# RESTIC_PASSWORD=yourpassword
# AWS_ACCESS_KEY_ID=yourkey
# AWS_SECRET_ACCESS_KEY=yoursecret
# RESTIC_REPOSITORY=s3:s3.amazonaws.com/bucket
";

/// Installs restic, asks where and when to back up, then writes and enables a
/// oneshot service with its timer. Re-running it rewrites the same files.
fn restic_setup_steps() -> Vec<Step> {
    vec![
        Step::notice(t!("backups.restic_setup.installing")),
        Step::shell("command -v restic || sudo pacman -S --noconfirm restic"),
        Step::notice(t!("backups.restic_setup.source_header")),
        Step::prompt_or("source", t!("backups.restic_setup.prompt.source"), "/home"),
        Step::prompt("dest", t!("backups.restic_setup.prompt.dest")),
        Step::prompt("sched", t!("backups.restic_setup.prompt.sched")),
        Step::notice(t!("backups.restic_setup.writing_units")),
        Step::write(RESTIC_SERVICE_PATH, RESTIC_SERVICE_UNIT, CONFIG_FILE_MODE),
        Step::write(RESTIC_TIMER_PATH, RESTIC_TIMER_UNIT, CONFIG_FILE_MODE),
        Step::notice(t!("backups.restic_setup.writing_env")),
        Step::write(RESTIC_ENV_PATH, RESTIC_ENV_TEMPLATE, CONFIG_FILE_MODE),
        Step::notice(t!("backups.restic_setup.enabling")),
        Step::exec("systemctl daemon-reload"),
        Step::exec("systemctl enable --now restic-backup.timer"),
        Step::notice(t!("backups.restic_setup.done")),
    ]
}

/// `backups` and its restic and rclone leaves.
pub fn backups() -> CommandNode {
    CommandNode::new("backups", t!("backups.about"))
        .child(CommandNode::new("menu", t!("backups.menu.about")).menu(backups_menu()))
        .child(CommandNode::new("restic-setup", t!("backups.restic_setup.about")).recipe(restic_setup_steps()))
        .child(
            CommandNode::new("restic-backup", t!("backups.restic_backup.about")).recipe(vec![
                Step::notice(t!("backups.restic_backup.notice")),
                Step::exec("sudo systemctl start restic-backup.service"),
            ]),
        )
        .child(
            CommandNode::new("restic-restore", t!("backups.restic_restore.about")).recipe(vec![
                Step::prompt("repo", t!("backups.prompt.repo")),
                Step::prompt_or("snapshot", t!("backups.prompt.snapshot"), "latest"),
                Step::prompt("target", t!("backups.prompt.target")),
                Step::exec("sudo restic restore {snapshot} --repo {repo} --target {target}"),
            ]),
        )
        .child(
            CommandNode::new("rclone-setup", t!("backups.rclone_setup.about"))
                .recipe(vec![Step::exec("rclone config")]),
        )
        .child(
            CommandNode::new("rclone-backup", t!("backups.rclone_backup.about")).recipe(vec![
                Step::prompt("source", t!("backups.prompt.rclone_source")),
                Step::prompt("remote", t!("backups.prompt.remote")),
                Step::exec("rclone sync {source} {remote} --progress"),
            ]),
        )
        .child(
            CommandNode::new("rclone-restore", t!("backups.rclone_restore.about")).recipe(vec![
                Step::prompt("remote", t!("backups.prompt.remote")),
                Step::prompt("dest", t!("backups.prompt.rclone_dest")),
                Step::exec("rclone copy {remote} {dest} --progress"),
            ]),
        )
}

fn backups_menu() -> Menu {
    let entries = [
        ("restic-setup", t!("backups.restic_setup.about")),
        ("restic-backup", t!("backups.restic_backup.about")),
        ("restic-restore", t!("backups.restic_restore.about")),
        ("rclone-setup", t!("backups.rclone_setup.about")),
        ("rclone-backup", t!("backups.rclone_backup.about")),
        ("rclone-restore", t!("backups.rclone_restore.about")),
    ];
    entries.into_iter().fold(
        Menu::new(t!("backups.menu.title"), t!("backups.menu.prompt"), MenuExit::Back),
        |menu, (name, description)| {
            menu.option(MenuOption::new(name, &["backups", name]).describe(description))
        },
    )
}

/// The standalone setup menu: restic timer or snapper configs.
pub fn backup_menu() -> CommandNode {
    let menu = Menu::new(
        t!("backup_menu.title"),
        t!("common.select_option"),
        MenuExit::Exit { farewell: None },
    )
    .option(MenuOption::new(t!("backup_menu.restic"), &["backups", "restic-setup"]))
    .option(MenuOption::new(t!("backup_menu.snapper"), &["snapper", "setup"]));

    CommandNode::new("backup-menu", t!("backup_menu.about")).menu(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::{self, Bindings};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_unit_layout() {
        let values: Bindings = [("source", "/data"), ("dest", "/backup")].into_iter().collect();
        assert_eq!(
            template::render(RESTIC_SERVICE_UNIT, &values),
            "[Unit]\nDescription=Restic Backup\n\n[Service]\nType=oneshot\n\
             EnvironmentFile=/etc/restic.env\n\
             ExecStart=/usr/bin/restic backup /data --repo /backup\n\
             ExecStartPost=/usr/bin/restic forget --prune --keep-last 7 --repo /backup\n"
        );
    }

    #[test]
    fn test_timer_unit_layout() {
        let values: Bindings = [("sched", "weekly")].into_iter().collect();
        assert_eq!(
            template::render(RESTIC_TIMER_UNIT, &values),
            "[Unit]\nDescription=Restic Backup Timer\n\n[Timer]\nOnCalendar=weekly\n\
             Persistent=true\n\n[Install]\nWantedBy=timers.target\n"
        );
    }

    #[test]
    fn test_env_template_is_all_comments() {
        let lines: Vec<&str> = RESTIC_ENV_TEMPLATE.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.starts_with("# ")));
        for var in ["RESTIC_PASSWORD", "AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "RESTIC_REPOSITORY"] {
            assert!(RESTIC_ENV_TEMPLATE.contains(&format!("# {}=", var)));
        }
    }
}
