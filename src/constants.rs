// src/constants.rs

//! Fixed names, paths and exit codes.

/// The binary name used for help output and completion scripts.
pub const BIN_NAME: &str = "ghostctl";

/// Exit code for a successful dispatch.
pub const EXIT_OK: i32 = 0;

/// Exit code when an action reports failure (a critical step failed).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for argv validation errors: wrong arity, unknown command, bad value.
pub const EXIT_USAGE: i32 = 2;

/// Exit code used when the user interrupts the tool outside of a child process.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Shell interpreter used for shell steps (`sh -c "<script>"`).
pub const SHELL_PROGRAM: &str = "sh";

/// Unit written by the restic setup wizard.
pub const RESTIC_SERVICE_PATH: &str = "/etc/systemd/system/restic-backup.service";

/// Timer written by the restic setup wizard.
pub const RESTIC_TIMER_PATH: &str = "/etc/systemd/system/restic-backup.timer";

/// Credentials template written by the restic setup wizard.
pub const RESTIC_ENV_PATH: &str = "/etc/restic.env";

/// Nouveau blacklist written by the NVIDIA fix.
pub const NOUVEAU_BLACKLIST_PATH: &str = "/etc/modprobe.d/blacklist-nouveau.conf";

/// Permission bits for every file the tool writes.
pub const CONFIG_FILE_MODE: u32 = 0o644;

