// src/system/interrupt.rs

//! Ctrl+C pass-through.
//!
//! The terminal delivers the interrupt to the whole foreground process group,
//! so a running child sees it on its own. The tool only has to survive it while
//! waiting on that child; at any other time it exits the way a shell would.

use crate::constants::EXIT_INTERRUPTED;
use std::sync::atomic::{AtomicBool, Ordering};

static FOREGROUND_CHILD: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the process-wide handler. Call once, from the binary.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        if FOREGROUND_CHILD.load(Ordering::SeqCst) {
            INTERRUPTED.store(true, Ordering::SeqCst);
        } else {
            eprintln!();
            std::process::exit(EXIT_INTERRUPTED);
        }
    })
}

/// Marks that the tool is blocked on a child process.
pub fn enter_foreground() {
    INTERRUPTED.store(false, Ordering::SeqCst);
    FOREGROUND_CHILD.store(true, Ordering::SeqCst);
}

/// Marks that the child is gone. A recorded interrupt stays until taken.
pub fn leave_foreground() {
    FOREGROUND_CHILD.store(false, Ordering::SeqCst);
}

/// Returns whether an interrupt arrived during the last child, and clears it.
pub fn take_interrupted() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

/// Serialises tests that touch the process-wide flags, directly or by
/// spawning a child through the executor.
#[cfg(test)]
pub(crate) fn flags_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
