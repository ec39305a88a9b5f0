//! `ghostctl`: Arch Linux recovery, maintenance, backup and driver toolbox.
//!
//! A static command tree (`cli::handlers`) is rendered into clap; leaves run
//! recipes through a `CommandRunner`, menus re-enter the dispatcher.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
