//! # System Interaction Layer
//!
//! The boundary between recipes and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: spawns external programs with inherited stdio, writes files,
//!   and defines the `CommandRunner` seam every action goes through.
//! - **`interrupt`**: Ctrl+C bookkeeping so an interrupt reaches the foreground
//!   child without killing the menu that launched it.

pub mod executor;
pub mod interrupt;
