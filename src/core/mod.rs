// src/core/mod.rs

//! # Core Engine
//!
//! Prompting, templating, recipe execution and the menu loop. Nothing in here
//! knows about clap.

pub mod config_loader;
pub mod menu_engine;
pub mod prompt;
pub mod recipe_executor;
pub mod session;
pub mod template;
