//! CLI module for tomato.
//!
//! - `commands`: argument definitions using clap derive
//! - `display`: output formatting for the error path

pub mod commands;
pub mod display;

pub use commands::{Cli, SessionPlan};
pub use display::Display;
