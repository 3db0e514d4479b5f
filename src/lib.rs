//! Tomato - a command-line Pomodoro timer.
//!
//! This library backs the `tomato` binary. It provides:
//! - A countdown engine with per-second progress rendering and
//!   preemptible cancellation
//! - A best-effort notification layer over platform helper commands
//! - CLI definitions and session orchestration
//! - Configuration and bilingual message types

pub mod app;
pub mod cli;
pub mod notify;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use cli::{Cli, SessionPlan};
pub use notify::{MockNotifier, Notifier, SystemNotifier};
pub use timer::{CountdownEngine, ProgressBar, SessionOutcome};
pub use types::{Language, ProgressSnapshot, Session, SessionKind, TimerConfig};
