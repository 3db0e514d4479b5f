//! Notification delivery error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised by a notification delivery channel.
///
/// These never leave the notification layer: `SystemNotifier::notify`
/// swallows them after logging, because timer accuracy must not depend on
/// notification delivery succeeding.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The helper command could not be launched, typically because it is
    /// not installed on this machine.
    #[error("failed to launch {helper}: {source}")]
    Launch {
        /// Name of the helper binary.
        helper: &'static str,
        /// The underlying launch failure.
        #[source]
        source: std::io::Error,
    },

    /// The helper ran but reported failure.
    #[error("{helper} exited with {status}")]
    Failed {
        /// Name of the helper binary.
        helper: &'static str,
        /// The helper's exit status.
        status: ExitStatus,
    },
}

// ============================================================================
// Tests
// ============================================================================
