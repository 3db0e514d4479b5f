//! Display utilities for the tomato CLI.

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows an error message on standard error.
    ///
    /// The message is printed plainly; no backtrace, no error chain dump.
    pub fn show_error(message: &str) {
        eprintln!("error: {message}");
    }
}

// ============================================================================
// Tests
// ============================================================================
