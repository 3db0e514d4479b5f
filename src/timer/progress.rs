//! Progress line rendering for the countdown loop.
//!
//! The bar is cosmetic feedback, redrawn in place once per second: filled
//! tomato cells, two-character empty cells, a percentage and the time left
//! as MM:SS.

use crate::types::ProgressSnapshot;

/// Glyph for one completed cell.
const FILLED_CELL: &str = "🍅";

/// Glyph for one pending cell; two characters wide so the bar keeps its
/// footprint as cells fill in.
const EMPTY_CELL: &str = "--";

/// The bar never grows beyond this many cells, however long the session.
pub const MAX_BAR_CELLS: u32 = 25;

// ============================================================================
// ProgressBar
// ============================================================================

/// Renders the in-place progress line for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    width: u32,
}

impl ProgressBar {
    /// Creates a bar sized for a session of the given length: one cell per
    /// minute, capped at [`MAX_BAR_CELLS`].
    pub fn for_duration(duration_minutes: u32) -> Self {
        Self {
            width: duration_minutes.min(MAX_BAR_CELLS),
        }
    }

    /// The bar width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of filled cells for a completed fraction.
    pub fn filled_cells(&self, fraction: f64) -> u32 {
        let filled = (fraction * f64::from(self.width)).round() as u32;
        filled.min(self.width)
    }

    /// Renders the full progress line for a snapshot.
    ///
    /// The line starts with a carriage return and carries no newline, so
    /// each tick overwrites the previous one.
    pub fn render(&self, snapshot: &ProgressSnapshot) -> String {
        let filled = self.filled_cells(snapshot.fraction);
        let empty = self.width - filled;
        let percent = (snapshot.fraction * 100.0).round() as u32;
        let minutes = snapshot.remaining_seconds / 60;
        let seconds = snapshot.remaining_seconds % 60;

        format!(
            "\r{}{} [{percent:>3}%] {minutes:02}:{seconds:02} ⏰",
            FILLED_CELL.repeat(filled as usize),
            EMPTY_CELL.repeat(empty as usize),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
