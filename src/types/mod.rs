//! Core data types for the tomato timer.
//!
//! This module defines the data structures used for:
//! - Timer configuration with validation
//! - A single countdown session and its derived progress snapshots
//! - The bilingual message sets (see `messages`)

use std::time::Duration;

use tokio::time::Instant;

pub mod messages;

pub use messages::Language;

// ============================================================================
// SessionKind
// ============================================================================

/// The two kinds of countdown session, distinguished only by their default
/// duration and completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// A focused work interval.
    Work,
    /// A rest interval.
    Break,
}

impl SessionKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::Break => "break",
        }
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for the timer.
///
/// Replaces process-wide defaults with an explicit struct handed to the
/// composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Work duration in minutes.
    pub work_minutes: u32,
    /// Break duration in minutes.
    pub break_minutes: u32,
    /// Language of prompts, completion messages and the speech voice.
    pub language: Language,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            language: Language::default(),
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified work duration.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified break duration.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails. Zero-length sessions
    /// are rejected here rather than treated as instant completions.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_minutes < 1 {
            return Err("work duration must be at least 1 minute".to_string());
        }
        if self.break_minutes < 1 {
            return Err("break duration must be at least 1 minute".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Session
// ============================================================================

/// One countdown run, from start to completion or cancellation.
///
/// Owns its start instant; progress is always recomputed against the
/// monotonic clock rather than accumulated tick by tick, so timing error
/// cannot build up over a long session.
#[derive(Debug)]
pub struct Session {
    duration_minutes: u32,
    completion_message: String,
    started_at: Instant,
}

impl Session {
    /// Starts a session now.
    pub fn begin(duration_minutes: u32, completion_message: &str) -> Self {
        Self {
            duration_minutes,
            completion_message: completion_message.to_string(),
            started_at: Instant::now(),
        }
    }

    /// The configured duration in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        i64::from(self.duration_minutes) * 60
    }

    /// The message handed to the notifier when the countdown completes.
    pub fn completion_message(&self) -> &str {
        &self.completion_message
    }

    /// Computes a fresh progress snapshot from the current clock.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.started_at.elapsed(), self.duration_seconds())
    }
}

// ============================================================================
// ProgressSnapshot
// ============================================================================

/// Progress derived from a session's start instant and the current clock.
///
/// Recomputed every tick; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    /// Wall time since the session started, rounded to the nearest whole
    /// second (not truncated, so the countdown does not stutter on
    /// sub-second drift).
    pub elapsed_seconds: i64,
    /// Seconds left; ≤ 0 once the session is terminal.
    pub remaining_seconds: i64,
    /// Completed fraction in [0, 1].
    pub fraction: f64,
}

impl ProgressSnapshot {
    /// Derives a snapshot from an elapsed wall time and a total duration.
    pub fn new(elapsed: Duration, total_seconds: i64) -> Self {
        let elapsed_seconds = elapsed.as_secs_f64().round() as i64;
        let remaining_seconds = total_seconds - elapsed_seconds;
        let fraction = if total_seconds <= 0 {
            1.0
        } else {
            (elapsed_seconds as f64 / total_seconds as f64).clamp(0.0, 1.0)
        };

        Self {
            elapsed_seconds,
            remaining_seconds,
            fraction,
        }
    }

    /// True once the countdown has reached (or passed) zero.
    pub fn is_terminal(&self) -> bool {
        self.remaining_seconds <= 0
    }
}

// ============================================================================
// Tests
// ============================================================================
