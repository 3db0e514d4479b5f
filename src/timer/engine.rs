//! Countdown engine.
//!
//! The heart of the timer: a sequential loop that recomputes progress from
//! the monotonic clock every second, redraws the progress line, and fires
//! the notifier exactly once when the countdown reaches zero. The 1-second
//! wait is raced against a cancellation signal, so Ctrl+C takes effect
//! within the current tick rather than after the full remaining duration.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;

use crate::notify::Notifier;
use crate::timer::progress::ProgressBar;
use crate::types::{Language, Session};

/// Fixed cadence of the countdown loop.
const TICK: Duration = Duration::from_secs(1);

// ============================================================================
// SessionOutcome
// ============================================================================

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The countdown ran to zero; the notifier was invoked exactly once.
    Completed,
    /// Cancellation was signalled mid-run; the notifier was not invoked.
    Cancelled,
}

// ============================================================================
// CountdownEngine
// ============================================================================

/// Runs countdown sessions against an injected notifier and output stream.
///
/// The engine is generic over both so tests can observe rendered output
/// and notification calls without touching the real terminal or any
/// platform helper.
pub struct CountdownEngine<N, W> {
    notifier: N,
    out: W,
    cancel: watch::Receiver<bool>,
    language: Language,
}

impl<N, W> CountdownEngine<N, W>
where
    N: Notifier,
    W: Write,
{
    /// Creates an engine.
    ///
    /// `cancel` flips to `true` when the user interrupts the run; the
    /// sender side typically lives in a Ctrl+C listener task.
    pub fn new(notifier: N, out: W, cancel: watch::Receiver<bool>, language: Language) -> Self {
        Self {
            notifier,
            out,
            cancel,
            language,
        }
    }

    /// Writes a full line, such as a session prompt, to the engine's
    /// output stream.
    pub fn announce(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    /// Runs one countdown session to completion or cancellation.
    ///
    /// Each tick recomputes the progress snapshot from the session's start
    /// instant, so timing error cannot accumulate. On completion the
    /// progress line is terminated with a newline and the notifier is
    /// invoked exactly once with `completion_message`; on cancellation the
    /// farewell line is printed instead and the notifier is not invoked.
    ///
    /// Cancellation is not an error: it returns `Ok(Cancelled)`.
    pub async fn run(
        &mut self,
        duration_minutes: u32,
        completion_message: &str,
    ) -> Result<SessionOutcome> {
        let session = Session::begin(duration_minutes, completion_message);
        let bar = ProgressBar::for_duration(duration_minutes);

        loop {
            let snapshot = session.snapshot();
            if snapshot.is_terminal() {
                writeln!(self.out).context("failed to write to output stream")?;
                break;
            }

            write!(self.out, "{}", bar.render(&snapshot))
                .context("failed to render progress line")?;
            self.out.flush().context("failed to flush output stream")?;

            tokio::select! {
                _ = cancelled(&mut self.cancel) => {
                    writeln!(self.out, "\n{}", self.language.farewell())
                        .context("failed to write farewell")?;
                    return Ok(SessionOutcome::Cancelled);
                }
                _ = tokio::time::sleep(TICK) => {}
            }
        }

        self.notifier.notify(session.completion_message());
        Ok(SessionOutcome::Completed)
    }
}

/// Resolves once cancellation has been signalled.
///
/// If the sender side is gone, cancellation can no longer arrive and the
/// future stays pending so the timer keeps running.
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
