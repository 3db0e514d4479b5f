//! Session orchestration.
//!
//! Maps a parsed CLI invocation onto one or two countdown runs. Each
//! session gets its own prompt line and completion message; a cancellation
//! during the work half of the default plan suppresses the break half.

use std::io::{self, Write};

use anyhow::Result;
use tokio::sync::watch;

use crate::cli::{Cli, SessionPlan};
use crate::notify::{Notifier, SystemNotifier};
use crate::timer::{CountdownEngine, SessionOutcome};
use crate::types::{SessionKind, TimerConfig};

/// Runs the timer for a parsed CLI invocation.
///
/// Builds the platform notifier and a stdout-backed engine, then executes
/// the session plan. Cancellation is an ordinary `Ok` return; only
/// unexpected failures (configuration, I/O) surface as errors.
pub async fn run(cli: &Cli, config: &TimerConfig, cancel: watch::Receiver<bool>) -> Result<()> {
    config.validate().map_err(anyhow::Error::msg)?;

    let notifier = SystemNotifier::for_platform(config.language);
    let mut engine = CountdownEngine::new(notifier, io::stdout(), cancel, config.language);

    run_plan(cli.plan(), config, &mut engine).await
}

/// Executes a session plan on an already-built engine.
///
/// Split out from [`run`] so tests can inject a mock notifier and an
/// in-memory output stream.
pub async fn run_plan<N, W>(
    plan: SessionPlan,
    config: &TimerConfig,
    engine: &mut CountdownEngine<N, W>,
) -> Result<()>
where
    N: Notifier,
    W: Write,
{
    match plan {
        SessionPlan::WorkThenBreak => {
            let outcome =
                run_session(engine, SessionKind::Work, config.work_minutes, config).await?;
            if outcome == SessionOutcome::Cancelled {
                return Ok(());
            }
            run_session(engine, SessionKind::Break, config.break_minutes, config).await?;
        }
        SessionPlan::WorkOnly(minutes) => {
            run_session(engine, SessionKind::Work, minutes, config).await?;
        }
        SessionPlan::BreakOnly(minutes) => {
            run_session(engine, SessionKind::Break, minutes, config).await?;
        }
    }

    Ok(())
}

/// Prompts for and runs a single session.
async fn run_session<N, W>(
    engine: &mut CountdownEngine<N, W>,
    kind: SessionKind,
    minutes: u32,
    config: &TimerConfig,
) -> Result<SessionOutcome>
where
    N: Notifier,
    W: Write,
{
    let language = config.language;
    engine.announce(&language.prompt(kind, minutes))?;
    engine.run(minutes, language.completion(kind)).await
}
