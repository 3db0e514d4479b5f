//! tomato - a command-line Pomodoro timer.
//!
//! Counts down a work interval, then a break interval, with a live
//! progress bar and a best-effort desktop/voice notification when an
//! interval ends. Ctrl+C cancels cleanly at any point.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tokio::sync::watch;

use tomato::app;
use tomato::cli::{Cli, Display};
use tomato::types::TimerConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = parse_or_exit();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = TimerConfig::default();

    // A Ctrl+C flips the cancellation flag; the engine picks it up within
    // the current tick.
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(true);
        }
    });

    if let Err(e) = app::run(&cli, &config, cancel_rx).await {
        Display::show_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Parses the command line, applying the exit-code policy.
///
/// Help, version and unrecognized arguments all land on the usage path
/// and exit 0; invalid values (zero, negative or non-integer minutes)
/// exit 1.
fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                std::process::exit(0);
            }
            ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand => {
                let _ = Cli::command().print_help();
                std::process::exit(0);
            }
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr; stdout belongs to the progress line.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
