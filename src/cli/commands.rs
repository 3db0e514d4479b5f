//! Command definitions for the tomato CLI.
//!
//! Uses clap derive macro for argument parsing. The surface is flag-based
//! rather than subcommand-based: `-t`/`-b` pick a single session, no flags
//! runs a work session followed by a break.

use clap::Parser;

// ============================================================================
// CLI Structure
// ============================================================================

/// Tomato - a command-line Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "tomato",
    version,
    about = "🍅 Tomato Clock - a command-line Pomodoro timer",
    long_about = "A Pomodoro timer for the terminal: counts down a work interval,\n\
                  then a break, with a live progress bar and a desktop/voice\n\
                  notification when an interval ends.",
    after_help = "Examples:\n  \
                  tomato        start a 25 minute tomato clock + 5 minute break\n  \
                  tomato -t     start a 25 minute tomato clock\n  \
                  tomato -t 50  start a 50 minute tomato clock\n  \
                  tomato -b     take a 5 minute break"
)]
pub struct Cli {
    /// Start one work session, MINUTES long (25 if omitted)
    #[arg(
        short = 't',
        long = "tomato",
        value_name = "MINUTES",
        num_args = 0..=1,
        default_missing_value = "25",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tomato: Option<u32>,

    /// Take one break, MINUTES long (5 if omitted)
    #[arg(
        short = 'b',
        long = "break",
        value_name = "MINUTES",
        num_args = 0..=1,
        default_missing_value = "5",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub break_minutes: Option<u32>,

    /// Generate a shell completion script
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<clap_complete::Shell>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// SessionPlan
// ============================================================================

/// What the parsed arguments ask the timer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPlan {
    /// No flags: a work session immediately followed by a break session.
    WorkThenBreak,
    /// `-t`: a single work session of the given length.
    WorkOnly(u32),
    /// `-b`: a single break session of the given length.
    BreakOnly(u32),
}

impl Cli {
    /// Maps the parsed flags onto a session plan.
    ///
    /// When both `-t` and `-b` are supplied, `-t` wins.
    pub fn plan(&self) -> SessionPlan {
        if let Some(minutes) = self.tomato {
            SessionPlan::WorkOnly(minutes)
        } else if let Some(minutes) = self.break_minutes {
            SessionPlan::BreakOnly(minutes)
        } else {
            SessionPlan::WorkThenBreak
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Parse Tests
    // ------------------------------------------------------------------------

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["tomato"]);
            assert!(cli.tomato.is_none());
            assert!(cli.break_minutes.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_tomato_flag_without_value() {
            let cli = Cli::parse_from(["tomato", "-t"]);
            assert_eq!(cli.tomato, Some(25));
        }

        #[test]
        fn test_parse_tomato_flag_with_value() {
            let cli = Cli::parse_from(["tomato", "-t", "50"]);
            assert_eq!(cli.tomato, Some(50));
        }

        #[test]
        fn test_parse_tomato_long_flag() {
            let cli = Cli::parse_from(["tomato", "--tomato", "30"]);
            assert_eq!(cli.tomato, Some(30));
        }

        #[test]
        fn test_parse_break_flag_without_value() {
            let cli = Cli::parse_from(["tomato", "-b"]);
            assert_eq!(cli.break_minutes, Some(5));
        }

        #[test]
        fn test_parse_break_flag_with_value() {
            let cli = Cli::parse_from(["tomato", "-b", "10"]);
            assert_eq!(cli.break_minutes, Some(10));
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["tomato", "--verbose"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["tomato", "--completions", "zsh"]);
            assert_eq!(cli.completions, Some(clap_complete::Shell::Zsh));
        }

        #[test]
        fn test_parse_tomato_flag_followed_by_another_flag() {
            let cli = Cli::parse_from(["tomato", "-t", "-v"]);
            assert_eq!(cli.tomato, Some(25));
            assert!(cli.verbose);
        }
    }

    // ------------------------------------------------------------------------
    // Plan Tests
    // ------------------------------------------------------------------------

    mod plan_tests {
        use super::*;

        #[test]
        fn test_no_flags_plans_work_then_break() {
            let cli = Cli::parse_from(["tomato"]);
            assert_eq!(cli.plan(), SessionPlan::WorkThenBreak);
        }

        #[test]
        fn test_tomato_flag_plans_single_work_session() {
            let cli = Cli::parse_from(["tomato", "-t", "40"]);
            assert_eq!(cli.plan(), SessionPlan::WorkOnly(40));
        }

        #[test]
        fn test_break_flag_plans_single_break_session() {
            let cli = Cli::parse_from(["tomato", "-b"]);
            assert_eq!(cli.plan(), SessionPlan::BreakOnly(5));
        }

        #[test]
        fn test_tomato_wins_over_break() {
            let cli = Cli::parse_from(["tomato", "-t", "30", "-b", "10"]);
            assert_eq!(cli.plan(), SessionPlan::WorkOnly(30));
        }
    }

    // ------------------------------------------------------------------------
    // Error Case Tests (using try_parse)
    // ------------------------------------------------------------------------

    mod error_tests {
        use super::*;

        #[test]
        fn test_zero_minutes_is_rejected() {
            assert!(Cli::try_parse_from(["tomato", "-t", "0"]).is_err());
            assert!(Cli::try_parse_from(["tomato", "-b", "0"]).is_err());
        }

        #[test]
        fn test_negative_minutes_is_rejected() {
            assert!(Cli::try_parse_from(["tomato", "-t", "-5"]).is_err());
        }

        #[test]
        fn test_non_integer_minutes_is_rejected() {
            assert!(Cli::try_parse_from(["tomato", "-t", "abc"]).is_err());
        }

        #[test]
        fn test_unknown_flag_is_rejected_by_parser() {
            let error = Cli::try_parse_from(["tomato", "--frobnicate"]).unwrap_err();
            assert_eq!(error.kind(), clap::error::ErrorKind::UnknownArgument);
        }

        #[test]
        fn test_stray_positional_is_rejected_by_parser() {
            let error = Cli::try_parse_from(["tomato", "25"]).unwrap_err();
            assert_eq!(error.kind(), clap::error::ErrorKind::UnknownArgument);
        }

        #[test]
        fn test_invalid_value_has_distinct_error_kind() {
            let error = Cli::try_parse_from(["tomato", "-t", "abc"]).unwrap_err();
            assert_ne!(error.kind(), clap::error::ErrorKind::UnknownArgument);
        }
    }
}
