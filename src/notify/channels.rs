//! Platform notification delivery channels.
//!
//! Each channel wraps one helper command that may or may not be installed
//! on the host. Channels report failure through [`NotifyError`]; the
//! composite notifier decides what to do with it (it logs and moves on).

use std::process::Command;

use super::error::NotifyError;

/// Title shown on desktop banners.
const BANNER_TITLE: &str = "🍅";

// ============================================================================
// DeliveryChannel
// ============================================================================

/// One way of surfacing a completion message outside the terminal.
pub trait DeliveryChannel: Send + Sync {
    /// Name of the helper behind this channel, for logging.
    fn name(&self) -> &'static str;

    /// Attempts to deliver the message through this channel.
    fn deliver(&self, message: &str) -> Result<(), NotifyError>;
}

// ============================================================================
// DesktopBanner (macOS)
// ============================================================================

/// Desktop banner on macOS via `terminal-notifier`.
///
/// Waits for the helper to finish; it returns quickly once the banner is
/// posted.
pub struct DesktopBanner;

impl DesktopBanner {
    fn command(&self, message: &str) -> Command {
        let mut command = Command::new("terminal-notifier");
        command.args(["-title", BANNER_TITLE, "-message", message]);
        command
    }
}

impl DeliveryChannel for DesktopBanner {
    fn name(&self) -> &'static str {
        "terminal-notifier"
    }

    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        let status = self.command(message).status().map_err(|source| {
            NotifyError::Launch {
                helper: self.name(),
                source,
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::Failed {
                helper: self.name(),
                status,
            })
        }
    }
}

// ============================================================================
// VoiceAnnouncer (macOS)
// ============================================================================

/// Spoken announcement on macOS via `say`.
pub struct VoiceAnnouncer {
    voice: &'static str,
}

impl VoiceAnnouncer {
    /// Creates an announcer using the given speech-synthesis voice.
    pub fn new(voice: &'static str) -> Self {
        Self { voice }
    }

    fn command(&self, message: &str) -> Command {
        let mut command = Command::new("say");
        command.args(["-v", self.voice, message]);
        command
    }
}

impl DeliveryChannel for VoiceAnnouncer {
    fn name(&self) -> &'static str {
        "say"
    }

    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        let status = self.command(message).status().map_err(|source| {
            NotifyError::Launch {
                helper: self.name(),
                source,
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::Failed {
                helper: self.name(),
                status,
            })
        }
    }
}

// ============================================================================
// NotifySendBanner (Linux)
// ============================================================================

/// Desktop banner on Linux via `notify-send`.
///
/// Launched fire-and-forget: the child is not waited on, so a slow or
/// hung notification daemon cannot delay process exit.
pub struct NotifySendBanner;

impl NotifySendBanner {
    fn command(&self, message: &str) -> Command {
        let mut command = Command::new("notify-send");
        command.args([BANNER_TITLE, message]);
        command
    }
}

impl DeliveryChannel for NotifySendBanner {
    fn name(&self) -> &'static str {
        "notify-send"
    }

    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        self.command(message)
            .spawn()
            .map(|_child| ())
            .map_err(|source| NotifyError::Launch {
                helper: self.name(),
                source,
            })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    mod desktop_banner_tests {
        use super::*;

        #[test]
        fn test_command_shape() {
            let command = DesktopBanner.command("time for a break");
            assert_eq!(command.get_program(), "terminal-notifier");
            assert_eq!(
                args_of(&command),
                vec!["-title", "🍅", "-message", "time for a break"]
            );
        }

        #[test]
        fn test_name() {
            assert_eq!(DesktopBanner.name(), "terminal-notifier");
        }
    }

    mod voice_announcer_tests {
        use super::*;

        #[test]
        fn test_command_uses_configured_voice() {
            let announcer = VoiceAnnouncer::new("Ting-Ting");
            let command = announcer.command("恭喜你完成了一个番茄钟");
            assert_eq!(command.get_program(), "say");
            assert_eq!(
                args_of(&command),
                vec!["-v", "Ting-Ting", "恭喜你完成了一个番茄钟"]
            );
        }

        #[test]
        fn test_name() {
            assert_eq!(VoiceAnnouncer::new("Daniel").name(), "say");
        }
    }

    mod notify_send_tests {
        use super::*;

        #[test]
        fn test_command_shape() {
            let command = NotifySendBanner.command("It is time to work");
            assert_eq!(command.get_program(), "notify-send");
            assert_eq!(args_of(&command), vec!["🍅", "It is time to work"]);
        }

        #[test]
        fn test_name() {
            assert_eq!(NotifySendBanner.name(), "notify-send");
        }
    }
}
