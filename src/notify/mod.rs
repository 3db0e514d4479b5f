//! Best-effort notification layer.
//!
//! Surfaces a completion message outside the terminal's progress line.
//! The contract is deliberately one-way: `notify` always prints the
//! message to standard output, then attempts whatever platform delivery
//! channels were selected at startup, and never reports failure to the
//! caller. The countdown has already reached its terminal state by the
//! time any of this runs.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::types::Language;

pub mod channels;
pub mod error;

pub use channels::{DeliveryChannel, DesktopBanner, NotifySendBanner, VoiceAnnouncer};
pub use error::NotifyError;

// ============================================================================
// Notifier
// ============================================================================

/// Receives the completion message of a finished session.
///
/// Implementations must be infallible from the caller's perspective;
/// delivery problems stay inside the implementation.
pub trait Notifier {
    /// Surfaces `message` to the user.
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

// ============================================================================
// SystemNotifier
// ============================================================================

/// Composite notifier over the host platform's delivery channels.
///
/// Prints the message to standard output first (guaranteed feedback on
/// every platform), then tries each channel independently. A channel
/// failure is logged at debug level and the remaining channels are still
/// attempted.
pub struct SystemNotifier {
    channels: Vec<Box<dyn DeliveryChannel>>,
}

impl SystemNotifier {
    /// Creates a notifier over an explicit set of channels.
    pub fn with_channels(channels: Vec<Box<dyn DeliveryChannel>>) -> Self {
        Self { channels }
    }

    /// Creates a notifier with no delivery channels; only the stdout echo
    /// remains.
    pub fn noop() -> Self {
        Self::with_channels(Vec::new())
    }

    /// Selects delivery channels for the current host platform.
    ///
    /// Selection happens once at startup; unrecognized platforms get the
    /// no-op set.
    pub fn for_platform(language: Language) -> Self {
        let notifier = Self::for_os(std::env::consts::OS, language);
        debug!("notification channels: {:?}", notifier.channel_names());
        notifier
    }

    /// Selects delivery channels for a named platform.
    ///
    /// Kept separate from [`Self::for_platform`] so the selection table is
    /// testable on any host.
    pub fn for_os(os: &str, language: Language) -> Self {
        let channels: Vec<Box<dyn DeliveryChannel>> = match os {
            "macos" => vec![
                Box::new(DesktopBanner),
                Box::new(VoiceAnnouncer::new(language.voice())),
            ],
            "linux" => vec![Box::new(NotifySendBanner)],
            _ => Vec::new(),
        };
        Self::with_channels(channels)
    }

    /// Names of the selected channels, in attempt order.
    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|channel| channel.name()).collect()
    }
}

impl Notifier for SystemNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");

        for channel in &self.channels {
            if let Err(error) = channel.deliver(message) {
                debug!("notification via {} failed: {error}", channel.name());
            }
        }
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Test notifier that records every delivered message.
#[derive(Clone, Default)]
pub struct MockNotifier {
    delivered: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, in order.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }

    /// Number of deliveries so far.
    pub fn count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str) {
        self.delivered.lock().unwrap().push(message.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
