//! Command-based control for the application core.

/// Identifies one of the two application timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerId {
    /// Periodic timer toggling the blink LED.
    Blink,
    /// One-shot timer turning the status LED off.
    Deactivation,
}

impl TimerId {
    /// Timer name, also used as the log tag for its events.
    pub fn name(self) -> &'static str {
        match self {
            TimerId::Blink => "blink",
            TimerId::Deactivation => "deactivation",
        }
    }
}

/// Commands accepted by [`App::handle_command`](crate::App::handle_command).
///
/// Sent without acknowledgement; the sender does not wait for the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppCommand {
    /// Debounced press: light the status LED and (re)arm the deactivation timer.
    Activate,
    /// Start or restart a timer.
    StartTimer(TimerId),
    /// Cancel a pending timer expiration.
    StopTimer(TimerId),
}
