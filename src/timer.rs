//! Software timers with explicit deadlines.
//!
//! Provides [`SoftwareTimer`], a deadline-tracking timer driven by whoever
//! owns it: the owner asks [`SoftwareTimer::poll`] whether the timer has
//! expired at the current time and runs the expiration action itself.
//!
//! Starting a timer that is already counting down restarts the full period
//! from the new start time. Periodic timers reload from their previous
//! deadline rather than from the time they were serviced, so a late service
//! loop does not accumulate drift and sees every missed expiration.

use crate::time::{TimeDuration, TimeInstant};

/// Whether a timer stops or reloads after expiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerMode {
    /// Fires once, then returns to idle.
    OneShot,
    /// Fires every period until stopped.
    Periodic,
}

/// Run state of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Not started, stopped, or a one-shot that already fired.
    Idle,
    /// A deadline is pending.
    CountingDown,
}

/// Errors that can occur during timer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// The deadline does not fit in the instant type.
    DeadlineOverflow {
        /// Name of the timer that was being armed.
        timer: &'static str,
    },
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimerError::DeadlineOverflow { timer } => {
                write!(f, "deadline of timer '{}' overflows the clock", timer)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}

/// A named one-shot or periodic timer.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone, Copy)]
pub struct SoftwareTimer<I: TimeInstant> {
    name: &'static str,
    period: I::Duration,
    mode: TimerMode,
    deadline: Option<I>,
}

impl<I: TimeInstant> SoftwareTimer<I> {
    /// Creates an idle timer. Nothing happens until [`start`](Self::start).
    pub fn new(name: &'static str, period: I::Duration, mode: TimerMode) -> Self {
        Self {
            name,
            period,
            mode,
            deadline: None,
        }
    }

    /// Arms the timer to expire one period after `now`.
    ///
    /// Rearming a timer that is counting down discards the pending deadline
    /// and restarts the full period.
    ///
    /// # Returns
    /// * `Ok(deadline)` - The new expiration instant
    /// * `Err` - `now + period` is not representable
    pub fn start(&mut self, now: I) -> Result<I, TimerError> {
        let deadline = now
            .checked_add(self.period)
            .ok_or(TimerError::DeadlineOverflow { timer: self.name })?;
        self.deadline = Some(deadline);
        Ok(deadline)
    }

    /// Cancels any pending expiration.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Checks for an expiration at `now`.
    ///
    /// Returns `true` at most once per expired deadline. A one-shot timer goes
    /// idle; a periodic timer reloads one period after the deadline that just
    /// passed, so call this in a loop to catch up on missed periods.
    pub fn poll(&mut self, now: I) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = match self.mode {
                    TimerMode::OneShot => None,
                    // A periodic deadline that overflows the clock stops the timer
                    TimerMode::Periodic => deadline.checked_add(self.period),
                };
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> TimerState {
        if self.deadline.is_some() {
            TimerState::CountingDown
        } else {
            TimerState::Idle
        }
    }

    /// Returns true while a deadline is pending.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending expiration instant, if any.
    pub fn deadline(&self) -> Option<I> {
        self.deadline
    }

    /// Returns the time left until expiration, zero if already due.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.deadline.map(|deadline| {
            if deadline > now {
                deadline.duration_since(now)
            } else {
                I::Duration::ZERO
            }
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period(&self) -> I::Duration {
        self.period
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }
}
