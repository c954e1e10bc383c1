//! Application core: blink LED, status LED and their two timers.
//!
//! Provides [`App`], which owns both LEDs and both timers and performs every
//! side effect of the demo. The button poller lives outside `App` (see
//! [`ButtonPoller`](crate::ButtonPoller)) and only talks to it through
//! [`App::activate`] or [`AppCommand::Activate`].
//!
//! The deactivation timer behaves as a two-state machine:
//!
//! ```text
//!            activate()                 activate()
//!   Idle ──────────────► CountingDown ◄──────────┐
//!    ▲                        │   └──────────────┘
//!    └──── expiry: LED off ───┘
//! ```

use crate::command::{AppCommand, TimerId};
use crate::config::{AppConfig, ConfigError};
use crate::gpio::{Led, Level};
use crate::time::{TimeInstant, TimeSource};
use crate::timer::{SoftwareTimer, TimerError, TimerMode, TimerState};

/// Observable outcome of an [`App`] operation.
///
/// `App` does not log; callers log these events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent {
    /// The blink timer expired and the blink LED now shows this level.
    BlinkToggled(Level),
    /// The status LED was lit and the deactivation timer (re)armed.
    Activated,
    /// The deactivation timer expired and the status LED was turned off.
    Deactivated,
    /// A timer was started by command.
    TimerStarted(TimerId),
    /// A timer was stopped by command.
    TimerStopped(TimerId),
}

impl AppEvent {
    /// The timer this event belongs to.
    pub fn timer(&self) -> TimerId {
        match self {
            AppEvent::BlinkToggled(_) => TimerId::Blink,
            AppEvent::Activated | AppEvent::Deactivated => TimerId::Deactivation,
            AppEvent::TimerStarted(id) | AppEvent::TimerStopped(id) => *id,
        }
    }

    /// Log tag for this event.
    pub fn tag(&self) -> &'static str {
        self.timer().name()
    }
}

impl core::fmt::Display for AppEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AppEvent::BlinkToggled(Level::High) => write!(f, "blink LED on"),
            AppEvent::BlinkToggled(Level::Low) => write!(f, "blink LED off"),
            AppEvent::Activated => write!(f, "status LED on, deactivation timer armed"),
            AppEvent::Deactivated => write!(f, "status LED off"),
            AppEvent::TimerStarted(id) => write!(f, "{} timer started", id.name()),
            AppEvent::TimerStopped(id) => write!(f, "{} timer stopped", id.name()),
        }
    }
}

/// Errors that can occur during application operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A timer could not be armed.
    Timer(TimerError),
}

impl core::fmt::Display for AppError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "invalid configuration: {}", err),
            AppError::Timer(err) => write!(f, "timer error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<TimerError> for AppError {
    fn from(err: TimerError) -> Self {
        AppError::Timer(err)
    }
}

/// Owns the two LEDs and drives them from two software timers.
///
/// The blink LED is written only by blink timer expirations. The status LED
/// is written only by [`activate`](Self::activate) and deactivation timer
/// expirations.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `B` - Blink LED type
/// * `S` - Status LED type
pub struct App<'t, I: TimeInstant, T: TimeSource<I>, B: Led, S: Led> {
    time_source: &'t T,
    blink_led: B,
    status_led: S,
    blink_state: Level,
    blink_timer: SoftwareTimer<I>,
    deactivation_timer: SoftwareTimer<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, B: Led, S: Led> App<'t, I, T, B, S> {
    /// Creates the application with both LEDs off and both timers idle.
    ///
    /// # Returns
    /// * `Err(ConfigError)` - The configuration failed validation
    pub fn new(
        config: &AppConfig<I::Duration>,
        mut blink_led: B,
        mut status_led: S,
        time_source: &'t T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        blink_led.set_level(Level::Low);
        status_led.set_level(Level::Low);

        Ok(Self {
            time_source,
            blink_led,
            status_led,
            blink_state: Level::Low,
            blink_timer: SoftwareTimer::new(
                TimerId::Blink.name(),
                config.blink_period(),
                TimerMode::Periodic,
            ),
            deactivation_timer: SoftwareTimer::new(
                TimerId::Deactivation.name(),
                config.deactivation_delay(),
                TimerMode::OneShot,
            ),
        })
    }

    /// Starts the periodic blink timer. The first toggle happens one period
    /// from now.
    pub fn start(&mut self) -> Result<AppEvent, AppError> {
        self.start_timer(TimerId::Blink)
    }

    /// Handles a debounced button press.
    ///
    /// Lights the status LED and (re)arms the deactivation timer. A pending
    /// countdown is restarted from the full delay.
    pub fn activate(&mut self) -> Result<AppEvent, AppError> {
        let now = self.time_source.now();
        self.deactivation_timer.start(now)?;
        self.status_led.set_level(Level::High);
        Ok(AppEvent::Activated)
    }

    /// Dispatches a command to the matching operation.
    pub fn handle_command(&mut self, command: AppCommand) -> Result<AppEvent, AppError> {
        match command {
            AppCommand::Activate => self.activate(),
            AppCommand::StartTimer(id) => self.start_timer(id),
            AppCommand::StopTimer(id) => {
                self.timer_mut(id).stop();
                Ok(AppEvent::TimerStopped(id))
            }
        }
    }

    /// Runs the action of the earliest expired timer, if any.
    ///
    /// Handles one expiration per call; call until it returns `None` to drain
    /// everything that is due. When both timers are due, the earlier deadline
    /// goes first, and the blink timer wins ties.
    pub fn service(&mut self) -> Option<AppEvent> {
        let now = self.time_source.now();
        let blink_due = self.blink_timer.deadline().filter(|d| *d <= now);
        let deactivation_due = self.deactivation_timer.deadline().filter(|d| *d <= now);

        match (blink_due, deactivation_due) {
            (None, None) => None,
            (Some(blink), Some(deactivation)) if deactivation < blink => {
                Some(self.expire_deactivation(now))
            }
            (Some(_), _) => Some(self.expire_blink(now)),
            (None, Some(_)) => Some(self.expire_deactivation(now)),
        }
    }

    /// Returns the earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<I> {
        match (self.blink_timer.deadline(), self.deactivation_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Current level of the blink LED.
    pub fn blink_level(&self) -> Level {
        self.blink_led.level()
    }

    /// Current level of the status LED.
    pub fn status_level(&self) -> Level {
        self.status_led.level()
    }

    /// State of the deactivation countdown.
    pub fn deactivation_state(&self) -> TimerState {
        self.deactivation_timer.state()
    }

    pub fn timer(&self, id: TimerId) -> &SoftwareTimer<I> {
        match id {
            TimerId::Blink => &self.blink_timer,
            TimerId::Deactivation => &self.deactivation_timer,
        }
    }

    /// Releases the LEDs.
    pub fn into_leds(self) -> (B, S) {
        (self.blink_led, self.status_led)
    }

    fn timer_mut(&mut self, id: TimerId) -> &mut SoftwareTimer<I> {
        match id {
            TimerId::Blink => &mut self.blink_timer,
            TimerId::Deactivation => &mut self.deactivation_timer,
        }
    }

    fn start_timer(&mut self, id: TimerId) -> Result<AppEvent, AppError> {
        let now = self.time_source.now();
        self.timer_mut(id).start(now)?;
        Ok(AppEvent::TimerStarted(id))
    }

    fn expire_blink(&mut self, now: I) -> AppEvent {
        self.blink_timer.poll(now);
        self.blink_state = self.blink_state.toggled();
        self.blink_led.set_level(self.blink_state);
        AppEvent::BlinkToggled(self.blink_state)
    }

    fn expire_deactivation(&mut self, now: I) -> AppEvent {
        self.deactivation_timer.poll(now);
        self.status_led.set_level(Level::Low);
        AppEvent::Deactivated
    }
}
