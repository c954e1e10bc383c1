//! Application timing configuration.

use crate::time::TimeDuration;

/// Default button sampling period in milliseconds.
pub const DEFAULT_POLL_PERIOD_MS: u64 = 10;

/// Default number of consecutive pressed samples required for an activation.
pub const DEFAULT_DEBOUNCE_SAMPLES: u8 = 10;

/// Default blink period in milliseconds.
pub const DEFAULT_BLINK_PERIOD_MS: u64 = 1000;

/// Default delay between the last activation and the status LED turning off.
pub const DEFAULT_DEACTIVATION_DELAY_MS: u64 = 5000;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A period or delay is zero.
    ZeroDuration {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The debounce threshold is zero samples.
    ZeroDebounceSamples,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDuration { field } => {
                write!(f, "{} must be greater than zero", field)
            }
            ConfigError::ZeroDebounceSamples => {
                write!(f, "debounce threshold must be at least one sample")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Timing parameters for the poller and both timers.
///
/// `Default` yields the reference timings: 10 ms polling, 10 samples
/// (a 100 ms debounce window), a 1 s blink period and a 5 s deactivation delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig<D> {
    poll_period: D,
    debounce_samples: u8,
    blink_period: D,
    deactivation_delay: D,
}

impl<D: TimeDuration> Default for AppConfig<D> {
    fn default() -> Self {
        Self {
            poll_period: D::from_millis(DEFAULT_POLL_PERIOD_MS),
            debounce_samples: DEFAULT_DEBOUNCE_SAMPLES,
            blink_period: D::from_millis(DEFAULT_BLINK_PERIOD_MS),
            deactivation_delay: D::from_millis(DEFAULT_DEACTIVATION_DELAY_MS),
        }
    }
}

impl<D: TimeDuration> AppConfig<D> {
    pub fn with_poll_period(mut self, period: D) -> Self {
        self.poll_period = period;
        self
    }

    pub fn with_debounce_samples(mut self, samples: u8) -> Self {
        self.debounce_samples = samples;
        self
    }

    pub fn with_blink_period(mut self, period: D) -> Self {
        self.blink_period = period;
        self
    }

    pub fn with_deactivation_delay(mut self, delay: D) -> Self {
        self.deactivation_delay = delay;
        self
    }

    /// Checks that every period is non-zero and the threshold is at least one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_period == D::ZERO {
            return Err(ConfigError::ZeroDuration {
                field: "poll_period",
            });
        }
        if self.debounce_samples == 0 {
            return Err(ConfigError::ZeroDebounceSamples);
        }
        if self.blink_period == D::ZERO {
            return Err(ConfigError::ZeroDuration {
                field: "blink_period",
            });
        }
        if self.deactivation_delay == D::ZERO {
            return Err(ConfigError::ZeroDuration {
                field: "deactivation_delay",
            });
        }
        Ok(())
    }

    pub fn poll_period(&self) -> D {
        self.poll_period
    }

    pub fn debounce_samples(&self) -> u8 {
        self.debounce_samples
    }

    pub fn blink_period(&self) -> D {
        self.blink_period
    }

    pub fn deactivation_delay(&self) -> D {
        self.deactivation_delay
    }

    /// Minimum sustained press that produces an activation.
    pub fn debounce_window(&self) -> D {
        D::from_millis(
            self.poll_period
                .as_millis()
                .saturating_mul(self.debounce_samples as u64),
        )
    }
}
