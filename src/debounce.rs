//! Sample-count button debouncing.
//!
//! The poller samples the button at a fixed period. A press only counts once
//! the button has read "pressed" for `threshold` consecutive samples; any
//! "released" sample starts the count over. After an activation the count
//! resets, so a long press fires again every `threshold` samples it is held.

use core::num::NonZeroU8;

use crate::config::{AppConfig, ConfigError};
use crate::gpio::Button;
use crate::time::TimeDuration;

/// Consecutive-sample counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    count: u8,
    threshold: NonZeroU8,
}

impl Debouncer {
    /// Creates a debouncer with an empty count.
    pub fn new(threshold: NonZeroU8) -> Self {
        Self {
            count: 0,
            threshold,
        }
    }

    /// Feeds one sample. Returns `true` on the sample that completes a run of
    /// `threshold` pressed samples.
    pub fn sample(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.count = 0;
            return false;
        }

        self.count += 1;
        if self.count >= self.threshold.get() {
            self.count = 0;
            return true;
        }
        false
    }

    /// Number of consecutive pressed samples seen since the last reset.
    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn threshold(&self) -> NonZeroU8 {
        self.threshold
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// Button plus debouncer, polled once per period.
pub struct ButtonPoller<B: Button, D: TimeDuration> {
    button: B,
    debouncer: Debouncer,
    period: D,
}

impl<B: Button, D: TimeDuration> ButtonPoller<B, D> {
    /// Creates a poller using the configured threshold and period.
    pub fn new(button: B, config: &AppConfig<D>) -> Result<Self, ConfigError> {
        config.validate()?;
        let threshold =
            NonZeroU8::new(config.debounce_samples()).ok_or(ConfigError::ZeroDebounceSamples)?;

        Ok(Self {
            button,
            debouncer: Debouncer::new(threshold),
            period: config.poll_period(),
        })
    }

    /// Runs one polling cycle. Returns `true` when the press is accepted.
    ///
    /// The caller sleeps for [`period`](Self::period) between calls.
    pub fn poll(&mut self) -> bool {
        let pressed = self.button.is_pressed();
        self.debouncer.sample(pressed)
    }

    pub fn period(&self) -> D {
        self.period
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ScriptedButton, TestDuration};

    fn debouncer(threshold: u8) -> Debouncer {
        Debouncer::new(NonZeroU8::new(threshold).unwrap())
    }

    fn count_activations(debouncer: &mut Debouncer, samples: &[bool]) -> usize {
        samples.iter().filter(|&&s| debouncer.sample(s)).count()
    }

    #[test]
    fn ten_pressed_samples_activate_once() {
        let mut d = debouncer(10);
        for _ in 0..9 {
            assert!(!d.sample(true));
        }
        assert!(d.sample(true));
        assert_eq!(d.count(), 0);
    }

    #[test]
    fn short_press_does_not_activate() {
        let mut d = debouncer(10);
        for _ in 0..5 {
            assert!(!d.sample(true));
        }
        assert_eq!(d.count(), 5);

        assert!(!d.sample(false));
        assert_eq!(d.count(), 0);
    }

    #[test]
    fn release_resets_from_any_count() {
        let mut d = debouncer(10);
        for _ in 0..9 {
            d.sample(true);
        }
        assert_eq!(d.count(), 9);

        d.sample(false);
        assert_eq!(d.count(), 0);

        // A full new run is required afterwards
        for _ in 0..9 {
            assert!(!d.sample(true));
        }
        assert!(d.sample(true));
    }

    #[test]
    fn bouncing_contact_never_activates() {
        let mut d = debouncer(10);
        let mut samples = [false; 40];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = i % 3 != 0;
        }
        assert_eq!(count_activations(&mut d, &samples), 0);
    }

    #[test]
    fn held_button_fires_once_per_threshold_quantum() {
        let mut d = debouncer(10);
        assert_eq!(count_activations(&mut d, &[true; 25]), 2);
        assert_eq!(d.count(), 5);
    }

    #[test]
    fn count_never_reaches_threshold_between_samples() {
        let mut d = debouncer(10);
        for i in 0..200 {
            d.sample(i % 37 != 0);
            assert!(d.count() < 10);
        }
    }

    #[test]
    fn threshold_of_one_fires_on_every_pressed_sample() {
        let mut d = debouncer(1);
        assert_eq!(count_activations(&mut d, &[true, true, false, true]), 3);
    }

    #[test]
    fn reset_clears_the_count() {
        let mut d = debouncer(10);
        d.sample(true);
        d.sample(true);
        d.reset();
        assert_eq!(d.count(), 0);
    }

    #[test]
    fn poller_reads_button_once_per_cycle() {
        let mut script = [true; 12];
        script[10] = false;
        let button = ScriptedButton::new(&script);
        let config = AppConfig::<TestDuration>::default();
        let mut poller = ButtonPoller::new(button, &config).unwrap();

        let fired: heapless::Vec<bool, 12> = (0..12).map(|_| poller.poll()).collect();
        assert!(fired[9]);
        assert_eq!(fired.iter().filter(|&&f| f).count(), 1);
        assert_eq!(poller.debouncer().count(), 1);
        assert_eq!(poller.period(), TestDuration(10));
    }

    #[test]
    fn poller_rejects_invalid_config() {
        let button = ScriptedButton::new(&[]);
        let config = AppConfig::<TestDuration>::default().with_debounce_samples(0);
        assert!(matches!(
            ButtonPoller::new(button, &config),
            Err(ConfigError::ZeroDebounceSamples)
        ));
    }
}
