//! Pin-level collaborators: logic levels, pin configuration and the LED and
//! button abstractions.
//!
//! [`Led`] and [`Button`] are the only hardware surfaces the rest of the crate
//! touches. [`GpioLed`] and [`GpioButton`] adapt any `embedded-hal` digital
//! pin to them, so most HALs work without extra glue.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Logical level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

/// How a logical level maps onto the physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Logical `High` drives the pin high.
    #[default]
    ActiveHigh,
    /// Logical `High` drives the pin low.
    ActiveLow,
}

impl Polarity {
    /// Converts a logical level into the physical pin level.
    #[inline]
    pub fn physical(self, level: Level) -> Level {
        match self {
            Polarity::ActiveHigh => level,
            Polarity::ActiveLow => level.toggled(),
        }
    }
}

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Internal pull resistor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Edge interrupt selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    Disabled,
    RisingEdge,
    FallingEdge,
    AnyEdge,
}

/// Electrical configuration applied to a pin before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub direction: Direction,
    pub pull: Pull,
    pub interrupt: InterruptMode,
}

impl PinConfig {
    /// Push-pull LED output with no pull resistor.
    pub const fn led() -> Self {
        Self {
            direction: Direction::Output,
            pull: Pull::None,
            interrupt: InterruptMode::Disabled,
        }
    }

    /// Button input with pull-up; pressing shorts the pin to ground.
    ///
    /// The button is sampled by polling, so no edge interrupt is requested.
    pub const fn button() -> Self {
        Self {
            direction: Direction::Input,
            pull: Pull::Up,
            interrupt: InterruptMode::Disabled,
        }
    }
}

/// Trait for an on/off LED output.
///
/// Implementations handle hardware errors internally; writes cannot fail.
pub trait Led {
    /// Drives the LED to the given logical level (`High` = lit).
    fn set_level(&mut self, level: Level);

    /// Returns the last level written.
    fn level(&self) -> Level;
}

/// Trait for a momentary push button.
pub trait Button {
    /// Samples the button once. Returns `true` while it is held down.
    fn is_pressed(&mut self) -> bool;
}

/// [`Led`] backed by an `embedded-hal` output pin.
pub struct GpioLed<P: OutputPin> {
    pin: P,
    polarity: Polarity,
    level: Level,
}

impl<P: OutputPin> GpioLed<P> {
    /// Wraps `pin` and immediately drives the LED off.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut led = Self {
            pin,
            polarity,
            level: Level::Low,
        };
        led.set_level(Level::Low);
        led
    }

    /// Releases the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    fn set_level(&mut self, level: Level) {
        // Output writes are infallible on every supported HAL.
        let _ = self.pin.set_state(self.polarity.physical(level).into());
        self.level = level;
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// [`Button`] backed by an `embedded-hal` input pin.
///
/// A failed read counts as "released", so a faulty pin can never trigger an
/// activation.
pub struct GpioButton<P: InputPin> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        let reading = match self.polarity {
            Polarity::ActiveHigh => self.pin.is_high(),
            Polarity::ActiveLow => self.pin.is_low(),
        };
        reading.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    struct FakeOutput {
        high: bool,
        writes: u32,
    }

    impl ErrorType for FakeOutput {
        type Error = Infallible;
    }

    impl OutputPin for FakeOutput {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    struct FakeInput {
        high: bool,
    }

    impl ErrorType for FakeInput {
        type Error = Infallible;
    }

    impl InputPin for FakeInput {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[derive(Debug)]
    struct ReadFault;

    impl Error for ReadFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenInput;

    impl ErrorType for BrokenInput {
        type Error = ReadFault;
    }

    impl InputPin for BrokenInput {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ReadFault)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ReadFault)
        }
    }

    #[test]
    fn level_toggles_and_converts_from_bool() {
        assert_eq!(Level::Low.toggled(), Level::High);
        assert_eq!(Level::High.toggled(), Level::Low);
        assert_eq!(Level::from(true), Level::High);
        assert!(!Level::from(false).is_high());
    }

    #[test]
    fn gpio_led_starts_off() {
        let led = GpioLed::new(FakeOutput { high: true, writes: 0 }, Polarity::ActiveHigh);
        assert_eq!(led.level(), Level::Low);

        let pin = led.into_inner();
        assert!(!pin.high);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn active_low_led_inverts_the_pin() {
        let mut led = GpioLed::new(FakeOutput { high: false, writes: 0 }, Polarity::ActiveLow);
        // Off means pin high
        assert!(led.pin.high);

        led.set_level(Level::High);
        assert_eq!(led.level(), Level::High);
        assert!(!led.pin.high);
    }

    #[test]
    fn active_low_button_is_pressed_when_pin_low() {
        let mut button = GpioButton::new(FakeInput { high: true }, Polarity::ActiveLow);
        assert!(!button.is_pressed());

        button.pin.high = false;
        assert!(button.is_pressed());
    }

    #[test]
    fn active_high_button_is_pressed_when_pin_high() {
        let mut button = GpioButton::new(FakeInput { high: true }, Polarity::ActiveHigh);
        assert!(button.is_pressed());
    }

    #[test]
    fn failed_read_counts_as_released() {
        let mut button = GpioButton::new(BrokenInput, Polarity::ActiveLow);
        assert!(!button.is_pressed());
    }

    #[test]
    fn default_pin_configs() {
        let led = PinConfig::led();
        assert_eq!(led.direction, Direction::Output);
        assert_eq!(led.pull, Pull::None);

        let button = PinConfig::button();
        assert_eq!(button.direction, Direction::Input);
        assert_eq!(button.pull, Pull::Up);
        assert_eq!(button.interrupt, InterruptMode::Disabled);
    }
}
