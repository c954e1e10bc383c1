//! Applies `PinConfig` to STM32 pins.
//!
//! Any configuration the HAL cannot honour is a setup error; the caller treats
//! it as fatal since there is no way to run without the pins.

use button_timers::{
    Direction, GpioButton, GpioLed, InterruptMode, PinConfig, Polarity, Pull,
};
use embassy_stm32::Peri;
use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull as HalPull, Speed};

/// Pin setup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum SetupError {
    /// The config asks for the other direction.
    WrongDirection { expected: Direction },
    /// Push-pull outputs take no pull resistor.
    PullOnOutput,
    /// Buttons are polled; edge interrupts are not wired up.
    UnsupportedInterrupt(InterruptMode),
}

fn check(config: &PinConfig, expected: Direction) -> Result<(), SetupError> {
    if config.direction != expected {
        return Err(SetupError::WrongDirection { expected });
    }
    if config.interrupt != InterruptMode::Disabled {
        return Err(SetupError::UnsupportedInterrupt(config.interrupt));
    }
    Ok(())
}

/// Configures an LED output, initially off.
pub fn setup_led(
    pin: Peri<'static, impl Pin>,
    config: PinConfig,
    polarity: Polarity,
) -> Result<GpioLed<Output<'static>>, SetupError> {
    check(&config, Direction::Output)?;
    if config.pull != Pull::None {
        return Err(SetupError::PullOnOutput);
    }

    let off = match polarity.physical(button_timers::Level::Low) {
        button_timers::Level::Low => Level::Low,
        button_timers::Level::High => Level::High,
    };
    let output = Output::new(pin, off, Speed::Low);
    Ok(GpioLed::new(output, polarity))
}

/// Configures a polled button input.
pub fn setup_button(
    pin: Peri<'static, impl Pin>,
    config: PinConfig,
    polarity: Polarity,
) -> Result<GpioButton<Input<'static>>, SetupError> {
    check(&config, Direction::Input)?;

    let pull = match config.pull {
        Pull::None => HalPull::None,
        Pull::Up => HalPull::Up,
        Pull::Down => HalPull::Down,
    };
    Ok(GpioButton::new(Input::new(pin, pull), polarity))
}
