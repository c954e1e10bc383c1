use button_timers::{AppCommand, GpioButton, GpioLed};
use embassy_stm32::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;

// Re-export the time types from the library
pub use stm32f0_embassy::time_wrapper::{EmbassyDuration, EmbassyTimeSource};

/// Onboard LED toggled by the blink timer
pub type BlinkLed = GpioLed<Output<'static>>;

/// External LED lit by a button press and cleared by the deactivation timer
pub type StatusLed = GpioLed<Output<'static>>;

/// User button, polled by button_task
pub type UserButton = GpioButton<Input<'static>>;

/// Channel for sending commands from button_task to timer_task
pub static APP_COMMAND_CHANNEL: Channel<ThreadModeRawMutex, AppCommand, 4> = Channel::new();
