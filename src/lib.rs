#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Debouncer`**: Counts consecutive pressed samples and reports an activation at the threshold
//! - **`ButtonPoller`**: Samples a `Button` once per poll period and feeds the debouncer
//! - **`SoftwareTimer`**: One-shot or periodic deadline timer; rearming restarts the countdown
//! - **`App`**: Owns both LEDs and both timers and performs every LED side effect
//! - **`AppCommand`**: Commands that can be sent to the app from another task
//! - **`AppEvent`**: What an operation did, for the caller to log
//! - **`Led`** / **`Button`**: Traits to implement for your pins (or use `GpioLed` / `GpioButton`)
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`AppConfig`**: Poll period, debounce threshold, blink period and deactivation delay

pub mod time;
pub mod gpio;
pub mod config;
pub mod debounce;
pub mod timer;
pub mod command;
pub mod app;

#[cfg(test)]
mod mock;

pub use app::{App, AppError, AppEvent};
pub use command::{AppCommand, TimerId};
pub use config::{AppConfig, ConfigError};
pub use debounce::{ButtonPoller, Debouncer};
pub use gpio::{
    Button, Direction, GpioButton, GpioLed, InterruptMode, Led, Level, PinConfig, Polarity, Pull,
};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use timer::{SoftwareTimer, TimerError, TimerMode, TimerState};
