#![no_std]
#![no_main]

use button_timers::{AppConfig, PinConfig, Polarity};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_stm32::time::Hertz;
use stm32f0_embassy::hardware::{setup_button, setup_led};
use {defmt_rtt as _, panic_probe as _};

mod button_task;
mod timer_task;
mod types;

use button_task::button_task;
use timer_task::timer_task;
use types::EmbassyDuration;

/// Configure system clock with HSE and PLL
fn configure_clock() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV2,
            mul: PllMul::MUL12,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV1;
    }
    config
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("=== Button Timers Example ===");
    info!("Starting initialization...");

    let p = embassy_stm32::init(configure_clock());
    info!("Clock configured - system running at 48 MHz");

    let config = AppConfig::<EmbassyDuration>::default();
    unwrap!(config.validate());

    // Any pin that cannot be configured is fatal
    let blink_led = unwrap!(setup_led(p.PA5, PinConfig::led(), Polarity::ActiveHigh));
    info!("Blink LED configured on PA5");
    let status_led = unwrap!(setup_led(p.PA6, PinConfig::led(), Polarity::ActiveHigh));
    info!("Status LED configured on PA6");
    // The Nucleo user button pulls PC13 low when pressed
    let button = unwrap!(setup_button(p.PC13, PinConfig::button(), Polarity::ActiveLow));
    info!("User button configured on PC13");

    spawner.spawn(button_task(button, config)).unwrap();
    spawner
        .spawn(timer_task(blink_led, status_led, config))
        .unwrap();

    info!("=== System Ready ===");
    info!("Blink LED toggles every {} ms", config.blink_period().0.as_millis());
    info!(
        "Hold the button {} ms to light the status LED for {} ms",
        config.debounce_window().0.as_millis(),
        config.deactivation_delay().0.as_millis()
    );

    // Initialization is done; the spawned tasks keep running
}
