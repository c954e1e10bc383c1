use button_timers::{App, AppConfig, AppEvent};
use defmt::{error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};

use crate::types::{
    APP_COMMAND_CHANNEL, BlinkLed, EmbassyDuration, EmbassyTimeSource, StatusLed,
};

/// How long to sleep when no timer is pending; commands still wake the task.
const IDLE_WAIT: Duration = Duration::from_secs(3600);

fn log_event(event: &AppEvent) {
    info!("[{}] {}", event.tag(), event);
}

// ============================================================================
// Timer service task: owns both LEDs and runs every timer expiration
// ============================================================================

#[embassy_executor::task]
pub async fn timer_task(
    blink_led: BlinkLed,
    status_led: StatusLed,
    config: AppConfig<EmbassyDuration>,
) {
    let time_source = EmbassyTimeSource::new();

    let mut app = match App::new(&config, blink_led, status_led, &time_source) {
        Ok(app) => app,
        Err(e) => {
            error!("Timer task rejected configuration: {}", e);
            return;
        }
    };

    match app.start() {
        Ok(event) => log_event(&event),
        Err(e) => error!("Failed to start blink timer: {}", e),
    }

    info!("Timer task started");

    loop {
        // Run everything that is due before going back to sleep
        while let Some(event) = app.service() {
            log_event(&event);
        }

        let wake_at = match app.next_deadline() {
            Some(deadline) => deadline.0,
            None => Instant::now() + IDLE_WAIT,
        };

        match select(APP_COMMAND_CHANNEL.receive(), Timer::at(wake_at)).await {
            Either::First(command) => match app.handle_command(command) {
                Ok(event) => log_event(&event),
                Err(e) => warn!("Command {} failed: {}", command, e),
            },
            Either::Second(_) => {}
        }
    }
}
