use button_timers::{AppCommand, AppConfig, ButtonPoller, TimerId};
use defmt::{error, info, warn};
use embassy_time::Timer;

use crate::types::{APP_COMMAND_CHANNEL, EmbassyDuration, UserButton};

#[embassy_executor::task]
pub async fn button_task(button: UserButton, config: AppConfig<EmbassyDuration>) {
    let mut poller = match ButtonPoller::new(button, &config) {
        Ok(poller) => poller,
        Err(e) => {
            error!("Button poller rejected configuration: {}", e);
            return;
        }
    };

    info!(
        "Button task started - sampling every {} ms, {} samples to activate",
        poller.period().0.as_millis(),
        poller.debouncer().threshold().get()
    );

    loop {
        if poller.poll() {
            // Fire and forget: the timer task performs the activation
            match APP_COMMAND_CHANNEL.try_send(AppCommand::Activate) {
                Ok(()) => info!("[{}] Timer start requested", TimerId::Deactivation.name()),
                Err(_) => warn!("Command channel full - activation dropped"),
            }
        }

        Timer::after(poller.period().0).await;
    }
}
