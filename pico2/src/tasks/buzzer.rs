//! Alert buzzer task.
//!
//! The main loop signals [`BEEP_SIGNAL`] and moves on; this task drives the
//! pin high for [`ALERT_PULSE_MS`]. Signals raised while a pulse is running
//! collapse into one follow-up pulse.

use defmt::{debug, info};
use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use plant_monitor_pico2::config::ALERT_PULSE_MS;

/// Request one beep.
pub static BEEP_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::task]
pub async fn buzzer_task(mut buzzer: Output<'static>) {
    info!("Buzzer task started");

    loop {
        BEEP_SIGNAL.wait().await;
        debug!("Beep");

        buzzer.set_high();
        Timer::after_millis(ALERT_PULSE_MS).await;
        buzzer.set_low();
    }
}
