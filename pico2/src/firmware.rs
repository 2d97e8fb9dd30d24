//! Start-up and the monitoring loop.

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Flex, Level, Output, Pull};
use embassy_time::{Duration, Instant, Ticker, Timer};
use plant_monitor_common::{
    Evaluation,
    INIT_DELAY_MS,
    LcdFrame,
    Monitor,
    PARAM_COUNT,
    ParamTable,
    SensorFault,
    UPDATE_INTERVAL_MS,
};
use plant_monitor_pico2::config::{
    BUZZER_GPIO,
    DHT22_GPIO,
    LCD_DATA_GPIOS,
    LCD_E_GPIO,
    LCD_RS_GPIO,
    LIGHT_ADC_GPIO,
    LIGHT_RELAY_GPIO,
    SOIL_ADC_GPIO,
};
use plant_monitor_pico2::{Dht22Sampler, SensorSnapshot};

use crate::drivers::{Dht22, Hd44780};
use crate::tasks::{BEEP_SIGNAL, buzzer_task};

pub async fn run(spawner: Spawner) -> ! {
    info!("Plant monitor starting...");

    let p = embassy_rp::init(Default::default());

    // The pin map in `config::pins` documents this wiring
    let mut lcd = Hd44780::new(
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        [
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_2, Level::Low),
        ],
    );
    lcd.init().await;
    info!("LCD initialized (RS={}, E={}, D4-D7={})", LCD_RS_GPIO, LCD_E_GPIO, LCD_DATA_GPIOS);

    let mut adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let mut soil = Channel::new_pin(p.PIN_26, Pull::None);
    let mut light = Channel::new_pin(p.PIN_27, Pull::None);
    let mut dht = Dht22::new(Flex::new(p.PIN_7));
    info!(
        "Sensors initialized (soil={}, light={}, dht22={})",
        SOIL_ADC_GPIO, LIGHT_ADC_GPIO, DHT22_GPIO
    );

    let buzzer = Output::new(p.PIN_6, Level::Low);
    let mut relay = Output::new(p.PIN_13, Level::Low);
    info!("Outputs initialized (buzzer={}, relay={})", BUZZER_GPIO, LIGHT_RELAY_GPIO);

    spawner.spawn(buzzer_task(buzzer)).unwrap();
    info!("Buzzer task spawned");

    let mut monitor = match Monitor::from_config() {
        Ok(monitor) => monitor,
        Err(e) => defmt::panic!("Invalid parameter table: {}", e),
    };

    lcd.write_frame(monitor.greet());
    Timer::after_millis(INIT_DELAY_MS).await;

    let mut sampler = Dht22Sampler::new();
    let mut pushed: Option<LcdFrame> = None;
    let mut previous: Option<Evaluation<PARAM_COUNT>> = None;
    let mut ticker = Ticker::every(Duration::from_millis(UPDATE_INTERVAL_MS));

    info!("Main loop starting");

    loop {
        let tick_start = Instant::now();

        let mut snapshot = SensorSnapshot {
            soil_adc: adc.blocking_read(&mut soil).map_err(|_| SensorFault::Timeout),
            light_adc: adc.blocking_read(&mut light).map_err(|_| SensorFault::Timeout),
            climate: sampler.sample(tick_start.as_millis(), || dht.read()),
        };
        let report = monitor.tick(&mut snapshot);

        relay.set_level(Level::from(report.actions.light_on));
        if report.actions.beep {
            BEEP_SIGNAL.signal(());
        }

        // Only touch the LCD when the picture changed
        if pushed.as_ref() != Some(monitor.frame()) {
            lcd.write_frame(monitor.frame());
            pushed = Some(monitor.frame().clone());
        }

        for line in monitor.console_lines() {
            info!("{}", line.as_str());
        }
        log_transitions(monitor.table(), previous.as_ref(), &report.evaluation);
        previous = Some(report.evaluation);

        debug!(
            "Tick: {} us, screen={}, light={}",
            tick_start.elapsed().as_micros(),
            report.screen,
            report.actions.light_on
        );

        ticker.next().await;
    }
}

/// Log parameters whose status changed since the previous tick.
fn log_transitions(
    table: &ParamTable<PARAM_COUNT>,
    previous: Option<&Evaluation<PARAM_COUNT>>,
    current: &Evaluation<PARAM_COUNT>,
) {
    for (i, def) in table.iter().enumerate() {
        let Some(status) = current.status(i) else { continue };
        match previous.and_then(|p| p.status(i)) {
            Some(before) if before == status => continue,
            None if status.is_ok() => continue,
            _ => {}
        }
        if status.is_ok() {
            info!("{}: back in range", def.name);
        } else {
            warn!("{}: {}", def.name, status);
        }
    }
}
