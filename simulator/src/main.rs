//! Plant Monitor Simulator for Windows/Desktop.
//!
//! Runs the shared monitor logic against simulated sensors, draws the 16x2
//! LCD with the embedded-graphics simulator and prints the console lines to
//! stdout once per tick.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod lcd;
mod sensors;
mod timing;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use plant_monitor_common::{Monitor, PARAM_COUNT, ParamId, ParamTable};

use crate::lcd::{SCREEN_SIZE, draw_lcd, draw_status};
use crate::sensors::SimulatedSensors;
use crate::timing::{BEEP_FLASH, FRAME_TIME, INIT_DELAY, SIM_SECONDS_PER_TICK, TICK_INTERVAL};

fn main() {
    let mut monitor = match Monitor::from_config() {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("Invalid parameter table: {e}");
            return;
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(SCREEN_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Plant Monitor Sim", &output_settings);
    let mut sensors = SimulatedSensors::new();

    println!("Plant monitor simulator");
    println!("Keys: 1-4 select, Up/Down nudge, F sensor fault, R reset");

    draw_lcd(&mut display, monitor.greet());
    draw_status(&mut display, false, false, "");
    window.update(&display);

    let greeting_start = Instant::now();
    while greeting_start.elapsed() < INIT_DELAY {
        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return;
        }
        window.update(&display);
        thread::sleep(FRAME_TIME);
    }

    let mut next_tick = Instant::now();
    let mut beep_until: Option<Instant> = None;
    let mut tick_count = 0u32;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(msg) = handle_key(&mut sensors, keycode) {
                        println!("[{}] {msg}", param_name(monitor.table(), sensors.selected()));
                    }
                }
                _ => {}
            }
        }

        if frame_start >= next_tick {
            next_tick += TICK_INTERVAL;
            sensors.advance(SIM_SECONDS_PER_TICK);

            let report = monitor.tick(&mut sensors);
            tick_count = tick_count.wrapping_add(1);

            println!("--- tick {tick_count} ---");
            for line in monitor.console_lines() {
                println!("{line}");
            }
            if report.actions.beep {
                println!("BEEP");
                beep_until = Some(frame_start + BEEP_FLASH);
            }

            draw_lcd(&mut display, monitor.frame());
        }

        let buzzer_on = beep_until.is_some_and(|until| frame_start < until);
        let mut selected: String<32> = String::new();
        let _ = write!(selected, "> {}", param_name(monitor.table(), sensors.selected()));
        draw_status(&mut display, monitor.light_on(), buzzer_on, &selected);

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Apply a key press to the simulated sensors. Returns what changed.
fn handle_key(
    sensors: &mut SimulatedSensors,
    keycode: Keycode,
) -> Option<&'static str> {
    let select = |sensors: &mut SimulatedSensors, id| {
        sensors.select(id);
        Some("selected")
    };
    match keycode {
        Keycode::Num1 => select(sensors, ParamId::SoilHumidity),
        Keycode::Num2 => select(sensors, ParamId::AmbientBrightness),
        Keycode::Num3 => select(sensors, ParamId::AirHumidity),
        Keycode::Num4 => select(sensors, ParamId::AirTemperature),
        Keycode::Up => {
            sensors.nudge(1.0);
            Some("nudged up")
        }
        Keycode::Down => {
            sensors.nudge(-1.0);
            Some("nudged down")
        }
        Keycode::F => Some(if sensors.toggle_fault() { "sensor unplugged" } else { "sensor plugged in" }),
        Keycode::R => {
            sensors.reset();
            Some("all nudges and faults cleared")
        }
        _ => None,
    }
}

fn param_name(
    table: &ParamTable<PARAM_COUNT>,
    id: ParamId,
) -> &'static str {
    table
        .index_of(id)
        .and_then(|i| table.get(i))
        .map_or("?", |def| def.name)
}
