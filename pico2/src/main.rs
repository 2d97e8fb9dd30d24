//! Plant Monitor Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads a soil probe, a photoresistor and a DHT22 once per second, shows
//! values or warnings on a 16x2 HD44780 LCD, beeps when something leaves its
//! range and switches a grow light on when it is too dark.
//!
//! # Architecture
//!
//! - Main task: samples the sensors, runs the monitor tick, drives the relay,
//!   pushes the LCD frame when it changed and logs the values over RTT
//! - Buzzer task: waits for a beep signal and pulses the buzzer
//!
//! Host builds compile to an empty binary so the workspace builds and tests
//! without an ARM toolchain; the testable logic lives in the library.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod drivers;
#[cfg(target_arch = "arm")]
mod firmware;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"plant-monitor"),
    embassy_rp::binary_info::rp_program_description!(c"Plant monitor: soil, light, air humidity and temperature"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) { firmware::run(spawner).await }

#[cfg(not(target_arch = "arm"))]
fn main() {}
