//! Bit-banged DHT22 driver.
//!
//! # Transaction
//!
//! ```text
//! host  ‾‾‾‾\________/‾‾‾‾ (release, pull-up)
//! dht22                  \__80µs__/‾‾80µs‾‾\_50µs_/‾‾26µs (0) or 70µs (1)‾‾\_ ... x40
//! ```
//!
//! Timing is measured against `embassy_time::Instant` (1 MHz tick on the
//! RP2350) with interrupts masked, so the read blocks for about 5 ms.

use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, Instant, block_for};
use plant_monitor_common::SensorFault;
use plant_monitor_pico2::config::{DHT22_BIT_TIMEOUT_US, DHT22_START_LOW_US};
use plant_monitor_pico2::dht22::{Dht22Result, FRAME_BITS, decode_frame, frame_from_pulses};

pub struct Dht22<'d> {
    pin: Flex<'d>,
}

impl<'d> Dht22<'d> {
    /// Take the data pin and leave it released (input with pull-up).
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }

    /// Run one transaction. Missing edges give [`SensorFault::Timeout`].
    pub fn read(&mut self) -> Dht22Result {
        // Start signal
        self.pin.set_low();
        self.pin.set_as_output();
        block_for(Duration::from_micros(DHT22_START_LOW_US));
        self.pin.set_as_input();

        let pulses = cortex_m::interrupt::free(|_| self.read_pulses())?;
        decode_frame(frame_from_pulses(&pulses))
    }

    fn read_pulses(&mut self) -> Result<[u32; FRAME_BITS], SensorFault> {
        // Response: pull low, 80 µs low, 80 µs high, then the first bit's low
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut pulses = [0u32; FRAME_BITS];
        for pulse in &mut pulses {
            self.wait_for(true)?;
            *pulse = self.wait_for(false)?;
        }
        Ok(pulses)
    }

    /// Wait until the line reads `high`. Returns the elapsed µs.
    fn wait_for(
        &self,
        high: bool,
    ) -> Result<u32, SensorFault> {
        let start = Instant::now();
        while self.pin.is_high() != high {
            if start.elapsed().as_micros() > DHT22_BIT_TIMEOUT_US {
                return Err(SensorFault::Timeout);
            }
        }
        Ok(start.elapsed().as_micros() as u32)
    }
}
