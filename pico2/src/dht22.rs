//! DHT22 frame decoding and sampling policy.
//!
//! The bit-banged line protocol lives in the firmware driver; this module
//! holds everything that does not need the hardware.
//!
//! # Frame Layout
//!
//! | Byte | Content |
//! |------|---------|
//! | 0-1 | Relative humidity, tenths of % (big-endian) |
//! | 2-3 | Temperature, bit 15 = sign, bits 0-14 = tenths of °C |
//! | 4 | Checksum, low byte of the sum of bytes 0-3 |
//!
//! Bits arrive MSB first. Each bit is a ~50 µs low followed by a high pulse
//! whose length encodes the value.

use plant_monitor_common::SensorFault;

use crate::config::{DHT22_MIN_INTERVAL_MS, DHT22_ONE_THRESHOLD_US};

/// Bits in one DHT22 frame.
pub const FRAME_BITS: usize = 40;

/// One decoded measurement.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dht22Reading {
    /// Relative humidity in %.
    pub humidity: f32,
    /// Air temperature in °C.
    pub temperature: f32,
}

/// Outcome of one DHT22 transaction.
pub type Dht22Result = Result<Dht22Reading, SensorFault>;

/// Turn 40 high-pulse lengths into frame bytes.
pub fn frame_from_pulses(high_us: &[u32; FRAME_BITS]) -> [u8; 5] {
    let mut frame = [0u8; 5];
    for (i, &width) in high_us.iter().enumerate() {
        if width > DHT22_ONE_THRESHOLD_US {
            frame[i / 8] |= 0x80 >> (i % 8);
        }
    }
    frame
}

/// Validate and decode a raw frame.
///
/// Values outside the sensor's rated range (0-100 %, -40-80 °C) are reported
/// as [`SensorFault::InvalidValue`].
pub fn decode_frame(frame: [u8; 5]) -> Dht22Result {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorFault::Checksum);
    }

    let humidity = f32::from(u16::from_be_bytes([frame[0], frame[1]])) / 10.0;
    let raw_temp = u16::from_be_bytes([frame[2], frame[3]]);
    let magnitude = f32::from(raw_temp & 0x7FFF) / 10.0;
    let temperature = if raw_temp & 0x8000 != 0 { -magnitude } else { magnitude };

    if !(0.0..=100.0).contains(&humidity) || !(-40.0..=80.0).contains(&temperature) {
        return Err(SensorFault::InvalidValue);
    }

    Ok(Dht22Reading {
        humidity,
        temperature,
    })
}

// =============================================================================
// Sampling Policy
// =============================================================================

/// Rate-limits DHT22 transactions.
///
/// The sensor needs two seconds between reads while the monitor ticks every
/// second, so in between the last outcome is handed out again.
#[derive(Clone, Copy, Debug)]
pub struct Dht22Sampler {
    last_sample_ms: Option<u64>,
    last: Dht22Result,
}

impl Dht22Sampler {
    pub const fn new() -> Self {
        Self {
            last_sample_ms: None,
            last: Err(SensorFault::NotSampled),
        }
    }

    /// Whether a new transaction is allowed at `now_ms`.
    pub fn is_due(
        &self,
        now_ms: u64,
    ) -> bool {
        self.last_sample_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= DHT22_MIN_INTERVAL_MS)
    }

    /// Run `read` if a sample is due, then return the latest outcome.
    pub fn sample<F>(
        &mut self,
        now_ms: u64,
        read: F,
    ) -> Dht22Result
    where
        F: FnOnce() -> Dht22Result,
    {
        if self.is_due(now_ms) {
            self.last = read();
            self.last_sample_ms = Some(now_ms);
        }
        self.last
    }

    /// Latest outcome without sampling.
    #[inline]
    pub const fn latest(&self) -> Dht22Result { self.last }
}

impl Default for Dht22Sampler {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: [u8; 5] = [0x02, 0x8C, 0x01, 0x5F, 0xEE];

    #[test]
    fn test_decode_positive() {
        let reading = decode_frame(GOOD).unwrap();
        assert!((reading.humidity - 65.2).abs() < 1e-4);
        assert!((reading.temperature - 35.1).abs() < 1e-4);
    }

    #[test]
    fn test_decode_negative_temperature() {
        let reading = decode_frame([0x02, 0x8C, 0x80, 0x65, 0x73]).unwrap();
        assert!((reading.temperature + 10.1).abs() < 1e-4);
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let mut frame = GOOD;
        frame[4] ^= 0x01;
        assert_eq!(decode_frame(frame), Err(SensorFault::Checksum));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        // 110.0 % humidity with a valid checksum
        let frame = [0x04, 0x4C, 0x00, 0xFA, 0x4A];
        assert_eq!(decode_frame(frame), Err(SensorFault::InvalidValue));
    }

    #[test]
    fn test_frame_from_pulses() {
        let mut pulses = [26u32; FRAME_BITS];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            if GOOD[i / 8] & (0x80 >> (i % 8)) != 0 {
                *pulse = 70;
            }
        }
        assert_eq!(frame_from_pulses(&pulses), GOOD);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut pulses = [0u32; FRAME_BITS];
        pulses[0] = DHT22_ONE_THRESHOLD_US;
        pulses[1] = DHT22_ONE_THRESHOLD_US + 1;
        assert_eq!(frame_from_pulses(&pulses)[0], 0x40);
    }

    #[test]
    fn test_sampler_rate_limits() {
        let mut sampler = Dht22Sampler::new();
        let mut reads = 0;
        let good = decode_frame(GOOD);

        for now_ms in [0, 1000, 2000, 3000, 4000] {
            sampler.sample(now_ms, || {
                reads += 1;
                good
            });
        }

        assert_eq!(reads, 3);
        assert_eq!(sampler.latest(), good);
    }

    #[test]
    fn test_sampler_reuses_last_outcome() {
        let mut sampler = Dht22Sampler::new();
        assert_eq!(sampler.latest(), Err(SensorFault::NotSampled));

        assert_eq!(sampler.sample(0, || Err(SensorFault::Timeout)), Err(SensorFault::Timeout));
        // Not due yet, the fault is reported again without a transaction
        assert_eq!(
            sampler.sample(1000, || panic!("sampled too early")),
            Err(SensorFault::Timeout)
        );
        assert!(sampler.sample(2000, || decode_frame(GOOD)).is_ok());
    }
}
