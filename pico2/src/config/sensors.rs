//! Sensor scaling and timing constants.

// =============================================================================
// ADC
// =============================================================================

/// Highest raw value of the RP2350 12-bit ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Right shift from the 12-bit ADC to the 10-bit scale the soil bounds use.
pub const SOIL_ADC_SHIFT: u32 = 2;

/// Raw soil readings this close to either rail mean the probe is unplugged.
pub const ADC_RAIL_MARGIN: u16 = 8;

/// Set when the photoresistor sits on the high side of the divider, so more
/// light gives a lower voltage.
pub const LIGHT_ADC_INVERTED: bool = false;

const _: () = assert!(SOIL_ADC_SHIFT <= 4);
const _: () = assert!(ADC_RAIL_MARGIN < ADC_FULL_SCALE / 2);

// =============================================================================
// DHT22
// =============================================================================

/// The DHT22 must not be polled more often than this.
pub const DHT22_MIN_INTERVAL_MS: u64 = 2000;

/// Host start signal: hold the line low for at least 1 ms.
pub const DHT22_START_LOW_US: u64 = 1100;

/// Longest wait for any single edge before giving up.
pub const DHT22_BIT_TIMEOUT_US: u64 = 100;

/// A data pulse high for longer than this is a `1` (nominal 26-28 µs for `0`,
/// 70 µs for `1`).
pub const DHT22_ONE_THRESHOLD_US: u32 = 50;

const _: () = assert!(DHT22_START_LOW_US >= 1000);
const _: () = assert!(DHT22_ONE_THRESHOLD_US > 28 && DHT22_ONE_THRESHOLD_US < 70);
const _: () = assert!((DHT22_ONE_THRESHOLD_US as u64) < DHT22_BIT_TIMEOUT_US);

// =============================================================================
// Buzzer
// =============================================================================

/// Length of one alert beep.
pub const ALERT_PULSE_MS: u64 = 200;

const _: () = assert!(ALERT_PULSE_MS < plant_monitor_common::UPDATE_INTERVAL_MS);
