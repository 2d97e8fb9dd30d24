//! Acceptable ranges for every monitored parameter and the default table.
//!
//! All bounds are inclusive compile-time constants. Each group carries
//! `const` assertions so a swapped pair fails the build instead of showing up
//! on the LCD; [`ParamTable::new`](crate::param::ParamTable::new) repeats the
//! check at start-up for tables built elsewhere.
//!
//! # Units
//!
//! | Parameter | Unit |
//! |-----------|------|
//! | Soil humidity | raw 10-bit ADC count, higher = drier |
//! | Ambient brightness | percent of full scale |
//! | Air humidity | percent relative humidity |
//! | Air temperature | degrees Celsius |

use crate::param::{ParamDef, ParamId};

// =============================================================================
// Soil Humidity (resistive probe)
// =============================================================================

/// Wettest acceptable probe reading. Below this the soil is waterlogged.
pub const SOIL_HUMIDITY_MIN: i32 = 220;

/// Driest acceptable probe reading. Above this the plant needs water.
pub const SOIL_HUMIDITY_MAX: i32 = 600;

const _: () = assert!(SOIL_HUMIDITY_MIN <= SOIL_HUMIDITY_MAX);

// =============================================================================
// Ambient Brightness (photoresistor)
// =============================================================================

/// Below this the grow light is switched on.
pub const BRIGHTNESS_MIN: i32 = 50;

pub const BRIGHTNESS_MAX: i32 = 100;

const _: () = assert!(BRIGHTNESS_MIN <= BRIGHTNESS_MAX);

// =============================================================================
// Air Humidity (DHT22)
// =============================================================================

pub const AIR_HUMIDITY_MIN: i32 = 30;
pub const AIR_HUMIDITY_MAX: i32 = 70;

const _: () = assert!(AIR_HUMIDITY_MIN <= AIR_HUMIDITY_MAX);

// =============================================================================
// Air Temperature (DHT22)
// =============================================================================

pub const AIR_TEMPERATURE_MIN: i32 = 22;
pub const AIR_TEMPERATURE_MAX: i32 = 40;

const _: () = assert!(AIR_TEMPERATURE_MIN <= AIR_TEMPERATURE_MAX);

// =============================================================================
// Default Parameter Table
// =============================================================================

/// Number of monitored parameters.
pub const PARAM_COUNT: usize = 4;

/// The monitored parameters in display order.
pub const DEFAULT_PARAMS: [ParamDef; PARAM_COUNT] = [
    ParamDef {
        id: ParamId::SoilHumidity,
        name: "Soil humidity",
        short_name: "S",
        min_value: SOIL_HUMIDITY_MIN,
        max_value: SOIL_HUMIDITY_MAX,
        message_lacking: "Soil is too dry, water the plant",
        message_exceeding: "Soil is too wet, stop watering",
        // The probe reports dryness: a high count means little water
        invert_min_max: true,
        decimal_places: 0,
    },
    ParamDef {
        id: ParamId::AmbientBrightness,
        name: "Brightness",
        short_name: "L",
        min_value: BRIGHTNESS_MIN,
        max_value: BRIGHTNESS_MAX,
        message_lacking: "Not enough light",
        message_exceeding: "Too much light",
        invert_min_max: false,
        decimal_places: 0,
    },
    ParamDef {
        id: ParamId::AirHumidity,
        name: "Air humidity",
        short_name: "H",
        min_value: AIR_HUMIDITY_MIN,
        max_value: AIR_HUMIDITY_MAX,
        message_lacking: "Air is too dry",
        message_exceeding: "Air is too humid",
        invert_min_max: false,
        decimal_places: 1,
    },
    ParamDef {
        id: ParamId::AirTemperature,
        name: "Temperature",
        short_name: "T",
        min_value: AIR_TEMPERATURE_MIN,
        max_value: AIR_TEMPERATURE_MAX,
        message_lacking: "Too cold for the plant",
        message_exceeding: "Too hot for the plant",
        invert_min_max: false,
        decimal_places: 1,
    },
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Mirrors the compile-time checks
mod tests {
    use super::*;
    use crate::param::ParamTable;

    #[test]
    fn test_threshold_ordering() {
        assert!(SOIL_HUMIDITY_MIN <= SOIL_HUMIDITY_MAX);
        assert!(BRIGHTNESS_MIN <= BRIGHTNESS_MAX);
        assert!(AIR_HUMIDITY_MIN <= AIR_HUMIDITY_MAX);
        assert!(AIR_TEMPERATURE_MIN <= AIR_TEMPERATURE_MAX);
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(ParamTable::new(DEFAULT_PARAMS).is_ok());
    }

    #[test]
    fn test_default_table_covers_every_param_once() {
        for id in ParamId::ALL {
            let count = DEFAULT_PARAMS.iter().filter(|def| def.id == id).count();
            assert_eq!(count, 1, "{:?} should appear exactly once", id);
        }
    }

    #[test]
    fn test_only_soil_is_inverted() {
        for def in &DEFAULT_PARAMS {
            assert_eq!(def.invert_min_max, def.id == ParamId::SoilHumidity);
        }
    }
}
