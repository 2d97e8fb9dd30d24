//! Raw ADC to parameter units.
//!
//! | Sensor | Raw | Parameter value |
//! |--------|-----|-----------------|
//! | Soil probe | 12-bit | 10-bit count (`raw >> 2`), higher = drier |
//! | Photoresistor | 12-bit | 0-100 % brightness |

use plant_monitor_common::{Reading, SensorFault};

use crate::config::{ADC_FULL_SCALE, ADC_RAIL_MARGIN, LIGHT_ADC_INVERTED, SOIL_ADC_SHIFT};

/// Soil probe count on the 10-bit scale.
///
/// A reading pinned to either rail is reported as
/// [`SensorFault::Disconnected`].
pub fn soil_from_adc(raw: u16) -> Reading {
    if raw <= ADC_RAIL_MARGIN || raw >= ADC_FULL_SCALE - ADC_RAIL_MARGIN {
        return Err(SensorFault::Disconnected);
    }
    Ok(f32::from(raw >> SOIL_ADC_SHIFT))
}

/// Ambient brightness in percent of full scale.
pub fn brightness_from_adc(raw: u16) -> Reading {
    let raw = raw.min(ADC_FULL_SCALE);
    let level = if LIGHT_ADC_INVERTED { ADC_FULL_SCALE - raw } else { raw };
    Ok(f32::from(level) * 100.0 / f32::from(ADC_FULL_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_scales_to_ten_bits() {
        assert_eq!(soil_from_adc(2000), Ok(500.0));
        assert_eq!(soil_from_adc(2003), Ok(500.0));
        assert_eq!(soil_from_adc(ADC_FULL_SCALE - ADC_RAIL_MARGIN - 1), Ok(1021.0));
    }

    #[test]
    fn test_soil_at_rail_is_disconnected() {
        assert_eq!(soil_from_adc(0), Err(SensorFault::Disconnected));
        assert_eq!(soil_from_adc(ADC_RAIL_MARGIN), Err(SensorFault::Disconnected));
        assert_eq!(soil_from_adc(ADC_FULL_SCALE), Err(SensorFault::Disconnected));
    }

    #[test]
    fn test_brightness_percent() {
        assert_eq!(brightness_from_adc(0), Ok(0.0));
        assert_eq!(brightness_from_adc(ADC_FULL_SCALE), Ok(100.0));
        // Out-of-range raw values clamp
        assert_eq!(brightness_from_adc(u16::MAX), Ok(100.0));

        let mid = brightness_from_adc(2048).unwrap();
        assert!((mid - 50.0).abs() < 0.1);
    }
}
