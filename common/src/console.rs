//! Diagnostic text lines, one per parameter.
//!
//! The firmware sends them over RTT with `defmt::info!`; the simulator prints
//! them to stdout.

use core::fmt::Write;

use heapless::String;

use crate::cache::{Reading, ValueCache};
use crate::format::format_value;
use crate::param::ParamTable;

/// Capacity of one console line.
pub const CONSOLE_LINE_LEN: usize = 64;

pub type ConsoleLine = String<CONSOLE_LINE_LEN>;

/// `"<name>: <value>"`, or `"<name>: sensor fault (<kind>)"`.
///
/// A name too long for the line is cut short so the value always fits.
pub fn write_value(
    name: &str,
    reading: Reading,
    decimal_places: u8,
) -> ConsoleLine {
    let mut tail = ConsoleLine::new();
    let _ = match reading {
        Ok(value) => write!(tail, ": {}", format_value(value, decimal_places)),
        Err(fault) => write!(tail, ": sensor fault ({fault})"),
    };

    let mut line = ConsoleLine::new();
    let budget = CONSOLE_LINE_LEN - tail.len();
    for ch in name.chars() {
        if line.len() + ch.len_utf8() > budget {
            break;
        }
        let _ = line.push(ch);
    }
    let _ = line.push_str(&tail);
    line
}

/// One line per parameter, in table order.
pub fn write_all_values<'a, const N: usize>(
    table: &'a ParamTable<N>,
    cache: &'a ValueCache<N>,
) -> impl Iterator<Item = ConsoleLine> + 'a {
    table
        .iter()
        .enumerate()
        .map(|(i, def)| write_value(def.name, cache.get(i), def.decimal_places))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorFault;
    use crate::param::ParamId;
    use crate::thresholds::{DEFAULT_PARAMS, PARAM_COUNT};

    #[test]
    fn test_write_value() {
        assert_eq!(write_value("Soil humidity", Ok(500.0), 0).as_str(), "Soil humidity: 500");
        assert_eq!(write_value("Temperature", Ok(23.4567), 2).as_str(), "Temperature: 23.46");
    }

    #[test]
    fn test_write_fault() {
        assert_eq!(
            write_value("Air humidity", Err(SensorFault::Timeout), 1).as_str(),
            "Air humidity: sensor fault (timeout)"
        );
    }

    #[test]
    fn test_long_name_keeps_value() {
        let name = "N".repeat(CONSOLE_LINE_LEN);
        let line = write_value(&name, Ok(500.0), 0);
        assert_eq!(line.len(), CONSOLE_LINE_LEN);
        assert!(line.ends_with("NNN: 500"));

        let line = write_value(&name, Err(SensorFault::Disconnected), 0);
        assert!(line.ends_with(": sensor fault (disconnected)"));
    }

    #[test]
    fn test_write_all_values_in_order() {
        let table = ParamTable::new(DEFAULT_PARAMS).unwrap();
        let mut cache: ValueCache<PARAM_COUNT> = ValueCache::new();
        let mut bank = |id: ParamId| -> Reading {
            match id {
                ParamId::SoilHumidity => Ok(500.0),
                ParamId::AmbientBrightness => Ok(30.0),
                ParamId::AirHumidity => Ok(45.25),
                ParamId::AirTemperature => Err(SensorFault::Checksum),
            }
        };
        cache.update_all(&table, &mut bank);

        let mut lines = write_all_values(&table, &cache);
        assert_eq!(lines.next().unwrap().as_str(), "Soil humidity: 500");
        assert_eq!(lines.next().unwrap().as_str(), "Brightness: 30");
        assert_eq!(lines.next().unwrap().as_str(), "Air humidity: 45.3");
        assert_eq!(lines.next().unwrap().as_str(), "Temperature: sensor fault (checksum)");
        assert!(lines.next().is_none());
    }
}
