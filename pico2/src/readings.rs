//! One tick's worth of raw hardware samples.
//!
//! The soil probe and photoresistor share one ADC and the DHT22 produces both
//! air parameters in a single transaction, so the firmware samples the
//! hardware once per tick into a [`SensorSnapshot`] and hands that to the
//! monitor as its [`SensorBank`].

use plant_monitor_common::{ParamId, Reading, SensorBank, SensorFault};

use crate::analog::{brightness_from_adc, soil_from_adc};
use crate::dht22::Dht22Result;

/// Raw samples taken at the start of a tick.
#[derive(Clone, Copy, Debug)]
pub struct SensorSnapshot {
    pub soil_adc: Result<u16, SensorFault>,
    pub light_adc: Result<u16, SensorFault>,
    pub climate: Dht22Result,
}

impl SensorBank for SensorSnapshot {
    fn read(
        &mut self,
        id: ParamId,
    ) -> Reading {
        match id {
            ParamId::SoilHumidity => self.soil_adc.and_then(soil_from_adc),
            ParamId::AmbientBrightness => self.light_adc.and_then(brightness_from_adc),
            ParamId::AirHumidity => self.climate.map(|c| c.humidity),
            ParamId::AirTemperature => self.climate.map(|c| c.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dht22::Dht22Reading;
    use plant_monitor_common::{Monitor, Screen};

    fn healthy() -> SensorSnapshot {
        SensorSnapshot {
            soil_adc: Ok(2000),
            light_adc: Ok(3071),
            climate: Ok(Dht22Reading {
                humidity: 50.0,
                temperature: 24.0,
            }),
        }
    }

    #[test]
    fn test_snapshot_maps_params() {
        let mut snapshot = healthy();
        assert_eq!(snapshot.read(ParamId::SoilHumidity), Ok(500.0));
        assert_eq!(snapshot.read(ParamId::AirHumidity), Ok(50.0));
        assert_eq!(snapshot.read(ParamId::AirTemperature), Ok(24.0));
        let light = snapshot.read(ParamId::AmbientBrightness).unwrap();
        assert!((light - 75.0).abs() < 0.1);
    }

    #[test]
    fn test_dht_fault_hits_both_air_params() {
        let mut snapshot = SensorSnapshot {
            climate: Err(SensorFault::Checksum),
            ..healthy()
        };
        assert_eq!(snapshot.read(ParamId::AirHumidity), Err(SensorFault::Checksum));
        assert_eq!(snapshot.read(ParamId::AirTemperature), Err(SensorFault::Checksum));
        assert!(snapshot.read(ParamId::SoilHumidity).is_ok());
    }

    #[test]
    fn test_monitor_with_snapshot() {
        let mut monitor = Monitor::from_config().unwrap();

        let report = monitor.tick(&mut healthy());
        assert!(report.all_ok);
        assert_eq!(monitor.frame().line(0), "S:500 L:75      ");

        let mut unplugged = SensorSnapshot {
            soil_adc: Ok(0),
            ..healthy()
        };
        let report = monitor.tick(&mut unplugged);
        assert!(!report.all_ok);
        assert!(report.actions.beep);
        assert_eq!(report.screen, Screen::Warning(0));
        assert_eq!(monitor.frame().line(1), "SENSOR FAULT    ");
    }
}
