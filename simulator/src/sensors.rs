//! Simulated sensors.
//!
//! Each parameter follows a slow sine wave that crosses its bounds now and
//! then, so every warning shows up without touching anything. The keyboard
//! can push a parameter around or unplug its sensor.
//!
//! | Key | Action |
//! |-----|--------|
//! | 1-4 | Select soil / brightness / air humidity / temperature |
//! | Up / Down | Nudge the selected parameter |
//! | F | Toggle a sensor fault on the selected parameter |
//! | R | Clear all nudges and faults |

use plant_monitor_common::{PARAM_COUNT, ParamId, Reading, SensorBank, SensorFault};

/// Wave shape of one simulated parameter.
struct Wave {
    min: f32,
    max: f32,
    freq: f32,
    /// Added to every nudge.
    step: f32,
}

/// Indexed like [`ParamId::ALL`].
const WAVES: [Wave; PARAM_COUNT] = [
    Wave {
        min: 150.0,
        max: 700.0,
        freq: 0.05,
        step: 50.0,
    },
    Wave {
        min: 20.0,
        max: 100.0,
        freq: 0.08,
        step: 10.0,
    },
    Wave {
        min: 20.0,
        max: 80.0,
        freq: 0.06,
        step: 5.0,
    },
    Wave {
        min: 15.0,
        max: 45.0,
        freq: 0.04,
        step: 2.0,
    },
];

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

fn slot(id: ParamId) -> usize { ParamId::ALL.iter().position(|p| *p == id).unwrap_or(0) }

/// Sensor bank driven by simulated time and keyboard input.
pub struct SimulatedSensors {
    t: f32,
    offsets: [f32; PARAM_COUNT],
    faults: [bool; PARAM_COUNT],
    selected: usize,
}

impl SimulatedSensors {
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            offsets: [0.0; PARAM_COUNT],
            faults: [false; PARAM_COUNT],
            selected: 0,
        }
    }

    /// Move simulated time forward by `seconds`.
    pub fn advance(
        &mut self,
        seconds: f32,
    ) {
        self.t += seconds;
    }

    pub fn select(
        &mut self,
        id: ParamId,
    ) {
        self.selected = slot(id);
    }

    #[inline]
    pub fn selected(&self) -> ParamId { ParamId::ALL[self.selected] }

    /// Shift the selected parameter by `steps` nudges.
    pub fn nudge(
        &mut self,
        steps: f32,
    ) {
        self.offsets[self.selected] += steps * WAVES[self.selected].step;
    }

    /// Plug or unplug the selected sensor. Returns the new fault state.
    pub fn toggle_fault(&mut self) -> bool {
        let fault = &mut self.faults[self.selected];
        *fault = !*fault;
        *fault
    }

    /// Drop every nudge and fault.
    pub fn reset(&mut self) {
        self.offsets = [0.0; PARAM_COUNT];
        self.faults = [false; PARAM_COUNT];
    }
}

impl SensorBank for SimulatedSensors {
    fn read(
        &mut self,
        id: ParamId,
    ) -> Reading {
        let i = slot(id);
        if self.faults[i] {
            return Err(SensorFault::Disconnected);
        }
        let wave = &WAVES[i];
        Ok(fake_signal(self.t, wave.min, wave.max, wave.freq) + self.offsets[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_stays_in_its_band() {
        let mut sensors = SimulatedSensors::new();
        for _ in 0..200 {
            sensors.advance(1.0);
            for (id, wave) in ParamId::ALL.into_iter().zip(&WAVES) {
                let value = sensors.read(id).unwrap();
                assert!(value >= wave.min - 1e-3 && value <= wave.max + 1e-3);
            }
        }
    }

    #[test]
    fn test_nudge_and_fault_hit_selected_only() {
        let mut sensors = SimulatedSensors::new();
        let before = sensors.read(ParamId::AirTemperature).unwrap();

        sensors.select(ParamId::AirTemperature);
        sensors.nudge(2.0);
        assert!((sensors.read(ParamId::AirTemperature).unwrap() - before - 4.0).abs() < 1e-3);

        assert!(sensors.toggle_fault());
        assert_eq!(sensors.read(ParamId::AirTemperature), Err(SensorFault::Disconnected));
        assert!(sensors.read(ParamId::SoilHumidity).is_ok());

        sensors.reset();
        assert!((sensors.read(ParamId::AirTemperature).unwrap() - before).abs() < 1e-3);
    }
}
