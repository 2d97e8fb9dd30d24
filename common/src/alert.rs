//! Buzzer and grow-light decisions.
//!
//! [`Alerting`] turns each tick's [`Evaluation`] into [`AlertActions`]; the
//! platform layer drives the pins. Nothing here touches hardware.
//!
//! # Buzzer
//!
//! - [`AlertMode::EveryTick`]: one pulse for every tick with a failing
//!   parameter.
//! - [`AlertMode::OnTransition`]: one pulse when the aggregate turns bad, then
//!   a reminder every `repeat_ticks` ticks while it stays bad. `0` disables
//!   reminders.
//!
//! # Grow Light
//!
//! Follows a single trigger parameter: on while it is lacking, off while it is
//! in range or exceeding. A faulted trigger sensor keeps the last state so a
//! loose wire does not flip the relay.

use crate::evaluate::{Deviation, Evaluation, Status};
use crate::param::{ParamId, ParamTable};

/// When the buzzer sounds while something is out of range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertMode {
    /// Pulse on every failing tick.
    EveryTick,
    /// Pulse when the aggregate turns bad, then every `repeat_ticks` ticks.
    OnTransition { repeat_ticks: u16 },
}

/// Output decisions for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertActions {
    /// Pulse the buzzer once.
    pub beep: bool,
    /// Desired grow-light relay state.
    pub light_on: bool,
}

/// Alerting state carried between ticks.
#[derive(Clone, Debug)]
pub struct Alerting {
    mode: AlertMode,
    light_trigger: ParamId,
    was_all_ok: bool,
    ticks_since_beep: u16,
    light_on: bool,
}

impl Alerting {
    /// Start with the light off and the aggregate assumed OK, so a fault on
    /// the very first tick beeps.
    pub const fn new(
        mode: AlertMode,
        light_trigger: ParamId,
    ) -> Self {
        Self {
            mode,
            light_trigger,
            was_all_ok: true,
            ticks_since_beep: 0,
            light_on: false,
        }
    }

    /// Decide the outputs for this tick.
    pub fn update<const N: usize>(
        &mut self,
        table: &ParamTable<N>,
        evaluation: &Evaluation<N>,
    ) -> AlertActions {
        let all_ok = evaluation.is_all_ok();
        let beep = self.should_beep(all_ok);
        self.was_all_ok = all_ok;

        if let Some(index) = table.index_of(self.light_trigger)
            && let (Some(def), Some(status)) = (table.get(index), evaluation.status(index))
        {
            match status {
                Status::Fault(_) => {}
                _ => self.light_on = status.deviation(def.invert_min_max) == Some(Deviation::Lacking),
            }
        }

        AlertActions {
            beep,
            light_on: self.light_on,
        }
    }

    fn should_beep(
        &mut self,
        all_ok: bool,
    ) -> bool {
        if all_ok {
            self.ticks_since_beep = 0;
            return false;
        }
        match self.mode {
            AlertMode::EveryTick => true,
            AlertMode::OnTransition { repeat_ticks } => {
                if self.was_all_ok {
                    self.ticks_since_beep = 0;
                    return true;
                }
                self.ticks_since_beep = self.ticks_since_beep.saturating_add(1);
                if repeat_ticks > 0 && self.ticks_since_beep >= repeat_ticks {
                    self.ticks_since_beep = 0;
                    return true;
                }
                false
            }
        }
    }

    /// Current relay state.
    #[inline]
    pub const fn light_on(&self) -> bool { self.light_on }

    #[inline]
    pub const fn mode(&self) -> AlertMode { self.mode }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorFault;
    use crate::thresholds::{DEFAULT_PARAMS, PARAM_COUNT};

    const OK: Evaluation<PARAM_COUNT> = Evaluation::from_statuses([Status::Ok; PARAM_COUNT]);
    const DARK: Evaluation<PARAM_COUNT> =
        Evaluation::from_statuses([Status::Ok, Status::BelowMin, Status::Ok, Status::Ok]);
    const BRIGHT: Evaluation<PARAM_COUNT> =
        Evaluation::from_statuses([Status::Ok, Status::AboveMax, Status::Ok, Status::Ok]);
    const HOT: Evaluation<PARAM_COUNT> =
        Evaluation::from_statuses([Status::Ok, Status::Ok, Status::Ok, Status::AboveMax]);
    const LIGHT_FAULT: Evaluation<PARAM_COUNT> = Evaluation::from_statuses([
        Status::Ok,
        Status::Fault(SensorFault::Disconnected),
        Status::Ok,
        Status::Ok,
    ]);

    fn table() -> ParamTable<PARAM_COUNT> { ParamTable::new(DEFAULT_PARAMS).unwrap() }

    #[test]
    fn test_every_tick_beeps_while_failing() {
        let table = table();
        let mut alerting = Alerting::new(AlertMode::EveryTick, ParamId::AmbientBrightness);
        for _ in 0..3 {
            assert!(alerting.update(&table, &HOT).beep);
        }
        assert!(!alerting.update(&table, &OK).beep);
    }

    #[test]
    fn test_on_transition_beeps_once() {
        let table = table();
        let mut alerting = Alerting::new(AlertMode::OnTransition { repeat_ticks: 0 }, ParamId::AmbientBrightness);
        assert!(!alerting.update(&table, &OK).beep);
        assert!(alerting.update(&table, &HOT).beep);
        for _ in 0..100 {
            assert!(!alerting.update(&table, &HOT).beep);
        }
        // Recover and fail again
        assert!(!alerting.update(&table, &OK).beep);
        assert!(alerting.update(&table, &HOT).beep);
    }

    #[test]
    fn test_on_transition_repeats() {
        let table = table();
        let mut alerting = Alerting::new(AlertMode::OnTransition { repeat_ticks: 3 }, ParamId::AmbientBrightness);
        let beeps: [bool; 7] = core::array::from_fn(|_| alerting.update(&table, &HOT).beep);
        assert_eq!(beeps, [true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_first_tick_failure_beeps() {
        let table = table();
        let mut alerting = Alerting::new(AlertMode::OnTransition { repeat_ticks: 60 }, ParamId::AmbientBrightness);
        assert!(alerting.update(&table, &DARK).beep);
    }

    #[test]
    fn test_light_follows_lacking_brightness() {
        let table = table();
        let mut alerting = Alerting::new(AlertMode::EveryTick, ParamId::AmbientBrightness);
        assert!(!alerting.update(&table, &OK).light_on);
        assert!(alerting.update(&table, &DARK).light_on);
        assert!(!alerting.update(&table, &BRIGHT).light_on);
        // Other parameters do not drive the light
        assert!(!alerting.update(&table, &HOT).light_on);
    }

    #[test]
    fn test_light_holds_state_on_fault() {
        let table = table();
        let mut alerting = Alerting::new(AlertMode::EveryTick, ParamId::AmbientBrightness);
        alerting.update(&table, &DARK);
        let actions = alerting.update(&table, &LIGHT_FAULT);
        assert!(actions.light_on);
        assert!(actions.beep);
        alerting.update(&table, &OK);
        assert!(!alerting.update(&table, &LIGHT_FAULT).light_on);
    }

    #[test]
    fn test_light_respects_inversion() {
        let mut defs = DEFAULT_PARAMS;
        defs[1].invert_min_max = true;
        let table = ParamTable::new(defs).unwrap();
        let mut alerting = Alerting::new(AlertMode::EveryTick, ParamId::AmbientBrightness);
        assert!(alerting.update(&table, &BRIGHT).light_on);
        assert!(!alerting.update(&table, &DARK).light_on);
    }
}
