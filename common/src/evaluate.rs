//! Bounds checking and warning selection.
//!
//! # Status vs. Deviation
//!
//! [`Status`] is the raw comparison against the bounds. [`Deviation`] is what
//! that means for the plant once `invert_min_max` is applied: a soil probe
//! reading above its maximum is *lacking* water, not exceeding it.
//!
//! | Status | invert = false | invert = true |
//! |--------|----------------|---------------|
//! | `BelowMin` | Lacking | Exceeding |
//! | `AboveMax` | Exceeding | Lacking |

use crate::cache::{Reading, ValueCache};
use crate::error::SensorFault;
use crate::param::{ParamDef, ParamTable};

/// Result of checking one parameter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Inside `[min_value, max_value]`.
    Ok,
    /// Below `min_value`.
    BelowMin,
    /// Above `max_value`.
    AboveMax,
    /// No usable reading.
    Fault(SensorFault),
}

impl Status {
    #[inline]
    pub const fn is_ok(self) -> bool { matches!(self, Self::Ok) }

    /// Which way the plant is off, honoring `invert_min_max`.
    ///
    /// `None` for `Ok` and `Fault`.
    pub const fn deviation(
        self,
        invert_min_max: bool,
    ) -> Option<Deviation> {
        match (self, invert_min_max) {
            (Self::BelowMin, false) | (Self::AboveMax, true) => Some(Deviation::Lacking),
            (Self::AboveMax, false) | (Self::BelowMin, true) => Some(Deviation::Exceeding),
            _ => None,
        }
    }
}

/// Semantic direction of an out-of-range parameter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Deviation {
    Lacking,
    Exceeding,
}

/// Whether `value` lies within the inclusive bounds of `def`.
///
/// NaN is never in range.
#[inline]
pub fn is_param_ok(
    def: &ParamDef,
    value: f32,
) -> bool {
    value >= def.min_value as f32 && value <= def.max_value as f32
}

/// Classify one cached reading against its definition.
pub fn evaluate_param(
    def: &ParamDef,
    reading: Reading,
) -> Status {
    match reading {
        Err(fault) => Status::Fault(fault),
        Ok(value) if is_param_ok(def, value) => Status::Ok,
        Ok(value) if value < def.min_value as f32 => Status::BelowMin,
        Ok(value) if value > def.max_value as f32 => Status::AboveMax,
        // Only NaN fails all three comparisons
        Ok(_) => Status::Fault(SensorFault::InvalidValue),
    }
}

/// Warning text for `status`, or `None` when there is nothing to warn about.
///
/// Faults have no configured message; they are rendered separately.
pub fn warning_message(
    def: &ParamDef,
    status: Status,
) -> Option<&'static str> {
    match status.deviation(def.invert_min_max)? {
        Deviation::Lacking => Some(def.message_lacking),
        Deviation::Exceeding => Some(def.message_exceeding),
    }
}

/// Status of every parameter for one tick, in table order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Evaluation<const N: usize> {
    statuses: [Status; N],
}

impl<const N: usize> Evaluation<N> {
    /// Check every cached reading against the table.
    pub fn evaluate(
        table: &ParamTable<N>,
        cache: &ValueCache<N>,
    ) -> Self {
        let defs = table.defs();
        Self {
            statuses: core::array::from_fn(|i| evaluate_param(&defs[i], cache.get(i))),
        }
    }

    /// Build from precomputed statuses.
    pub const fn from_statuses(statuses: [Status; N]) -> Self { Self { statuses } }

    /// True only if every parameter is in range.
    pub fn is_all_ok(&self) -> bool { self.statuses.iter().all(|s| s.is_ok()) }

    /// Status at `index`.
    #[inline]
    pub fn status(
        &self,
        index: usize,
    ) -> Option<Status> {
        self.statuses.get(index).copied()
    }

    #[inline]
    pub const fn statuses(&self) -> &[Status; N] { &self.statuses }

    /// Indices of failing parameters, in table order.
    pub fn failing(&self) -> impl Iterator<Item = usize> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_ok())
            .map(|(i, _)| i)
    }

    /// Number of failing parameters.
    pub fn failing_count(&self) -> usize { self.failing().count() }

    /// First failing index strictly after `index`, or the first failing index
    /// overall when `index` is `None`.
    pub fn next_failing_after(
        &self,
        index: Option<usize>,
    ) -> Option<usize> {
        let start = index.map_or(0, |i| i + 1);
        self.failing().find(|&i| i >= start)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::ParamId;
    use crate::thresholds::{DEFAULT_PARAMS, PARAM_COUNT};

    const SOIL: usize = 0;
    const LIGHT: usize = 1;
    const TEMP: usize = 3;

    fn with_invert(
        mut def: ParamDef,
        invert: bool,
    ) -> ParamDef {
        def.invert_min_max = invert;
        def
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let def = &DEFAULT_PARAMS[SOIL];
        assert!(is_param_ok(def, 220.0));
        assert!(is_param_ok(def, 600.0));
        assert!(is_param_ok(def, 500.0));
        assert!(!is_param_ok(def, 219.9));
        assert!(!is_param_ok(def, 600.1));
        assert!(!is_param_ok(def, f32::NAN));
    }

    #[test]
    fn test_evaluate_param() {
        let def = &DEFAULT_PARAMS[LIGHT];
        assert_eq!(evaluate_param(def, Ok(75.0)), Status::Ok);
        assert_eq!(evaluate_param(def, Ok(30.0)), Status::BelowMin);
        assert_eq!(evaluate_param(def, Ok(101.0)), Status::AboveMax);
        assert_eq!(
            evaluate_param(def, Err(SensorFault::Timeout)),
            Status::Fault(SensorFault::Timeout)
        );
        assert_eq!(
            evaluate_param(def, Ok(f32::NAN)),
            Status::Fault(SensorFault::InvalidValue)
        );
    }

    #[test]
    fn test_message_selection_without_invert() {
        let def = with_invert(DEFAULT_PARAMS[TEMP], false);
        assert_eq!(warning_message(&def, Status::BelowMin), Some(def.message_lacking));
        assert_eq!(warning_message(&def, Status::AboveMax), Some(def.message_exceeding));
        assert_eq!(warning_message(&def, Status::Ok), None);
    }

    #[test]
    fn test_message_selection_with_invert() {
        let def = with_invert(DEFAULT_PARAMS[TEMP], true);
        assert_eq!(warning_message(&def, Status::BelowMin), Some(def.message_exceeding));
        assert_eq!(warning_message(&def, Status::AboveMax), Some(def.message_lacking));
    }

    #[test]
    fn test_fault_has_no_configured_message() {
        let def = &DEFAULT_PARAMS[TEMP];
        assert_eq!(warning_message(def, Status::Fault(SensorFault::Checksum)), None);
        assert_eq!(Status::Fault(SensorFault::Checksum).deviation(false), None);
    }

    #[test]
    fn test_temperature_45_exceeds() {
        let def = &DEFAULT_PARAMS[TEMP];
        let status = evaluate_param(def, Ok(45.0));
        assert_eq!(status, Status::AboveMax);
        assert_eq!(warning_message(def, status), Some("Too hot for the plant"));

        let inverted = with_invert(*def, true);
        assert_eq!(warning_message(&inverted, status), Some("Too cold for the plant"));
    }

    #[test]
    fn test_all_ok_requires_every_param() {
        let table = ParamTable::new(DEFAULT_PARAMS).unwrap();
        let mut cache: ValueCache<PARAM_COUNT> = ValueCache::new();
        let mut good = |id: ParamId| -> Reading {
            Ok(match id {
                ParamId::SoilHumidity => 500.0,
                ParamId::AmbientBrightness => 75.0,
                ParamId::AirHumidity => 50.0,
                ParamId::AirTemperature => 25.0,
            })
        };
        cache.update_all(&table, &mut good);
        assert!(Evaluation::evaluate(&table, &cache).is_all_ok());

        let mut dark = |id: ParamId| -> Reading {
            match id {
                ParamId::AmbientBrightness => Ok(30.0),
                other => good(other),
            }
        };
        cache.update_all(&table, &mut dark);
        let eval = Evaluation::evaluate(&table, &cache);
        assert!(!eval.is_all_ok());
        assert_eq!(eval.status(LIGHT), Some(Status::BelowMin));
        assert_eq!(eval.failing_count(), 1);
    }

    #[test]
    fn test_unsampled_cache_is_not_ok() {
        let table = ParamTable::new(DEFAULT_PARAMS).unwrap();
        let cache: ValueCache<PARAM_COUNT> = ValueCache::new();
        let eval = Evaluation::evaluate(&table, &cache);
        assert!(!eval.is_all_ok());
        assert_eq!(eval.status(0), Some(Status::Fault(SensorFault::NotSampled)));
    }

    #[test]
    fn test_next_failing_after() {
        let eval = Evaluation::from_statuses([Status::BelowMin, Status::Ok, Status::AboveMax, Status::Ok]);
        assert_eq!(eval.next_failing_after(None), Some(0));
        assert_eq!(eval.next_failing_after(Some(0)), Some(2));
        assert_eq!(eval.next_failing_after(Some(2)), None);

        let mut failing = [0usize; 2];
        for (slot, i) in failing.iter_mut().zip(eval.failing()) {
            *slot = i;
        }
        assert_eq!(failing, [0, 2]);
    }
}
