//! Per-tick value cache and the sensor reader capability.
//!
//! Every tick the cache asks the [`SensorBank`] once per parameter and keeps
//! the answer until the next tick. Evaluation, the console and the LCD all
//! read the cached snapshot, so one tick never mixes two readings of the same
//! sensor.

use crate::error::SensorFault;
use crate::param::{ParamId, ParamTable};

/// Outcome of reading one sensor.
pub type Reading = Result<f32, SensorFault>;

/// Something that can produce a reading for a parameter.
///
/// Implemented by the firmware's hardware bank, the simulator and, through the
/// blanket impl, any `FnMut(ParamId) -> Reading` closure used as a test mock.
pub trait SensorBank {
    /// Sample the sensor behind `id`. Must return within a bounded time.
    fn read(
        &mut self,
        id: ParamId,
    ) -> Reading;
}

impl<F> SensorBank for F
where
    F: FnMut(ParamId) -> Reading,
{
    fn read(
        &mut self,
        id: ParamId,
    ) -> Reading {
        self(id)
    }
}

/// Most recent reading for each parameter, parallel to a [`ParamTable`].
#[derive(Clone, Debug)]
pub struct ValueCache<const N: usize> {
    values: [Reading; N],
}

impl<const N: usize> ValueCache<N> {
    /// Every slot starts as [`SensorFault::NotSampled`].
    pub const fn new() -> Self {
        Self {
            values: [Err(SensorFault::NotSampled); N],
        }
    }

    /// Read every parameter once and overwrite the cache.
    ///
    /// Non-finite readings are stored as [`SensorFault::InvalidValue`] so the
    /// evaluator never compares NaN against a bound.
    pub fn update_all<B: SensorBank + ?Sized>(
        &mut self,
        table: &ParamTable<N>,
        bank: &mut B,
    ) {
        for (slot, def) in self.values.iter_mut().zip(table.iter()) {
            *slot = match bank.read(def.id) {
                Ok(value) if !value.is_finite() => Err(SensorFault::InvalidValue),
                reading => reading,
            };
        }
    }

    /// Cached reading at `index`. Out-of-range indices report `NotSampled`.
    #[inline]
    pub fn get(
        &self,
        index: usize,
    ) -> Reading {
        self.values.get(index).copied().unwrap_or(Err(SensorFault::NotSampled))
    }

    /// All cached readings in table order.
    #[inline]
    pub const fn values(&self) -> &[Reading; N] { &self.values }
}

impl<const N: usize> Default for ValueCache<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::{DEFAULT_PARAMS, PARAM_COUNT};

    fn table() -> ParamTable<PARAM_COUNT> { ParamTable::new(DEFAULT_PARAMS).unwrap() }

    #[test]
    fn test_starts_unsampled() {
        let cache: ValueCache<PARAM_COUNT> = ValueCache::new();
        for reading in cache.values() {
            assert_eq!(*reading, Err(SensorFault::NotSampled));
        }
        assert_eq!(cache.get(99), Err(SensorFault::NotSampled));
    }

    #[test]
    fn test_update_reads_each_param_once() {
        let table = table();
        let mut cache = ValueCache::new();
        let mut calls = [0u32; 4];
        let mut bank = |id: ParamId| -> Reading {
            let i = ParamId::ALL.iter().position(|p| *p == id).unwrap();
            calls[i] += 1;
            Ok(i as f32 * 10.0)
        };

        cache.update_all(&table, &mut bank);

        assert_eq!(calls, [1, 1, 1, 1]);
        assert_eq!(cache.get(0), Ok(0.0));
        assert_eq!(cache.get(3), Ok(30.0));
    }

    #[test]
    fn test_update_is_idempotent_for_unchanged_sensor() {
        let table = table();
        let mut cache = ValueCache::new();
        let mut bank = |_id: ParamId| -> Reading { Ok(23.4567) };

        cache.update_all(&table, &mut bank);
        let first = *cache.values();
        cache.update_all(&table, &mut bank);

        assert_eq!(first, *cache.values());
    }

    #[test]
    fn test_faults_and_nan_are_stored_as_faults() {
        let table = table();
        let mut cache = ValueCache::new();
        let mut bank = |id: ParamId| -> Reading {
            match id {
                ParamId::AirHumidity => Err(SensorFault::Checksum),
                ParamId::AirTemperature => Ok(f32::NAN),
                _ => Ok(1.0),
            }
        };

        cache.update_all(&table, &mut bank);

        assert_eq!(cache.get(0), Ok(1.0));
        assert_eq!(cache.get(2), Err(SensorFault::Checksum));
        assert_eq!(cache.get(3), Err(SensorFault::InvalidValue));
    }

    #[test]
    fn test_fault_is_replaced_by_next_good_reading() {
        let table = table();
        let mut cache = ValueCache::new();

        cache.update_all(&table, &mut |_id: ParamId| -> Reading { Err(SensorFault::Timeout) });
        assert_eq!(cache.get(1), Err(SensorFault::Timeout));

        cache.update_all(&table, &mut |_id: ParamId| -> Reading { Ok(75.0) });
        assert_eq!(cache.get(1), Ok(75.0));
    }
}
