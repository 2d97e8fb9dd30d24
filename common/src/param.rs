//! Parameter definitions and the validated parameter table.
//!
//! A [`ParamDef`] is immutable configuration. The value read for it each tick
//! lives in [`ValueCache`](crate::cache::ValueCache), indexed parallel to the
//! table, so the definitions can stay in flash.

use crate::error::ConfigError;
use crate::format::MAX_DECIMAL_PLACES;

/// The monitored environmental quantities.
///
/// Identifies which reader a definition is sampled from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamId {
    SoilHumidity,
    AmbientBrightness,
    AirHumidity,
    AirTemperature,
}

impl ParamId {
    /// Every id, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::SoilHumidity,
        Self::AmbientBrightness,
        Self::AirHumidity,
        Self::AirTemperature,
    ];
}

/// Definition of one monitored parameter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParamDef {
    /// Reader this parameter is sampled from.
    pub id: ParamId,
    /// Full label for the console.
    pub name: &'static str,
    /// Abbreviation for the LCD.
    pub short_name: &'static str,
    /// Lowest acceptable value (inclusive).
    pub min_value: i32,
    /// Highest acceptable value (inclusive).
    pub max_value: i32,
    /// Warning shown when the value is too low.
    pub message_lacking: &'static str,
    /// Warning shown when the value is too high.
    pub message_exceeding: &'static str,
    /// Swaps `message_lacking` and `message_exceeding`, for sensors whose
    /// scale runs opposite to the quantity they measure.
    pub invert_min_max: bool,
    /// Digits after the decimal point on the LCD and console.
    pub decimal_places: u8,
}

impl ParamDef {
    /// Check this definition in isolation. `index` is reported in the error.
    pub const fn validate(
        &self,
        index: usize,
    ) -> Result<(), ConfigError> {
        if self.min_value > self.max_value {
            return Err(ConfigError::InvertedBounds { index });
        }
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        if self.short_name.is_empty() {
            return Err(ConfigError::EmptyShortName { index });
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::TooManyDecimals { index });
        }
        Ok(())
    }
}

/// Fixed, validated, ordered list of parameter definitions.
///
/// Built once at start-up and never modified.
#[derive(Clone, Debug)]
pub struct ParamTable<const N: usize> {
    defs: [ParamDef; N],
}

impl<const N: usize> ParamTable<N> {
    /// Validate `defs` and wrap them.
    ///
    /// Rejects inverted bounds, empty labels, unsupported precision and ids
    /// that appear more than once.
    pub fn new(defs: [ParamDef; N]) -> Result<Self, ConfigError> {
        for (index, def) in defs.iter().enumerate() {
            def.validate(index)?;
            if defs[..index].iter().any(|earlier| earlier.id == def.id) {
                return Err(ConfigError::DuplicateParam { index });
            }
        }
        Ok(Self { defs })
    }

    /// Number of parameters.
    #[inline]
    pub const fn len(&self) -> usize { N }

    #[inline]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Definition at `index`, if any.
    #[inline]
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&ParamDef> {
        self.defs.get(index)
    }

    /// Position of the parameter sampled from `id`.
    pub fn index_of(
        &self,
        id: ParamId,
    ) -> Option<usize> {
        self.defs.iter().position(|def| def.id == id)
    }

    /// Iterate over definitions in table order.
    pub fn iter(&self) -> core::slice::Iter<'_, ParamDef> { self.defs.iter() }

    /// All definitions as a slice.
    #[inline]
    pub const fn defs(&self) -> &[ParamDef; N] { &self.defs }
}

impl<'a, const N: usize> IntoIterator for &'a ParamTable<N> {
    type IntoIter = core::slice::Iter<'a, ParamDef>;
    type Item = &'a ParamDef;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::DEFAULT_PARAMS;

    fn def(id: ParamId) -> ParamDef {
        ParamDef {
            id,
            name: "Test",
            short_name: "X",
            min_value: 10,
            max_value: 20,
            message_lacking: "low",
            message_exceeding: "high",
            invert_min_max: false,
            decimal_places: 1,
        }
    }

    #[test]
    fn test_valid_table() {
        let table = ParamTable::new([def(ParamId::SoilHumidity), def(ParamId::AirHumidity)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.index_of(ParamId::AirHumidity), Some(1));
        assert_eq!(table.index_of(ParamId::AirTemperature), None);
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let mut d = def(ParamId::SoilHumidity);
        d.min_value = 15;
        d.max_value = 15;
        assert!(ParamTable::new([d]).is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let mut d = def(ParamId::AirTemperature);
        d.min_value = 41;
        d.max_value = 40;
        let err = ParamTable::new([def(ParamId::SoilHumidity), d]).unwrap_err();
        assert_eq!(err, ConfigError::InvertedBounds { index: 1 });
    }

    #[test]
    fn test_rejects_empty_labels() {
        let mut d = def(ParamId::SoilHumidity);
        d.name = "";
        assert_eq!(ParamTable::new([d]).unwrap_err(), ConfigError::EmptyName { index: 0 });

        let mut d = def(ParamId::SoilHumidity);
        d.short_name = "";
        assert_eq!(ParamTable::new([d]).unwrap_err(), ConfigError::EmptyShortName { index: 0 });
    }

    #[test]
    fn test_rejects_too_many_decimals() {
        let mut d = def(ParamId::SoilHumidity);
        d.decimal_places = MAX_DECIMAL_PLACES + 1;
        assert_eq!(ParamTable::new([d]).unwrap_err(), ConfigError::TooManyDecimals { index: 0 });
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ParamTable::new([def(ParamId::AirHumidity), def(ParamId::AirHumidity)]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateParam { index: 1 });
    }

    #[test]
    fn test_iteration_keeps_order() {
        let table = ParamTable::new(DEFAULT_PARAMS).unwrap();
        let ids: [ParamId; 4] = core::array::from_fn(|i| table.get(i).unwrap().id);
        assert_eq!(ids, ParamId::ALL);
        assert_eq!((&table).into_iter().count(), 4);
    }
}
