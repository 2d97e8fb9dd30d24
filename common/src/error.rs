//! Error types shared by the core and the platform layers.
//!
//! - [`SensorFault`]: a reader could not produce a usable value. Faults are
//!   surfaced as their own warning category and never mistaken for an
//!   out-of-range reading.
//! - [`ConfigError`]: a parameter definition is malformed. Returned by
//!   [`ParamTable::new`](crate::param::ParamTable::new) at start-up.

use core::fmt;

/// Why a sensor reading is unavailable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorFault {
    /// The cache slot has not been populated yet.
    NotSampled,
    /// The sensor did not answer in time.
    Timeout,
    /// The sensor answered but the frame checksum did not match.
    Checksum,
    /// The reading is pinned at a rail, the probe is likely unplugged.
    Disconnected,
    /// The reader returned NaN or infinity.
    InvalidValue,
}

impl SensorFault {
    /// Short lowercase label used in console lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotSampled => "not sampled",
            Self::Timeout => "timeout",
            Self::Checksum => "checksum",
            Self::Disconnected => "disconnected",
            Self::InvalidValue => "invalid value",
        }
    }
}

impl fmt::Display for SensorFault {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parameter definition that cannot be used.
///
/// `index` is the position of the offending definition in the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min_value` is greater than `max_value`.
    InvertedBounds { index: usize },
    /// The full name is empty.
    EmptyName { index: usize },
    /// The display abbreviation is empty.
    EmptyShortName { index: usize },
    /// More decimal places than the formatter supports.
    TooManyDecimals { index: usize },
    /// The same parameter id appears twice.
    DuplicateParam { index: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvertedBounds { index } => write!(f, "parameter {index}: min is greater than max"),
            Self::EmptyName { index } => write!(f, "parameter {index}: empty name"),
            Self::EmptyShortName { index } => write!(f, "parameter {index}: empty short name"),
            Self::TooManyDecimals { index } => write!(f, "parameter {index}: too many decimal places"),
            Self::DuplicateParam { index } => write!(f, "parameter {index}: duplicate id"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
