//! Platform-agnostic plant monitor logic.
//!
//! Shared between the Pico 2 firmware and the desktop simulator. Nothing in
//! here touches hardware or time; the platform layer supplies readings through
//! a [`SensorBank`] and applies what [`Monitor::tick`] decides.
//!
//! - [`param`]: parameter identities, definitions and the validated table
//! - [`thresholds`]: default bounds and the default table
//! - [`cache`]: per-tick reading cache and the sensor reader capability
//! - [`evaluate`]: bounds checks and warning selection
//! - [`alert`]: buzzer and grow-light policy
//! - [`frame`]: character grid mirroring the LCD
//! - [`display`]: screen rendering and rotation
//! - [`console`]: diagnostic text lines
//! - [`format`]: fixed-precision number formatting
//! - [`monitor`]: the per-tick pipeline
//! - [`config`]: build-time configuration
//! - [`error`]: sensor faults and configuration errors
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and allocates nothing. Strings are
//! `heapless` and every collection is a fixed-size array.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod alert;
pub mod cache;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod frame;
pub mod monitor;
pub mod param;
pub mod thresholds;

// Re-export commonly used items
pub use alert::{AlertActions, AlertMode};
pub use cache::{Reading, SensorBank, ValueCache};
pub use config::*;
pub use display::Screen;
pub use error::{ConfigError, SensorFault};
pub use evaluate::{Evaluation, Status};
pub use frame::{LcdFrame, TextFrame};
pub use monitor::{Monitor, TickReport};
pub use param::{ParamDef, ParamId, ParamTable};
pub use thresholds::{DEFAULT_PARAMS, PARAM_COUNT};
