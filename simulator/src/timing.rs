//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are derived here from the millisecond values in the
//! common crate.

use std::time::Duration;

use plant_monitor_common::{INIT_DELAY_MS, UPDATE_INTERVAL_MS};

/// Event polling period (~50 Hz). Keeps the window responsive between ticks.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between monitor ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(UPDATE_INTERVAL_MS);

/// How long the greeting stays up before the first tick.
pub const INIT_DELAY: Duration = Duration::from_millis(INIT_DELAY_MS);

/// How long the buzzer indicator stays lit after a beep.
pub const BEEP_FLASH: Duration = Duration::from_millis(200);

/// Simulated seconds per tick. Faster than real time so the waves cross the
/// bounds within a minute or two.
pub const SIM_SECONDS_PER_TICK: f32 = 4.0;
