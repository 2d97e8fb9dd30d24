//! Build-time configuration for the monitor.
//!
//! Everything here is fixed at compile time; there is no runtime
//! reconfiguration. Pin assignments live in the firmware crate since they
//! only make sense for one board.

use crate::alert::AlertMode;
use crate::param::ParamId;

// =============================================================================
// Display Configuration
// =============================================================================

/// Character columns of the LCD (HD44780 1602 module).
pub const DISPLAY_WIDTH: usize = 16;

/// Character rows of the LCD.
pub const DISPLAY_HEIGHT: usize = 2;

/// Shown on the first line while the sensors settle after power-up.
pub const DISPLAY_GREETING: &str = "HELLO!";

// HD44780 controllers address at most 40 columns and 4 rows.
const _: () = assert!(DISPLAY_WIDTH > 0 && DISPLAY_WIDTH <= 40);
const _: () = assert!(DISPLAY_HEIGHT > 0 && DISPLAY_HEIGHT <= 4);
const _: () = assert!(DISPLAY_GREETING.len() <= DISPLAY_WIDTH);

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between two ticks of the monitoring loop.
pub const UPDATE_INTERVAL_MS: u64 = 1000;

/// Delay after power-up before the first tick, lets the sensors stabilize.
pub const INIT_DELAY_MS: u64 = 2000;

/// How many ticks each rotation screen stays visible while something fails.
pub const ROTATION_DWELL_TICKS: u16 = 2;

const _: () = assert!(UPDATE_INTERVAL_MS > 0);
const _: () = assert!(ROTATION_DWELL_TICKS > 0);

// =============================================================================
// Alerting Configuration
// =============================================================================

/// Buzzer policy. Beeps when the aggregate turns bad, then once a minute.
pub const ALERT_MODE: AlertMode = AlertMode::OnTransition { repeat_ticks: 60 };

/// Parameter whose "lacking" state switches the grow light on.
pub const LIGHT_TRIGGER: ParamId = ParamId::AmbientBrightness;
