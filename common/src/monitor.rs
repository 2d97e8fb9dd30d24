//! The per-tick pipeline.
//!
//! [`Monitor`] owns the parameter table and all state carried between ticks.
//! Each [`Monitor::tick`] runs:
//!
//! 1. read every sensor into the [`ValueCache`]
//! 2. evaluate the cache against the table
//! 3. decide buzzer and light outputs
//! 4. pick the screen
//! 5. render it into the [`LcdFrame`]
//!
//! The caller applies the outputs, pushes the frame and logs the console
//! lines. That split keeps this module free of hardware and time.

use crate::alert::{AlertActions, AlertMode, Alerting};
use crate::cache::{SensorBank, ValueCache};
use crate::config::{ALERT_MODE, DISPLAY_GREETING, LIGHT_TRIGGER, ROTATION_DWELL_TICKS};
use crate::console::{ConsoleLine, write_all_values};
use crate::display::{DisplayRotation, Screen, display_greeting, render_screen};
use crate::error::ConfigError;
use crate::evaluate::Evaluation;
use crate::frame::LcdFrame;
use crate::param::{ParamId, ParamTable};
use crate::thresholds::{DEFAULT_PARAMS, PARAM_COUNT};

/// What happened during one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickReport<const N: usize> {
    /// Every parameter in range.
    pub all_ok: bool,
    /// Buzzer and light decisions.
    pub actions: AlertActions,
    /// Screen rendered into the frame.
    pub screen: Screen,
    /// Per-parameter status.
    pub evaluation: Evaluation<N>,
}

/// Monitoring state machine for `N` parameters.
#[derive(Clone, Debug)]
pub struct Monitor<const N: usize> {
    table: ParamTable<N>,
    cache: ValueCache<N>,
    alerting: Alerting,
    rotation: DisplayRotation,
    frame: LcdFrame,
}

impl Monitor<PARAM_COUNT> {
    /// Monitor for the default parameter table and build-time configuration.
    pub fn from_config() -> Result<Self, ConfigError> {
        Ok(Self::new(
            ParamTable::new(DEFAULT_PARAMS)?,
            ALERT_MODE,
            LIGHT_TRIGGER,
            ROTATION_DWELL_TICKS,
        ))
    }
}

impl<const N: usize> Monitor<N> {
    pub fn new(
        table: ParamTable<N>,
        alert_mode: AlertMode,
        light_trigger: ParamId,
        dwell_ticks: u16,
    ) -> Self {
        Self {
            table,
            cache: ValueCache::new(),
            alerting: Alerting::new(alert_mode, light_trigger),
            rotation: DisplayRotation::new(dwell_ticks),
            frame: LcdFrame::new(),
        }
    }

    /// Render the start-up greeting into the frame.
    pub fn greet(&mut self) -> &LcdFrame {
        display_greeting(&mut self.frame, DISPLAY_GREETING);
        &self.frame
    }

    /// Run one tick against `bank`.
    pub fn tick<B: SensorBank + ?Sized>(
        &mut self,
        bank: &mut B,
    ) -> TickReport<N> {
        self.cache.update_all(&self.table, bank);
        let evaluation = Evaluation::evaluate(&self.table, &self.cache);
        let actions = self.alerting.update(&self.table, &evaluation);
        let screen = self.rotation.advance(&evaluation);
        render_screen(&mut self.frame, screen, &self.table, &self.cache, &evaluation);

        TickReport {
            all_ok: evaluation.is_all_ok(),
            actions,
            screen,
            evaluation,
        }
    }

    /// Console lines for the values read by the last tick.
    pub fn console_lines(&self) -> impl Iterator<Item = ConsoleLine> + '_ { write_all_values(&self.table, &self.cache) }

    /// Frame rendered by the last tick (or the greeting).
    #[inline]
    pub const fn frame(&self) -> &LcdFrame { &self.frame }

    #[inline]
    pub const fn table(&self) -> &ParamTable<N> { &self.table }

    #[inline]
    pub const fn cache(&self) -> &ValueCache<N> { &self.cache }

    /// Current grow-light state.
    #[inline]
    pub const fn light_on(&self) -> bool { self.alerting.light_on() }
}

// =============================================================================
// Unit Tests
// =============================================================================
