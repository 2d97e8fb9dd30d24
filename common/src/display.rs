//! LCD screens and the rotation between them.
//!
//! # Screens
//!
//! - **Values**: every parameter as `<short>:<value>`, separated by one
//!   space, wrapping to the next line when a slot does not fit. Slots that do
//!   not fit on the last line are dropped.
//! - **Warning**: the message of one failing parameter, word-wrapped over the
//!   lines. A sensor fault shows the parameter name and `SENSOR FAULT`.
//!
//! # Rotation
//!
//! While everything is in range the Values screen stays up. As soon as
//! something fails the first warning is shown, then the display cycles
//! Values, warning 1, warning 2, ... in table order, holding each screen for
//! the dwell time. A warning whose parameter recovers is skipped at the next
//! tick.
//!
//! ```text
//! all OK ──fail──> Warning(first) ──dwell──> Warning(next) ... ──dwell──> Values ──dwell──> Warning(first)
//!    ^                                                                                        │
//!    └──────────────────────────────────── all OK ────────────────────────────────────────────┘
//! ```

use heapless::String;

use crate::cache::{Reading, ValueCache};
use crate::evaluate::{Evaluation, Status, warning_message};
use crate::format::{INVALID_VALUE_TEXT, VALUE_TEXT_LEN, format_value};
use crate::frame::TextFrame;
use crate::param::ParamTable;

/// Second line of the sensor fault screen.
pub const FAULT_TEXT: &str = "SENSOR FAULT";

/// Capacity of one `<short>:<value>` slot.
const SLOT_LEN: usize = VALUE_TEXT_LEN + 8;

/// What the LCD shows this tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// All current values.
    #[default]
    Values,
    /// Warning for the parameter at this table index.
    Warning(usize),
}

// =============================================================================
// Rendering
// =============================================================================

/// Clear the frame before a render pass.
#[inline]
pub fn reset_display<const W: usize, const H: usize>(frame: &mut TextFrame<W, H>) { frame.clear(); }

/// Text of one value slot, e.g. `T:23.5` or `H:ERR`.
pub fn value_slot(
    short_name: &str,
    reading: Reading,
    decimal_places: u8,
) -> String<SLOT_LEN> {
    let mut slot: String<SLOT_LEN> = String::new();
    let _ = slot.push_str(short_name);
    let _ = slot.push(':');
    match reading {
        Ok(value) => {
            let _ = slot.push_str(&format_value(value, decimal_places));
        }
        Err(_) => {
            let _ = slot.push_str(INVALID_VALUE_TEXT);
        }
    }
    slot
}

/// Write one value slot at the cursor, moving to the next line first if the
/// slot does not fit in the rest of the current one.
///
/// Returns `false` when the display is full and the slot was dropped.
pub fn display_value<const W: usize, const H: usize>(
    frame: &mut TextFrame<W, H>,
    short_name: &str,
    reading: Reading,
    decimal_places: u8,
) -> bool {
    let slot = value_slot(short_name, reading, decimal_places);
    let (col, _) = frame.cursor();
    let separator = usize::from(col > 0);

    if col > 0 && slot.len() + separator > frame.remaining() {
        if !display_line_end(frame) {
            return false;
        }
    } else if separator > 0 {
        frame.write_str(" ");
    }
    frame.write_str(&slot);
    true
}

/// Move to the next display line. `false` if already on the last one.
#[inline]
pub fn display_line_end<const W: usize, const H: usize>(frame: &mut TextFrame<W, H>) -> bool { frame.line_end() }

/// Render the Values screen.
pub fn display_all_values<const W: usize, const H: usize, const N: usize>(
    frame: &mut TextFrame<W, H>,
    table: &ParamTable<N>,
    cache: &ValueCache<N>,
) {
    reset_display(frame);
    for (i, def) in table.iter().enumerate() {
        if !display_value(frame, def.short_name, cache.get(i), def.decimal_places) {
            break;
        }
    }
}

/// Render `message` word-wrapped over the display lines.
///
/// Words longer than a line are split; text past the last line is dropped.
pub fn display_warning<const W: usize, const H: usize>(
    frame: &mut TextFrame<W, H>,
    message: &str,
) {
    reset_display(frame);
    if W == 0 {
        return;
    }

    for word in message.split_whitespace() {
        let (col, _) = frame.cursor();
        if col > 0 {
            if word.chars().count() < frame.remaining() {
                frame.write_str(" ");
                frame.write_str(word);
                continue;
            }
            if !display_line_end(frame) {
                return;
            }
        }

        let mut rest = word;
        while !rest.is_empty() {
            let split = rest.char_indices().nth(frame.remaining()).map_or(rest.len(), |(i, _)| i);
            frame.write_str(&rest[..split]);
            rest = &rest[split..];
            if !rest.is_empty() && !display_line_end(frame) {
                return;
            }
        }
    }
}

/// Render the sensor fault screen for the parameter called `name`.
pub fn display_fault<const W: usize, const H: usize>(
    frame: &mut TextFrame<W, H>,
    name: &str,
) {
    reset_display(frame);
    frame.write_str(name);
    if display_line_end(frame) {
        frame.write_str(FAULT_TEXT);
    }
}

/// Render `greeting` centred on the first line.
pub fn display_greeting<const W: usize, const H: usize>(
    frame: &mut TextFrame<W, H>,
    greeting: &str,
) {
    reset_display(frame);
    let len = greeting.chars().count();
    frame.set_cursor(W.saturating_sub(len) / 2, 0);
    frame.write_str(greeting);
}

/// Render `screen` from this tick's snapshot.
///
/// A warning index that is not failing (or not in the table) falls back to
/// the Values screen.
pub fn render_screen<const W: usize, const H: usize, const N: usize>(
    frame: &mut TextFrame<W, H>,
    screen: Screen,
    table: &ParamTable<N>,
    cache: &ValueCache<N>,
    evaluation: &Evaluation<N>,
) {
    if let Screen::Warning(index) = screen
        && let (Some(def), Some(status)) = (table.get(index), evaluation.status(index))
    {
        if let Status::Fault(_) = status {
            display_fault(frame, def.name);
            return;
        }
        if let Some(message) = warning_message(def, status) {
            display_warning(frame, message);
            return;
        }
    }
    display_all_values(frame, table, cache);
}

// =============================================================================
// Rotation
// =============================================================================

/// Chooses the screen for each tick.
#[derive(Clone, Debug)]
pub struct DisplayRotation {
    screen: Screen,
    dwell_ticks: u16,
    shown_ticks: u16,
    rotating: bool,
}

impl DisplayRotation {
    /// `dwell_ticks` is how long each screen stays up while rotating (min 1).
    pub const fn new(dwell_ticks: u16) -> Self {
        Self {
            screen: Screen::Values,
            dwell_ticks: if dwell_ticks == 0 { 1 } else { dwell_ticks },
            shown_ticks: 0,
            rotating: false,
        }
    }

    /// Pick the screen for this tick.
    pub fn advance<const N: usize>(
        &mut self,
        evaluation: &Evaluation<N>,
    ) -> Screen {
        if evaluation.is_all_ok() {
            self.screen = Screen::Values;
            self.shown_ticks = 0;
            self.rotating = false;
            return self.screen;
        }

        let recovered = match self.screen {
            Screen::Warning(i) => evaluation.status(i).is_none_or(Status::is_ok),
            Screen::Values => false,
        };
        if !self.rotating || recovered || self.shown_ticks >= self.dwell_ticks {
            self.screen = self.next_screen(evaluation);
            self.shown_ticks = 0;
            self.rotating = true;
        }
        self.shown_ticks = self.shown_ticks.saturating_add(1);
        self.screen
    }

    fn next_screen<const N: usize>(
        &self,
        evaluation: &Evaluation<N>,
    ) -> Screen {
        let after = match self.screen {
            Screen::Values => None,
            Screen::Warning(i) => Some(i),
        };
        evaluation.next_failing_after(after).map_or(Screen::Values, Screen::Warning)
    }

    /// Screen chosen by the last `advance`.
    #[inline]
    pub const fn screen(&self) -> Screen { self.screen }
}

// =============================================================================
// Unit Tests
// =============================================================================
