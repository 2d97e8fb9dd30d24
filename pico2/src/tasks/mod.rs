//! Async tasks for the plant monitor firmware.
//!
//! - `buzzer`: alert pulse task, so the tick never waits on a beep

pub mod buzzer;

pub use buzzer::{BEEP_SIGNAL, buzzer_task};
