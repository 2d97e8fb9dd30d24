//! HD44780 character LCD driver, 4-bit parallel, write-only.
//!
//! RW is tied to ground so the busy flag cannot be read; every command is
//! followed by a fixed delay instead. Only full lines are written, so the
//! whole display is redrawn from a [`TextFrame`] and no character from an
//! earlier screen can survive.
//!
//! # Init Sequence
//!
//! The controller powers up in an unknown 4/8-bit state. Sending `0x3` three
//! times forces 8-bit mode, then `0x2` switches to 4-bit mode, after which
//! full commands can be sent as two nibbles.

use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer, block_for};
use plant_monitor_common::TextFrame;

// HD44780 Commands
const CLEAR_DISPLAY: u8 = 0x01;
const ENTRY_MODE_SET: u8 = 0x04;
const DISPLAY_CONTROL: u8 = 0x08;
const FUNCTION_SET: u8 = 0x20;
const SET_DDRAM_ADDR: u8 = 0x80;

// Command flags
const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const TWO_LINES: u8 = 0x08;

/// DDRAM address of the first column of each row.
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Execution time of ordinary commands (datasheet: 37 µs).
const COMMAND_DELAY_US: u64 = 50;

/// Execution time of clear / return home (datasheet: 1.52 ms).
const CLEAR_DELAY_US: u64 = 2000;

pub struct Hd44780<'d> {
    rs: Output<'d>,
    en: Output<'d>,
    /// D4, D5, D6, D7.
    data: [Output<'d>; 4],
}

impl<'d> Hd44780<'d> {
    pub fn new(
        rs: Output<'d>,
        en: Output<'d>,
        data: [Output<'d>; 4],
    ) -> Self {
        Self { rs, en, data }
    }

    /// Initialize the controller: 4-bit bus, two lines, display on, cursor
    /// hidden, left-to-right entry.
    pub async fn init(&mut self) {
        // Wait for VCC to settle after power-on
        Timer::after_millis(50).await;

        self.rs.set_low();
        self.write_nibble(0x03);
        Timer::after_millis(5).await;
        self.write_nibble(0x03);
        Timer::after_millis(5).await;
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x02);

        self.command(FUNCTION_SET | TWO_LINES);
        self.command(DISPLAY_CONTROL | DISPLAY_ON);
        self.clear();
        self.command(ENTRY_MODE_SET | ENTRY_INCREMENT);
    }

    /// Blank the display and home the cursor.
    pub fn clear(&mut self) {
        self.command(CLEAR_DISPLAY);
        block_for(Duration::from_micros(CLEAR_DELAY_US));
    }

    /// Move the cursor. Rows beyond the fourth wrap onto row 0.
    pub fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) {
        let offset = ROW_OFFSETS[usize::from(row) % ROW_OFFSETS.len()];
        self.command(SET_DDRAM_ADDR | offset.wrapping_add(col));
    }

    /// Write raw character codes at the cursor.
    pub fn write_bytes(
        &mut self,
        bytes: &[u8],
    ) {
        for &byte in bytes {
            self.write_byte(byte, Level::High);
        }
    }

    /// Redraw every line of `frame`.
    pub fn write_frame<const W: usize, const H: usize>(
        &mut self,
        frame: &TextFrame<W, H>,
    ) {
        for row in 0..H {
            self.set_cursor(0, row as u8);
            self.write_bytes(frame.line_bytes(row));
        }
    }

    fn command(
        &mut self,
        cmd: u8,
    ) {
        self.write_byte(cmd, Level::Low);
    }

    /// Send one byte as two nibbles, high nibble first. `rs` selects data
    /// (high) or instruction (low).
    fn write_byte(
        &mut self,
        byte: u8,
        rs: Level,
    ) {
        self.rs.set_level(rs);
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        block_for(Duration::from_micros(COMMAND_DELAY_US));
    }

    fn write_nibble(
        &mut self,
        nibble: u8,
    ) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(Level::from((nibble >> bit) & 1 != 0));
        }
        // Data is latched on the falling edge of E (min pulse width 450 ns)
        self.en.set_high();
        block_for(Duration::from_micros(1));
        self.en.set_low();
        block_for(Duration::from_micros(1));
    }
}
