//! In-memory character grid mirroring the LCD.
//!
//! Screens are rendered into a [`TextFrame`] and the platform layer copies the
//! frame to the real display (or draws it in the simulator). A full frame is
//! always pushed, so characters from an earlier, longer screen can never
//! survive a redraw.
//!
//! Only printable ASCII is stored; anything else becomes `?` since the HD44780
//! character ROM has no reliable mapping for it.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Frame matching the configured LCD.
pub type LcdFrame = TextFrame<DISPLAY_WIDTH, DISPLAY_HEIGHT>;

/// `W` columns by `H` rows of ASCII with a write cursor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextFrame<const W: usize, const H: usize> {
    cells: [[u8; W]; H],
    col: usize,
    row: usize,
}

impl<const W: usize, const H: usize> TextFrame<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    /// Blank frame with the cursor home.
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; W]; H],
            col: 0,
            row: 0,
        }
    }

    /// Blank every cell and home the cursor.
    pub fn clear(&mut self) {
        self.cells = [[b' '; W]; H];
        self.col = 0;
        self.row = 0;
    }

    /// Move the cursor. Positions outside the grid are clamped.
    pub fn set_cursor(
        &mut self,
        col: usize,
        row: usize,
    ) {
        self.row = row.min(H.saturating_sub(1));
        self.col = col.min(W);
    }

    /// Current `(col, row)`.
    #[inline]
    pub const fn cursor(&self) -> (usize, usize) { (self.col, self.row) }

    /// Columns left on the current line.
    #[inline]
    pub const fn remaining(&self) -> usize { W - self.col }

    /// Write `text` at the cursor, clipping at the end of the line.
    ///
    /// Returns the number of characters actually written.
    pub fn write_str(
        &mut self,
        text: &str,
    ) -> usize {
        let mut written = 0;
        for c in text.chars() {
            if self.col >= W || H == 0 {
                break;
            }
            self.cells[self.row][self.col] = if c.is_ascii_graphic() || c == ' ' { c as u8 } else { b'?' };
            self.col += 1;
            written += 1;
        }
        written
    }

    /// Move to the start of the next line.
    ///
    /// Returns `false` (cursor parked past the end of the last line) when
    /// there is no next line.
    pub fn line_end(&mut self) -> bool {
        if self.row + 1 < H {
            self.row += 1;
            self.col = 0;
            true
        } else {
            self.col = W;
            false
        }
    }

    /// Raw bytes of `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= H`.
    #[inline]
    pub fn line_bytes(
        &self,
        row: usize,
    ) -> &[u8; W] {
        &self.cells[row]
    }

    /// Text of `row`, padded with spaces to the full width.
    ///
    /// # Panics
    ///
    /// Panics if `row >= H`.
    pub fn line(
        &self,
        row: usize,
    ) -> &str {
        // Cells only ever hold printable ASCII
        core::str::from_utf8(&self.cells[row]).unwrap_or("")
    }

    /// Iterate over all rows, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ { (0..H).map(|row| self.line(row)) }
}

impl<const W: usize, const H: usize> Default for TextFrame<W, H> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
