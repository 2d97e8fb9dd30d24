//! Drawing the 16x2 LCD and the output indicators.
//!
//! Each character cell is drawn as a dim block (the unlit 5x8 dot matrix)
//! with the character on top, like a blue-backlight 1602 module.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::SimulatorDisplay;
use plant_monitor_common::{DISPLAY_HEIGHT, DISPLAY_WIDTH, LcdFrame};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

// =============================================================================
// Layout
// =============================================================================

const CELL_WIDTH: u32 = 14;
const CELL_HEIGHT: u32 = 24;
const CELL_GAP: u32 = 2;
const MARGIN: u32 = 12;

const LCD_WIDTH: u32 = DISPLAY_WIDTH as u32 * (CELL_WIDTH + CELL_GAP) - CELL_GAP + 2 * MARGIN;
const LCD_HEIGHT: u32 = DISPLAY_HEIGHT as u32 * (CELL_HEIGHT + CELL_GAP) - CELL_GAP + 2 * MARGIN;

/// Height of the indicator strip below the LCD.
const STATUS_HEIGHT: u32 = 36;
const INDICATOR_DIAMETER: u32 = 14;

/// Window size in pixels.
pub const SCREEN_SIZE: Size = Size::new(LCD_WIDTH, LCD_HEIGHT + STATUS_HEIGHT);

// =============================================================================
// Colors
// =============================================================================

const BEZEL: Rgb565 = Rgb565::new(2, 4, 2);
const BACKLIGHT: Rgb565 = Rgb565::new(2, 14, 28);
const UNLIT_CELL: Rgb565 = Rgb565::new(3, 18, 30);
const PIXEL_ON: Rgb565 = Rgb565::new(28, 60, 31);
const LIGHT_ON: Rgb565 = Rgb565::new(31, 56, 0);
const BUZZER_ON: Rgb565 = Rgb565::new(31, 8, 0);
const INDICATOR_OFF: Rgb565 = Rgb565::new(6, 12, 6);
const LABEL: Rgb565 = Rgb565::new(20, 40, 20);

const CHAR_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, PIXEL_ON);
const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, LABEL);

/// Top-left corner of the cell at `col`, `row`.
const fn cell_origin(
    col: usize,
    row: usize,
) -> Point {
    Point::new(
        (MARGIN + col as u32 * (CELL_WIDTH + CELL_GAP)) as i32,
        (MARGIN + row as u32 * (CELL_HEIGHT + CELL_GAP)) as i32,
    )
}

/// Draw the full LCD from `frame`.
pub fn draw_lcd(
    display: &mut SimulatorDisplay<Rgb565>,
    frame: &LcdFrame,
) {
    Rectangle::new(Point::zero(), Size::new(LCD_WIDTH, LCD_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BACKLIGHT))
        .draw(display)
        .ok();

    let cell_style = PrimitiveStyle::with_fill(UNLIT_CELL);
    for row in 0..DISPLAY_HEIGHT {
        for (col, &byte) in frame.line_bytes(row).iter().enumerate() {
            let origin = cell_origin(col, row);
            Rectangle::new(origin, Size::new(CELL_WIDTH, CELL_HEIGHT))
                .into_styled(cell_style)
                .draw(display)
                .ok();

            if byte != b' ' {
                let mut buf = [0u8; 4];
                let text = char::from(byte).encode_utf8(&mut buf);
                Text::with_baseline(text, origin + Point::new(1, 0), CHAR_STYLE, Baseline::Top)
                    .draw(display)
                    .ok();
            }
        }
    }
}

/// Draw the grow-light and buzzer indicators below the LCD.
pub fn draw_status(
    display: &mut SimulatorDisplay<Rgb565>,
    light_on: bool,
    buzzer_on: bool,
    selected: &str,
) {
    let top = LCD_HEIGHT as i32;
    Rectangle::new(Point::new(0, top), Size::new(LCD_WIDTH, STATUS_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BEZEL))
        .draw(display)
        .ok();

    let center_y = top + (STATUS_HEIGHT / 2) as i32;
    draw_indicator(display, Point::new(MARGIN as i32, center_y), "LIGHT", light_on, LIGHT_ON);
    draw_indicator(display, Point::new(MARGIN as i32 + 80, center_y), "BUZZ", buzzer_on, BUZZER_ON);

    Text::with_baseline(
        selected,
        Point::new(MARGIN as i32 + 160, center_y),
        LABEL_STYLE,
        Baseline::Middle,
    )
    .draw(display)
    .ok();
}

fn draw_indicator(
    display: &mut SimulatorDisplay<Rgb565>,
    left_center: Point,
    label: &str,
    on: bool,
    on_color: Rgb565,
) {
    let color = if on { on_color } else { INDICATOR_OFF };
    let radius = (INDICATOR_DIAMETER / 2) as i32;
    Circle::new(left_center - Point::new(0, radius), INDICATOR_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    Text::with_baseline(
        label,
        left_center + Point::new(INDICATOR_DIAMETER as i32 + 6, 0),
        LABEL_STYLE,
        Baseline::Middle,
    )
    .draw(display)
    .ok();
}
