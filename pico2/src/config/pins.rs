//! GPIO assignments.
//!
//! | Function | GPIO | Notes |
//! |----------|------|-------|
//! | Soil probe | 26 | ADC0 |
//! | Photoresistor | 27 | ADC1 |
//! | DHT22 data | 7 | single-wire, external 10k pull-up |
//! | Buzzer | 6 | active buzzer, high = sound |
//! | Light relay | 13 | high = light on |
//! | LCD RS / E | 12 / 11 | HD44780, write-only (RW tied to GND) |
//! | LCD D4-D7 | 5, 4, 3, 2 | 4-bit bus |
//!
//! The firmware claims the matching `PIN_n` peripherals by hand; these numbers
//! are what gets logged at start-up and what the checks below validate.

// =============================================================================
// Analog Inputs
// =============================================================================

/// Soil humidity probe.
pub const SOIL_ADC_GPIO: u8 = 26;

/// Photoresistor divider.
pub const LIGHT_ADC_GPIO: u8 = 27;

// =============================================================================
// Digital I/O
// =============================================================================

/// DHT22 air humidity / temperature sensor.
pub const DHT22_GPIO: u8 = 7;

/// Alert buzzer.
pub const BUZZER_GPIO: u8 = 6;

/// Grow-light relay.
pub const LIGHT_RELAY_GPIO: u8 = 13;

// =============================================================================
// LCD
// =============================================================================

pub const LCD_RS_GPIO: u8 = 12;
pub const LCD_E_GPIO: u8 = 11;

/// D4, D5, D6, D7.
pub const LCD_DATA_GPIOS: [u8; 4] = [5, 4, 3, 2];

// =============================================================================
// Compile-time Validation
// =============================================================================

const ALL_PINS: [u8; 11] = [
    SOIL_ADC_GPIO,
    LIGHT_ADC_GPIO,
    DHT22_GPIO,
    BUZZER_GPIO,
    LIGHT_RELAY_GPIO,
    LCD_RS_GPIO,
    LCD_E_GPIO,
    LCD_DATA_GPIOS[0],
    LCD_DATA_GPIOS[1],
    LCD_DATA_GPIOS[2],
    LCD_DATA_GPIOS[3],
];

const fn pins_are_distinct(pins: &[u8]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i] == pins[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// RP2350A exposes ADC inputs on GPIO 26-29 only.
const fn is_adc_pin(pin: u8) -> bool { pin >= 26 && pin <= 29 }

const _: () = assert!(pins_are_distinct(&ALL_PINS));
const _: () = assert!(is_adc_pin(SOIL_ADC_GPIO) && is_adc_pin(LIGHT_ADC_GPIO));
