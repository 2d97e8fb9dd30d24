//! Board configuration.
//!
//! - `pins`: GPIO assignments for the Pico 2 wiring
//! - `sensors`: ADC scaling, DHT22 timing and buzzer pulse length

pub mod pins;
pub mod sensors;

// Re-export at config level for convenience
pub use pins::{
    BUZZER_GPIO,
    DHT22_GPIO,
    LCD_DATA_GPIOS,
    LCD_E_GPIO,
    LCD_RS_GPIO,
    LIGHT_ADC_GPIO,
    LIGHT_RELAY_GPIO,
    SOIL_ADC_GPIO,
};
pub use sensors::{
    ADC_FULL_SCALE,
    ADC_RAIL_MARGIN,
    ALERT_PULSE_MS,
    DHT22_BIT_TIMEOUT_US,
    DHT22_MIN_INTERVAL_MS,
    DHT22_ONE_THRESHOLD_US,
    DHT22_START_LOW_US,
    LIGHT_ADC_INVERTED,
    SOIL_ADC_SHIFT,
};
