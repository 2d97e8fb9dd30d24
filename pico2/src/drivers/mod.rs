//! Hardware drivers for the plant monitor.
//!
//! - `hd44780`: 4-bit character LCD driver
//! - `dht22`: bit-banged DHT22 air humidity / temperature sensor

mod dht22;
mod hd44780;

pub use dht22::Dht22;
pub use hd44780::Hd44780;
