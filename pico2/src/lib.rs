//! Plant monitor firmware library: the host-testable part of the Pico 2 build.
//!
//! Pin map, sensor scaling, DHT22 decoding and the per-tick sensor snapshot
//! live here. The binary (`main.rs`) adds the drivers and Embassy tasks.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p plant-monitor-pico2 --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod analog;
pub mod config;
pub mod dht22;
pub mod readings;

pub use dht22::{Dht22Reading, Dht22Result, Dht22Sampler};
pub use readings::SensorSnapshot;
