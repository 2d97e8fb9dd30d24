//! Build script for plant-monitor-pico2
//!
//! Puts `memory.x` on the linker search path and adds the cortex-m-rt and
//! defmt linker scripts. Host builds (tests) skip all of it.

use std::path::PathBuf;
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Only the RP2350 firmware needs the linker setup
    if env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default() != "arm" {
        return;
    }

    let out = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
