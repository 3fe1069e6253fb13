use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        // Host builds only carry the library and its tests
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    // Debug builds get the [DBG] console lines at boot
    if env::var("PROFILE").map(|p| p == "debug").unwrap_or(false) {
        println!("cargo:rustc-cfg=feature=\"debug\"");
    }

    let variant = if env::var("CARGO_FEATURE_ONE_SHOT").is_ok() {
        "recording (one-shot)"
    } else {
        "ptt-cycle (cyclic)"
    };
    println!("cargo:warning=Building PPG sampler for ATmega128 at 16MHz, variant {}", variant);
}
