//! Two-channel PPG sampler for pulse-transit-time measurements.
//!
//! Samples two analog PPG sensors at a fixed cadence and streams
//! `timestamp,ch1,ch2` lines over the serial port, framed by start/end
//! sentinels. The library is written against `embedded-hal` so the sampling
//! loop runs unchanged on the ATmega128 and under host tests.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod application;
pub mod config;
pub mod drivers;
pub mod error;
pub mod logger;
pub mod os;
pub mod protocol;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::{Application, Phase, WindowSummary};

#[doc(hidden)]
pub use ufmt;
pub use error::{Error, Result};
