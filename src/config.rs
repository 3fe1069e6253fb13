//! Configuration constants for the PPG sampler firmware

use crate::protocol::Sentinels;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate expected by the host consumer
pub const UART_BAUD: u32 = 115_200;

/// Sample period of the PTT cycle variant (100 Hz)
pub const SAMPLE_PERIOD_MS: u16 = 10;

/// Collection window of the PTT cycle variant
pub const COLLECTION_TIME_MS: u32 = 10_000;

/// Idle time after a PTT cycle window (60 seconds total cycle)
pub const WAIT_TIME_MS: u32 = 50_000;

/// Collection window of the recording variant
pub const RECORDING_TIME_MS: u32 = 30_000;

/// Heartbeat LED hold time of the recording variant
pub const HEARTBEAT_HOLD_MS: u16 = 1;

pub const BANNER: &str = "PPG PTT Data Collection System";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdcResolution {
    Bits10,
    Bits12,
}

impl AdcResolution {
    pub const fn bits(self) -> u8 {
        match self {
            AdcResolution::Bits10 => 10,
            AdcResolution::Bits12 => 12,
        }
    }

    /// Largest reading representable at this resolution
    pub const fn max_value(self) -> u16 {
        (1 << self.bits()) - 1
    }
}

/// What happens once a collection window has ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DutyPolicy {
    /// Idle for `idle_ms`, then start the next window, forever
    Cyclic { idle_ms: u32 },
    /// Stop for good after the first window
    OneShot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    pub sentinels: Sentinels,
    pub sample_period_ms: u16,
    pub collection_ms: u32,
    pub policy: DutyPolicy,
    pub resolution: AdcResolution,
    /// `None` disables the heartbeat pulse
    pub heartbeat_hold_ms: Option<u16>,
}

impl SamplerConfig {
    pub const fn with_resolution(mut self, resolution: AdcResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Nominal number of data lines per window, ignoring read latency
    pub const fn samples_per_window(&self) -> u32 {
        let tick = self.sample_period_ms as u32 + match self.heartbeat_hold_ms {
            Some(hold) => hold as u32,
            None => 0,
        };
        if tick == 0 {
            return self.collection_ms;
        }
        (self.collection_ms + tick - 1) / tick
    }
}

/// Build-time presets of the sampler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// 10 s of 100 Hz data every minute
    PttCycle,
    /// A single recording session with LED heartbeat, then halt
    Recording,
}

impl Variant {
    pub const fn config(self) -> SamplerConfig {
        match self {
            Variant::PttCycle => SamplerConfig {
                sentinels: Sentinels::DATA_COLLECTION,
                sample_period_ms: SAMPLE_PERIOD_MS,
                collection_ms: COLLECTION_TIME_MS,
                policy: DutyPolicy::Cyclic { idle_ms: WAIT_TIME_MS },
                resolution: AdcResolution::Bits12,
                heartbeat_hold_ms: None,
            },
            Variant::Recording => SamplerConfig {
                sentinels: Sentinels::RECORDING,
                sample_period_ms: SAMPLE_PERIOD_MS,
                collection_ms: RECORDING_TIME_MS,
                policy: DutyPolicy::OneShot,
                resolution: AdcResolution::Bits10,
                heartbeat_hold_ms: Some(HEARTBEAT_HOLD_MS),
            },
        }
    }
}

#[cfg(not(feature = "one-shot"))]
pub const BUILD_VARIANT: Variant = Variant::PttCycle;

#[cfg(feature = "one-shot")]
pub const BUILD_VARIANT: Variant = Variant::Recording;
