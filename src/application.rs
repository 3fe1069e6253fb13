//! Sampler-Reporter: the duty-cycled sampling loop

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::serial::Write;

use crate::config::{DutyPolicy, SamplerConfig, BANNER};
use crate::drivers::{Heartbeat, PpgFrontEnd, SerialConsole};
use crate::error::Result;
use crate::os::{elapsed_since, Monotonic};
use crate::protocol::Sample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The next step opens a collection window
    Collecting,
    /// Between windows of the cyclic policy
    Idle,
    /// One-shot window done; terminal
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSummary {
    pub samples: u32,
    pub last_timestamp_ms: Option<u32>,
}

pub struct Application<W, A, ADC, CH1, CH2, LED, CLK, D> {
    console: SerialConsole<W>,
    front_end: PpgFrontEnd<A, ADC, CH1, CH2>,
    heartbeat: Heartbeat<LED>,
    clock: CLK,
    delay: D,
    config: SamplerConfig,
    phase: Phase,
}

impl<W, A, ADC, CH1, CH2, LED, CLK, D> Application<W, A, ADC, CH1, CH2, LED, CLK, D>
where
    W: Write<u8>,
    CH1: Channel<A>,
    CH2: Channel<A>,
    ADC: OneShot<A, u16, CH1> + OneShot<A, u16, CH2>,
    LED: OutputPin,
    CLK: Monotonic,
    D: DelayMs<u16> + DelayMs<u32>,
{
    pub fn new(
        console: SerialConsole<W>,
        front_end: PpgFrontEnd<A, ADC, CH1, CH2>,
        led: LED,
        clock: CLK,
        delay: D,
        config: SamplerConfig,
    ) -> Self {
        Self {
            console,
            front_end,
            heartbeat: Heartbeat::new(led, config.heartbeat_hold_ms),
            clock,
            delay,
            config,
            phase: Phase::Collecting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Wait for the host to attach, then print the banner.
    ///
    /// Blocks forever if `ready` never goes high.
    pub fn boot<R: InputPin>(&mut self, ready: &R) -> Result<()> {
        self.console.wait_ready(ready);

        crate::info!(self.console, "{}", BANNER)?;
        match self.config.policy {
            DutyPolicy::Cyclic { idle_ms } => crate::info!(
                self.console,
                "Collecting data for {} ms every {} ms",
                self.config.collection_ms,
                self.config.collection_ms + idle_ms
            )?,
            DutyPolicy::OneShot => crate::info!(
                self.console,
                "Recording once for {} ms",
                self.config.collection_ms
            )?,
        }
        crate::debug!(
            self.console,
            "period={}ms adc={}bit heartbeat={}ms lines/window~{}",
            self.config.sample_period_ms,
            self.config.resolution.bits(),
            self.config.heartbeat_hold_ms.unwrap_or(0),
            self.config.samples_per_window()
        )?;
        Ok(())
    }

    /// One complete collection window, start sentinel to end sentinel
    pub fn run_window(&mut self) -> Result<WindowSummary> {
        self.console.write_line(self.config.sentinels.start)?;

        let start = self.clock.now_ms();
        let mut summary = WindowSummary {
            samples: 0,
            last_timestamp_ms: None,
        };

        loop {
            let timestamp_ms = elapsed_since(start, self.clock.now_ms());
            if timestamp_ms >= self.config.collection_ms {
                break;
            }

            let (channel1, channel2) = self.front_end.read_pair()?;
            Sample::new(timestamp_ms, channel1, channel2).write_line(&mut self.console)?;
            self.heartbeat.pulse(&mut self.delay)?;

            summary.samples += 1;
            summary.last_timestamp_ms = Some(timestamp_ms);

            DelayMs::<u16>::delay_ms(&mut self.delay, self.config.sample_period_ms);
        }

        self.console.write_line(self.config.sentinels.end)?;
        self.console.flush()?;
        Ok(summary)
    }

    /// Advance the duty cycle by one phase and return the phase entered.
    ///
    /// Once `Halted`, this returns immediately and writes nothing.
    pub fn step(&mut self) -> Result<Phase> {
        self.phase = match (self.phase, self.config.policy) {
            (Phase::Halted, _) => Phase::Halted,
            (Phase::Collecting, DutyPolicy::Cyclic { .. }) => {
                self.run_window()?;
                Phase::Idle
            }
            (Phase::Collecting, DutyPolicy::OneShot) => {
                self.run_window()?;
                Phase::Halted
            }
            (Phase::Idle, DutyPolicy::Cyclic { idle_ms }) => {
                DelayMs::<u32>::delay_ms(&mut self.delay, idle_ms);
                Phase::Collecting
            }
            (Phase::Idle, DutyPolicy::OneShot) => Phase::Halted,
        };
        Ok(self.phase)
    }
}
