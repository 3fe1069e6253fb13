use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::error::{Error, Result};

/// Activity LED blinked once per sample
pub struct Heartbeat<P> {
    led: P,
    hold_ms: Option<u16>,
}

impl<P: OutputPin> Heartbeat<P> {
    /// `hold_ms` of `None` keeps the LED dark
    pub fn new(led: P, hold_ms: Option<u16>) -> Self {
        Self { led, hold_ms }
    }

    /// High, hold, low. Adds `hold_ms` of latency to the caller.
    pub fn pulse<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<()> {
        let hold = match self.hold_ms {
            Some(hold) => hold,
            None => return Ok(()),
        };
        self.led.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(hold);
        self.led.set_low().map_err(|_| Error::Pin)
    }

    pub fn is_enabled(&self) -> bool {
        self.hold_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};

    #[test]
    fn pulse_sets_then_clears() {
        let expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ];
        let mut led = PinMock::new(&expectations);
        let mut heartbeat = Heartbeat::new(led.clone(), Some(1));

        heartbeat.pulse(&mut MockNoop::new()).unwrap();
        led.done();
    }

    #[test]
    fn disabled_heartbeat_never_touches_the_pin() {
        let mut led = PinMock::new(&[]);
        let mut heartbeat = Heartbeat::new(led.clone(), None);

        assert!(!heartbeat.is_enabled());
        heartbeat.pulse(&mut MockNoop::new()).unwrap();
        led.done();
    }
}
