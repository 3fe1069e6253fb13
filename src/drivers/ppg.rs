//! Two-channel PPG sensor front end

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::config::AdcResolution;
use crate::error::{Error, Result};

/// Reads the two PPG sensors through one ADC
pub struct PpgFrontEnd<A, ADC, CH1, CH2> {
    adc: ADC,
    sensor1: CH1,
    sensor2: CH2,
    max_value: u16,
    _adc: PhantomData<A>,
}

impl<A, ADC, CH1, CH2> PpgFrontEnd<A, ADC, CH1, CH2>
where
    CH1: Channel<A>,
    CH2: Channel<A>,
    ADC: OneShot<A, u16, CH1> + OneShot<A, u16, CH2>,
{
    pub fn new(adc: ADC, sensor1: CH1, sensor2: CH2, resolution: AdcResolution) -> Self {
        Self {
            adc,
            sensor1,
            sensor2,
            max_value: resolution.max_value(),
            _adc: PhantomData,
        }
    }

    /// Read sensor 1, then sensor 2
    pub fn read_pair(&mut self) -> Result<(u16, u16)> {
        let first = nb::block!(OneShot::<A, u16, CH1>::read(&mut self.adc, &mut self.sensor1))
            .map_err(|_| Error::Adc)?;
        let second = nb::block!(OneShot::<A, u16, CH2>::read(&mut self.adc, &mut self.sensor2))
            .map_err(|_| Error::Adc)?;
        Ok((first.min(self.max_value), second.min(self.max_value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::adc::{Mock as AdcMock, MockChan0, MockChan1, Transaction as AdcTransaction};

    #[test]
    fn reads_channel_one_then_two() {
        let expectations = [
            AdcTransaction::read(0, 512u16),
            AdcTransaction::read(1, 300u16),
        ];
        let mut adc = AdcMock::new(&expectations);
        let mut front_end = PpgFrontEnd::new(adc.clone(), MockChan0, MockChan1, AdcResolution::Bits10);

        assert_eq!(front_end.read_pair(), Ok((512, 300)));
        adc.done();
    }

    #[test]
    fn clamps_to_resolution() {
        let expectations = [
            AdcTransaction::read(0, 4095u16),
            AdcTransaction::read(1, 1024u16),
        ];
        let mut adc = AdcMock::new(&expectations);
        let mut front_end = PpgFrontEnd::new(adc.clone(), MockChan0, MockChan1, AdcResolution::Bits10);

        assert_eq!(front_end.read_pair(), Ok((1023, 1023)));
        adc.done();
    }
}
