use avr_device::atmega128a::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

macro_rules! adc_channels {
    ($($name:ident => $mux:expr),+ $(,)?) => {
        $(
            /// Analog input on PORTF
            pub struct $name;

            impl Channel<Adc> for $name {
                type ID = u8;

                fn channel() -> u8 {
                    $mux
                }
            }
        )+
    };
}

adc_channels!(
    Adc0 => 0,
    Adc1 => 1,
);

/// 10-bit successive-approximation ADC
pub struct Adc {
    _private: (),
}

impl Adc {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // Enable ADC, prescaler div128 (125kHz @ 16MHz)
            (*p).adcsra.write(|w| w.bits(0x87));
            // Reference voltage = AVCC
            (*p).admux.write(|w| w.bits(0x40));
        }
        Self { _private: () }
    }

    fn convert(&mut self, channel: u8) -> u16 {
        unsafe {
            let p = ADC::ptr();

            // Select channel
            (*p).admux.modify(|r, w| {
                w.bits((r.bits() & 0xE0) | (channel & 0x07))
            });

            // Start conversion
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | 0x40));

            // Wait for completion
            while (*p).adcsra.read().bits() & 0x40 != 0 {}

            // Read result (ADCL must be read first)
            (*p).adc.read().bits()
        }
    }
}

impl<CH: Channel<Adc, ID = u8>> OneShot<Adc, u16, CH> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut CH) -> nb::Result<u16, Infallible> {
        Ok(self.convert(CH::channel()))
    }
}

impl Default for Adc {
    fn default() -> Self {
        Self::new()
    }
}
