use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// Double-speed mode: UBRR = F_CPU / (8 * baud) - 1, 16 at 115200 (2.1% error)
const UBRR: u16 = (CPU_FREQ_HZ / (8 * UART_BAUD) - 1) as u16;

const UDRE: u8 = 1 << 5;
const TXC: u8 = 1 << 6;
const U2X: u8 = 1 << 1;

/// Polled transmitter on USART0, 8N1
pub struct Uart {
    _private: (),
}

impl Uart {
    pub fn new() -> Self {
        unsafe {
            let p = USART0::ptr();

            (*p).ucsr0a.write(|w| w.bits(U2X));
            (*p).ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            (*p).ubrr0l.write(|w| w.bits(UBRR as u8));

            // Enable TX only, the host never talks back
            (*p).ucsr0b.write(|w| w.bits(1 << 3));
            // 8 data bits, no parity, 1 stop bit
            (*p).ucsr0c.write(|w| w.bits(0x06));
        }

        Self { _private: () }
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & UDRE == 0 {
                return Err(nb::Error::WouldBlock);
            }
            // Clear TXC (write one) so flush can wait on this byte
            (*p).ucsr0a.modify(|r, w| w.bits(r.bits() | TXC));
            (*p).udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        unsafe {
            let status = (*USART0::ptr()).ucsr0a.read().bits();
            if status & UDRE == 0 || status & TXC == 0 {
                return Err(nb::Error::WouldBlock);
            }
        }
        Ok(())
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}
