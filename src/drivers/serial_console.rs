use embedded_hal::digital::v2::InputPin;
use embedded_hal::serial::Write;
use ufmt::uWrite;

use crate::error::{Error, Result};
use crate::protocol::LINE_END;

/// Text console on top of a byte-oriented serial transmitter
pub struct SerialConsole<W> {
    uart: W,
}

impl<W: Write<u8>> SerialConsole<W> {
    pub fn new(uart: W) -> Self {
        Self { uart }
    }

    /// Block until `ready` reads high (host attached). There is no timeout.
    pub fn wait_ready<R: InputPin>(&mut self, ready: &R) {
        while !ready.is_high().unwrap_or(false) {}
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        nb::block!(self.uart.write(byte)).map_err(|_| Error::Serial)
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, s: &str) -> Result<()> {
        self.write_str(s)?;
        self.write_str(LINE_END)
    }

    /// Wait until every queued byte has left the transmitter
    pub fn flush(&mut self) -> Result<()> {
        nb::block!(self.uart.flush()).map_err(|_| Error::Serial)
    }
}

impl<W: Write<u8>> uWrite for SerialConsole<W> {
    type Error = Error;

    fn write_str(&mut self, s: &str) -> Result<()> {
        SerialConsole::write_str(self, s)
    }
}
