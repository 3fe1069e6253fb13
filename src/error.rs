//! Error type shared by the sampler drivers

/// Failure of one of the underlying HAL peripherals.
///
/// The AVR drivers never produce these; they exist because the sampler is
/// written against the fallible `embedded-hal` traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Serial,
    Adc,
    Pin,
}

pub type Result<T> = core::result::Result<T, Error>;
