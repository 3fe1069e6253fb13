pub mod adc;
pub mod gpio;
pub mod power;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, Adc0, Adc1};
pub use gpio::board;
pub use power::Power;
pub use timer::{init_millis, Delay, Millis};
pub use uart::Uart;
