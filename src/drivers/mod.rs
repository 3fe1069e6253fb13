pub mod heartbeat;
pub mod ppg;
pub mod serial_console;

pub use heartbeat::Heartbeat;
pub use ppg::PpgFrontEnd;
pub use serial_console::SerialConsole;
