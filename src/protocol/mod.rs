//! Line-oriented serial protocol
//!
//! One session is a start sentinel, any number of `timestamp,ch1,ch2` data
//! lines, and an end sentinel. Lines end in CRLF; decoders also accept a bare LF.

pub mod line;
pub mod session;

pub use line::{decode_line, Line, Sample};
pub use session::{SessionDecoder, SessionEvent, SessionState};

pub const LINE_END: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    Empty,
    MissingField,
    ExtraField,
    InvalidNumber,
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Start/end marker pair delimiting one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    pub start: &'static str,
    pub end: &'static str,
}

impl Sentinels {
    pub const DATA_COLLECTION: Sentinels = Sentinels {
        start: "START_DATA_COLLECTION",
        end: "END_DATA_COLLECTION",
    };

    pub const RECORDING: Sentinels = Sentinels {
        start: "START_RECORDING",
        end: "END_RECORDING",
    };
}

/// Strip the line terminator, tolerating CRLF, LF or none
pub fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}
