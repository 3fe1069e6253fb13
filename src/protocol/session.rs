//! Consumer-side view of the stream: finds sessions and checks their data

use super::{decode_line, Line, Sample, Sentinels};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Outside a session, waiting for a start sentinel
    Waiting,
    /// Between start and end sentinels
    Recording,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Sample(Sample),
    /// The end sentinel arrived; `samples` data lines were accepted
    Ended { samples: u32 },
    /// Line outside a session or not parsable, skipped
    Ignored,
    /// Timestamp went backwards within a session
    OutOfOrder(Sample),
    /// A channel reading exceeds the configured ADC range
    OutOfRange(Sample),
}

pub struct SessionDecoder {
    sentinels: Sentinels,
    max_value: u16,
    state: SessionState,
    samples: u32,
    last_timestamp: Option<u32>,
}

impl SessionDecoder {
    pub fn new(sentinels: Sentinels, max_value: u16) -> Self {
        Self {
            sentinels,
            max_value,
            state: SessionState::Waiting,
            samples: 0,
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Samples accepted in the current (or last) session
    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn feed(&mut self, line: &str) -> SessionEvent {
        let decoded = match decode_line(line, &self.sentinels) {
            Ok(decoded) => decoded,
            Err(_) => return SessionEvent::Ignored,
        };

        match (self.state, decoded) {
            (_, Line::Start) => {
                // A second start without an end restarts the session
                self.state = SessionState::Recording;
                self.samples = 0;
                self.last_timestamp = None;
                SessionEvent::Started
            }
            (SessionState::Recording, Line::End) => {
                self.state = SessionState::Waiting;
                SessionEvent::Ended {
                    samples: self.samples,
                }
            }
            (SessionState::Recording, Line::Data(sample)) => {
                if sample.channel1 > self.max_value || sample.channel2 > self.max_value {
                    return SessionEvent::OutOfRange(sample);
                }
                if matches!(self.last_timestamp, Some(last) if sample.timestamp_ms < last) {
                    return SessionEvent::OutOfOrder(sample);
                }
                self.last_timestamp = Some(sample.timestamp_ms);
                self.samples += 1;
                SessionEvent::Sample(sample)
            }
            (SessionState::Waiting, _) => SessionEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> SessionDecoder {
        SessionDecoder::new(Sentinels::RECORDING, 1023)
    }

    #[test]
    fn data_before_start_is_ignored() {
        let mut d = decoder();
        assert_eq!(d.feed("[INF] PPG PTT Data Collection System\r\n"), SessionEvent::Ignored);
        assert_eq!(d.feed("0,1,2\r\n"), SessionEvent::Ignored);
        assert_eq!(d.feed("END_RECORDING\r\n"), SessionEvent::Ignored);
        assert_eq!(d.state(), SessionState::Waiting);
    }

    #[test]
    fn full_session() {
        let mut d = decoder();
        assert_eq!(d.feed("START_RECORDING\r\n"), SessionEvent::Started);
        assert_eq!(d.feed("0,100,200\r\n"), SessionEvent::Sample(Sample::new(0, 100, 200)));
        assert_eq!(d.feed("garbage"), SessionEvent::Ignored);
        assert_eq!(d.feed("11,101,201\r\n"), SessionEvent::Sample(Sample::new(11, 101, 201)));
        assert_eq!(d.feed("END_RECORDING\r\n"), SessionEvent::Ended { samples: 2 });
        assert_eq!(d.state(), SessionState::Waiting);
    }

    #[test]
    fn flags_order_and_range_violations() {
        let mut d = decoder();
        d.feed("START_RECORDING");
        d.feed("20,1,1");
        assert_eq!(d.feed("20,1,1"), SessionEvent::Sample(Sample::new(20, 1, 1)));
        assert_eq!(d.feed("19,1,1"), SessionEvent::OutOfOrder(Sample::new(19, 1, 1)));
        assert_eq!(d.feed("30,1024,1"), SessionEvent::OutOfRange(Sample::new(30, 1024, 1)));
        assert_eq!(d.samples(), 2);
    }

    #[test]
    fn restart_resets_counters() {
        let mut d = decoder();
        d.feed("START_RECORDING");
        d.feed("50,1,1");
        assert_eq!(d.feed("START_RECORDING"), SessionEvent::Started);
        assert_eq!(d.samples(), 0);
        assert_eq!(d.feed("0,1,1"), SessionEvent::Sample(Sample::new(0, 1, 1)));
    }
}
