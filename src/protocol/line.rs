use ufmt::{uWrite, uwrite};

use super::{trim_line_end, ProtocolError, Result, Sentinels, LINE_END};

/// One reading of both PPG channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Milliseconds since the window started
    pub timestamp_ms: u32,
    pub channel1: u16,
    pub channel2: u16,
}

impl Sample {
    pub fn new(timestamp_ms: u32, channel1: u16, channel2: u16) -> Self {
        Self {
            timestamp_ms,
            channel1,
            channel2,
        }
    }

    /// Encode as `<timestamp_ms>,<channel1>,<channel2>\r\n`
    pub fn write_line<W: uWrite>(&self, w: &mut W) -> core::result::Result<(), W::Error> {
        uwrite!(w, "{},{},{}", self.timestamp_ms, self.channel1, self.channel2)?;
        w.write_str(LINE_END)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Start,
    End,
    Data(Sample),
}

/// Classify one received line against the given sentinel pair.
pub fn decode_line(line: &str, sentinels: &Sentinels) -> Result<Line> {
    let line = trim_line_end(line);
    if line.is_empty() {
        return Err(ProtocolError::Empty);
    }
    if line == sentinels.start {
        return Ok(Line::Start);
    }
    if line == sentinels.end {
        return Ok(Line::End);
    }

    let mut fields = line.split(',');
    let timestamp_ms = parse_field::<u32>(fields.next())?;
    let channel1 = parse_field::<u16>(fields.next())?;
    let channel2 = parse_field::<u16>(fields.next())?;
    if fields.next().is_some() {
        return Err(ProtocolError::ExtraField);
    }

    Ok(Line::Data(Sample::new(timestamp_ms, channel1, channel2)))
}

fn parse_field<T: core::str::FromStr>(field: Option<&str>) -> Result<T> {
    let field = field.ok_or(ProtocolError::MissingField)?;
    // FromStr accepts a leading '+', the wire format never carries one
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::InvalidNumber);
    }
    field.parse().map_err(|_| ProtocolError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Text(String);

    impl uWrite for Text {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> core::result::Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn encodes_csv_with_crlf() {
        let mut out = Text(String::new());
        Sample::new(1234, 4095, 0).write_line(&mut out).unwrap();
        assert_eq!(out.0, "1234,4095,0\r\n");
    }

    #[test]
    fn widest_line_fits_the_buffer_bound() {
        let mut out = Text(String::new());
        Sample::new(u32::MAX, u16::MAX, u16::MAX).write_line(&mut out).unwrap();
        assert_eq!(out.0, "4294967295,65535,65535\r\n");
        assert_eq!(out.0.len(), 24);
    }

    #[test]
    fn decodes_sentinels_and_data() {
        let s = Sentinels::DATA_COLLECTION;
        assert_eq!(decode_line("START_DATA_COLLECTION\r\n", &s), Ok(Line::Start));
        assert_eq!(decode_line("END_DATA_COLLECTION", &s), Ok(Line::End));
        assert_eq!(
            decode_line("40,512,1023\n", &s),
            Ok(Line::Data(Sample::new(40, 512, 1023)))
        );
    }

    #[test]
    fn other_pair_sentinels_are_not_markers() {
        let s = Sentinels::DATA_COLLECTION;
        assert_eq!(decode_line("START_RECORDING", &s), Err(ProtocolError::InvalidNumber));
    }

    #[test]
    fn rejects_malformed_data() {
        let s = Sentinels::RECORDING;
        assert_eq!(decode_line("\r\n", &s), Err(ProtocolError::Empty));
        assert_eq!(decode_line("10,20", &s), Err(ProtocolError::MissingField));
        assert_eq!(decode_line("10,20,30,40", &s), Err(ProtocolError::ExtraField));
        assert_eq!(decode_line("10,-1,30", &s), Err(ProtocolError::InvalidNumber));
        assert_eq!(decode_line("10,+1,30", &s), Err(ProtocolError::InvalidNumber));
        assert_eq!(decode_line("10,,30", &s), Err(ProtocolError::InvalidNumber));
        assert_eq!(decode_line("10,70000,30", &s), Err(ProtocolError::InvalidNumber));
        assert_eq!(decode_line("[INF] banner", &s), Err(ProtocolError::InvalidNumber));
    }
}
