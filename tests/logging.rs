//! Log macros used from outside the crate, through its own `ufmt` re-export

use ppg_ptt_firmware::ufmt::uWrite;

struct Transcript(String);

impl uWrite for Transcript {
    type Error = core::convert::Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.push_str(s);
        Ok(())
    }
}

#[test]
fn info_formats_arguments_in_a_downstream_crate() {
    let mut out = Transcript(String::new());
    ppg_ptt_firmware::info!(out, "window={}ms idle={}ms", 10_000u32, 50_000u32).unwrap();
    assert_eq!(out.0, "[INF] window=10000ms idle=50000ms\r\n");
}

#[test]
fn debug_is_silent_unless_enabled() {
    let mut out = Transcript(String::new());
    ppg_ptt_firmware::debug!(out, "period={}ms", 10u16).unwrap();
    if ppg_ptt_firmware::logger::Level::Debug.enabled() {
        assert_eq!(out.0, "[DBG] period=10ms\r\n");
    } else {
        assert!(out.0.is_empty());
    }
}
