//! Console logging outside of data sessions
//!
//! Log lines carry a `[INF] ` / `[DBG] ` tag so they never parse as data. They
//! are only written before the first session starts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
}

impl Level {
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Info => "[INF] ",
            Level::Debug => "[DBG] ",
        }
    }

    pub const fn enabled(self) -> bool {
        match self {
            Level::Info => true,
            Level::Debug => cfg!(feature = "debug"),
        }
    }
}

/// `log!(console, Level::Info, "fmt", args..)` -> `Result<(), console error>`
#[macro_export]
macro_rules! log {
    ($w:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::logger::Level = $level;
        if level.enabled() {
            // uwrite! expands to bare `ufmt::` paths
            use $crate::ufmt;
            let w = &mut $w;
            match ufmt::uWrite::write_str(w, level.tag()) {
                Ok(()) => match ufmt::uwrite!(w, $($arg)+) {
                    Ok(()) => ufmt::uWrite::write_str(w, $crate::protocol::LINE_END),
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            }
        } else {
            Ok(())
        }
    }};
}

#[macro_export]
macro_rules! info {
    ($w:expr, $($arg:tt)+) => {
        $crate::log!($w, $crate::logger::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($w:expr, $($arg:tt)+) => {
        $crate::log!($w, $crate::logger::Level::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ufmt::uWrite;

    struct Text(String);

    impl uWrite for Text {
        type Error = ();

        fn write_str(&mut self, s: &str) -> Result<(), ()> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn info_lines_are_tagged() {
        let mut out = Text(String::new());
        crate::info!(out, "window {} ms", 10_000u32).unwrap();
        assert_eq!(out.0, "[INF] window 10000 ms\r\n");
    }

    #[test]
    fn debug_follows_feature() {
        let mut out = Text(String::new());
        crate::debug!(out, "period {}", 10u16).unwrap();
        if Level::Debug.enabled() {
            assert_eq!(out.0, "[DBG] period 10\r\n");
        } else {
            assert!(out.0.is_empty());
        }
    }
}
