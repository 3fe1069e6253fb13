//! System time tracking

use core::cell::Cell;

/// Free-running millisecond clock
pub trait Monotonic {
    fn now_ms(&self) -> u32;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Millisecond counter advanced from the timer interrupt
pub struct TickCounter {
    tick_count: Cell<u32>,
}

impl TickCounter {
    /// Create new counter starting at zero
    pub const fn new() -> Self {
        Self {
            tick_count: Cell::new(0),
        }
    }

    /// Advance by one millisecond, wrapping after ~49.7 days
    #[inline]
    pub fn tick(&self) {
        let count = self.tick_count.get();
        self.tick_count.set(count.wrapping_add(1));
    }

    /// Get current tick count
    #[inline]
    pub fn get_ticks(&self) -> u32 {
        self.tick_count.get()
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Monotonic for TickCounter {
    fn now_ms(&self) -> u32 {
        self.get_ticks()
    }
}

/// Milliseconds from `start` to `now`, correct across counter rollover
#[inline]
pub fn elapsed_since(start: u32, now: u32) -> u32 {
    now.wrapping_sub(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_advances_per_tick() {
        let clock = TickCounter::new();
        assert_eq!(clock.now_ms(), 0);
        for _ in 0..25 {
            clock.tick();
        }
        assert_eq!(clock.now_ms(), 25);
    }

    #[test]
    fn elapsed_survives_rollover() {
        let start = u32::MAX - 4;
        let clock = TickCounter::new();
        clock.tick_count.set(start);
        for _ in 0..10 {
            clock.tick();
        }
        assert_eq!(clock.now_ms(), 5);
        assert_eq!(elapsed_since(start, clock.now_ms()), 10);
    }
}
