use avr_device::atmega128a::TC0;
use avr_device::interrupt::{self, Mutex};
use embedded_hal::blocking::delay::DelayMs;

use crate::config::CPU_FREQ_HZ;
use crate::os::{elapsed_since, Monotonic, TickCounter};

const WGM01: u8 = 1 << 3;
const OCIE0: u8 = 1 << 1;
// Timer0 clock select codes differ from the other timers on this part
const CS0_DIV64: u8 = 4;

// 16MHz / 64 = 250kHz, 250 counts = 1ms
const OCR_1MS: u8 = (CPU_FREQ_HZ / 64 / 1000 - 1) as u8;

static MILLIS: Mutex<TickCounter> = Mutex::new(TickCounter::new());

/// Start Timer0 in CTC mode interrupting every millisecond.
///
/// Interrupts must be enabled globally for the clock to advance.
pub fn init_millis() {
    unsafe {
        let p = TC0::ptr();
        (*p).tcnt0.write(|w| w.bits(0));
        (*p).ocr0.write(|w| w.bits(OCR_1MS));
        (*p).tccr0.write(|w| w.bits(WGM01 | CS0_DIV64));
        (*p).timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
    }
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    interrupt::free(|cs| MILLIS.borrow(cs).tick());
}

/// Handle on the Timer0 millisecond counter
#[derive(Clone, Copy, Default)]
pub struct Millis;

impl Monotonic for Millis {
    fn now_ms(&self) -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get_ticks())
    }
}

/// Busy-wait delay on top of the millisecond counter
#[derive(Clone, Copy, Default)]
pub struct Delay;

impl Delay {
    fn wait(&mut self, ms: u32) {
        let start = Millis.now_ms();
        while elapsed_since(start, Millis.now_ms()) < ms {}
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.wait(ms as u32);
    }
}

impl DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        self.wait(ms);
    }
}
