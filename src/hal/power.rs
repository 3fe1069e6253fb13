use avr_device::atmega128a::CPU;

// MCUCR: SE=5, SM1=4, SM0=3, SM2=2; idle is all SM bits clear
const SE: u8 = 1 << 5;
const SM_MASK: u8 = 0x1C;

pub struct Power {
    _private: (),
}

impl Power {
    pub fn new() -> Self {
        Self { _private: () }
    }

    #[inline]
    fn sleep(&mut self) {
        unsafe {
            let p = CPU::ptr();
            (*p).mcucr.modify(|r, w| w.bits(r.bits() | SE));
            avr_device::asm::sleep();
            (*p).mcucr.modify(|r, w| w.bits(r.bits() & !SE));
        }
    }

    /// Sleep until the next interrupt (the 1ms tick keeps running)
    pub fn enter_idle_mode(&mut self) {
        unsafe {
            let p = CPU::ptr();
            (*p).mcucr.modify(|r, w| w.bits(r.bits() & !SM_MASK));
        }
        self.sleep();
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::new()
    }
}
