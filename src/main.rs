#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use ppg_ptt_firmware::config::{AdcResolution, BUILD_VARIANT};
    use ppg_ptt_firmware::drivers::{PpgFrontEnd, SerialConsole};
    use ppg_ptt_firmware::hal::{board, init_millis, Adc, Adc0, Adc1, Delay, Millis, Power, Uart};
    use ppg_ptt_firmware::{Application, Phase};

    #[avr_device::entry]
    fn main() -> ! {
        // The ATmega128 ADC is 10-bit whatever the preset asks for
        let config = BUILD_VARIANT.config().with_resolution(AdcResolution::Bits10);

        init_millis();
        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        let console = SerialConsole::new(Uart::new());
        let front_end = PpgFrontEnd::new(Adc::new(), Adc0, Adc1, config.resolution);
        let led = unsafe { board::LED0::steal() }.into_output();
        let ready = unsafe { board::HOST_READY::steal() }.into_input();
        let mut power = Power::new();

        let mut app = Application::new(console, front_end, led, Millis, Delay, config);

        // A failed boot never starts a session
        if app.boot(&ready).is_ok() {
            loop {
                match app.step() {
                    Ok(Phase::Halted) | Err(_) => break,
                    Ok(_) => {}
                }
            }
        }

        loop {
            power.enter_idle_mode();
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("ppg_ptt_firmware runs on the ATmega128; build with an AVR target");
}
