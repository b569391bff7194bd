#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use atmega_timer_pwm::clock::{Clock, MHz16};
use atmega_timer_pwm::{ClockSelect, DutyCycles, Hertz, PwmConfig, Timer1Pwm};
use panic_halt as _;

const BAUD_RATE: u32 = 9600;

/// 10-bit resolution off `clk_io / 8`: 1953.125 Hz at 16 MHz.
const PWM: PwmConfig = PwmConfig::new(10, 8);

/// 512 of 1023 on D9, 256 of 1023 on D10.
const DUTIES: DutyCycles = DutyCycles { a: 512, b: 256 };

const REFRESH_MS: u32 = 1000;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, BAUD_RATE);

    ufmt::uwriteln!(&mut serial, "Timer1 PWM on D9/D10\r").unwrap_infallible();

    let mut timer = Timer1Pwm::new(dp.TC1, pins.d9.into_output(), pins.d10.into_output());
    atmega_timer_pwm::configure::<MHz16, _, _>(&mut timer, &mut serial, PWM);

    if !ClockSelect::is_exact(PWM.prescaler) {
        let hz =
            atmega_timer_pwm::effective_frequency_hz(MHz16::FREQ, PWM.prescaler, PWM.bit_depth);
        ufmt::uwriteln!(
            &mut serial,
            "prescaler {} unsupported, running at /{} ({} Hz)\r",
            PWM.prescaler,
            PWM.clock_select().divisor(),
            Hertz(hz)
        )
        .unwrap_infallible();
    }

    let mut delay = arduino_hal::Delay::new();
    atmega_timer_pwm::drive_forever(&mut timer, &mut delay, DUTIES, REFRESH_MS)
}
