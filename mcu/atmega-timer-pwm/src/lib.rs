#![no_std]

//! `atmega-timer-pwm`
//! ==================
//! Two-channel fast PWM on timer/counter 1 of the ATmega48P/88P/168/328P.
//!
//! **Note**: This version of the documentation was built for
#![cfg_attr(feature = "atmega48p", doc = "**ATmega48P**.")]
#![cfg_attr(feature = "atmega88p", doc = "**ATmega88P**.")]
#![cfg_attr(feature = "atmega168", doc = "**ATmega168**.")]
#![cfg_attr(feature = "atmega328p", doc = "**ATmega328P**.")]
//! All four chips route `OC1A` to `PB1` and `OC1B` to `PB2` (D9 and D10 on
//! the Arduino Uno/Nano footprint).
//!
//! ```ignore
//! let mut timer = Timer1Pwm::new(dp.TC1, pins.d9.into_output(), pins.d10.into_output());
//! let hz = atmega_timer_pwm::configure::<MHz16, _, _>(&mut timer, &mut serial, PwmConfig::new(10, 8));
//! ```

#[cfg(all(
	target_arch = "avr",
	not(feature = "device-selected"),
	not(feature = "disable-device-selection-error")
))]
compile_error!(
	"This crate requires you to specify your target chip as a feature.

    Please select one of the following

    * atmega48p
    * atmega88p
    * atmega168
    * atmega328p
    "
);

/// Reexport of `atmega48p` from `avr-device`
///
#[cfg(feature = "atmega48p")]
pub use avr_device::atmega48p as pac;
/// Reexport of `atmega88p` from `avr-device`
///
#[cfg(feature = "atmega88p")]
pub use avr_device::atmega88p as pac;
/// Reexport of `atmega168` from `avr-device`
///
#[cfg(feature = "atmega168")]
pub use avr_device::atmega168 as pac;
/// Reexport of `atmega328p` from `avr-device`
///
#[cfg(feature = "atmega328p")]
pub use avr_device::atmega328p as pac;

pub use timer_pwm_generic::clock;
pub use timer_pwm_generic::{
	configure, drive_forever, effective_frequency_hz, frequency_hz, Channel, ClockSelect,
	DutyCycles, Hertz, PwmConfig, TimerPwm,
};

#[cfg(feature = "device-selected")]
pub mod timer1;
#[cfg(feature = "device-selected")]
pub use timer1::Timer1Pwm;
