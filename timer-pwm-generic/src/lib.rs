#![cfg_attr(not(test), no_std)]

//! `timer-pwm-generic`
//! ===================
//! MCU-independent core for driving two PWM channels off one 16-bit
//! timer/counter in fast PWM mode with a programmable top value.
//!
//! The register-level details live behind the [`TimerPwm`] trait; the MCU
//! crates implement it for the real peripheral, the tests implement it with a
//! register model.
//!
//! ```ignore
//! let mut timer = Timer1Pwm::new(dp.TC1, pins.d9.into_output(), pins.d10.into_output());
//! let hz = timer_pwm_generic::configure::<MHz16, _, _>(&mut timer, &mut serial, PwmConfig::new(10, 8));
//! ```

pub mod clock;
pub mod configure;
pub mod freq;
pub mod prescaler;
pub mod timer;

#[cfg(test)]
mod mock;

pub use configure::{configure, drive_forever, DutyCycles, PwmConfig};
pub use freq::{duty_ratio, effective_frequency_hz, frequency_hz, top_value, Hertz};
pub use prescaler::ClockSelect;
pub use timer::{Channel, CompareOutput, PwmMode, TimerPwm};
