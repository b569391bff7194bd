//! One-shot timer setup and the duty-cycle loop that follows it.
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use unwrap_infallible::UnwrapInfallible;

use crate::clock::Clock;
use crate::freq::{frequency_hz, top_value, Hertz};
use crate::prescaler::ClockSelect;
use crate::timer::{Channel, PwmMode, TimerPwm};

/// Requested resolution and clock divisor.
///
/// Neither field is validated.  See [`ClockSelect::from_divisor`] and
/// [`top_value`] for what happens to values the hardware can't express.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ufmt::derive::uDebug)]
pub struct PwmConfig {
    /// Counter resolution in bits, 1 to 16.
    pub bit_depth: u8,
    /// One of 1, 8, 64, 256, 1024.
    pub prescaler: u16,
}

impl PwmConfig {
    pub const fn new(bit_depth: u8, prescaler: u16) -> Self {
        Self {
            bit_depth,
            prescaler,
        }
    }

    /// Clock source that will actually be programmed.
    pub fn clock_select(&self) -> ClockSelect {
        ClockSelect::from_divisor(self.prescaler)
    }

    pub fn top(&self) -> u16 {
        top_value(self.bit_depth)
    }
}

/// Program the timer for two-channel fast PWM and report the frequency.
///
/// Writes, in this order: output pins, `TCCRnA`/`TCCRnB` mode bits, clock
/// select, `ICRn`.  Then prints `PWM Frequency: <hz> Hz` to `report` and
/// returns the same number.
///
/// The frequency is computed from the *requested* prescaler.  When that
/// divisor has no table entry the timer runs undivided while the report still
/// shows the requested value; [`crate::effective_frequency_hz`] gives the
/// real one.
///
/// Nothing is read back from the hardware, so calling this again with the same
/// `config` ends in the same register state.
pub fn configure<CLOCK, T, W>(timer: &mut T, report: &mut W, config: PwmConfig) -> f32
where
    CLOCK: Clock,
    T: TimerPwm,
    W: ufmt::uWrite<Error = Infallible>,
{
    timer.enable_outputs();
    timer.set_mode(PwmMode::FAST_PWM_NON_INVERTING);
    timer.set_prescaler(config.clock_select());
    timer.set_top(config.top());

    let hz = frequency_hz(CLOCK::FREQ, config.prescaler, config.bit_depth);
    ufmt::uwriteln!(report, "PWM Frequency: {} Hz", Hertz(hz)).unwrap_infallible();
    hz
}

/// Compare values for both channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ufmt::derive::uDebug)]
pub struct DutyCycles {
    pub a: u16,
    pub b: u16,
}

impl DutyCycles {
    /// Write channel A, then channel B.
    pub fn apply<T: TimerPwm>(&self, timer: &mut T) {
        timer.set_duty_cycle(Channel::A, self.a);
        timer.set_duty_cycle(Channel::B, self.b);
    }
}

/// Rewrite `duties` every `period_ms` milliseconds.  Only a reset ends this.
pub fn drive_forever<T, D>(timer: &mut T, delay: &mut D, duties: DutyCycles, period_ms: u32) -> !
where
    T: TimerPwm,
    D: DelayNs,
{
    loop {
        duties.apply(timer);
        delay.delay_ms(period_ms);
    }
}
