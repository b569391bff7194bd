//! Timer/counter register model and the peripheral trait.
//!
//! Bit layout is that of the ATmega 16-bit timers (`TCCRnA`, `TCCRnB`):
//!
//! ```text
//! TCCRnA: COMnA1 COMnA0 COMnB1 COMnB0 -      -      WGMn1 WGMn0
//! TCCRnB: ICNCn  ICESn  -      WGMn3  WGMn2  CSn2   CSn1  CSn0
//! ```
use crate::prescaler::ClockSelect;

/// Output-compare channel of the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ufmt::derive::uDebug)]
pub enum Channel {
    /// `OCnA`, pin D9 on the Uno
    A,
    /// `OCnB`, pin D10 on the Uno
    B,
}

/// Compare output mode of one channel in fast PWM (`COMnx1:0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ufmt::derive::uDebug)]
pub enum CompareOutput {
    Disconnected,
    /// Clear on compare match, set at BOTTOM.
    NonInverting,
    /// Set on compare match, clear at BOTTOM.
    Inverting,
}

impl CompareOutput {
    pub fn bits(self) -> u8 {
        match self {
            CompareOutput::Disconnected => 0b00,
            CompareOutput::NonInverting => 0b10,
            CompareOutput::Inverting => 0b11,
        }
    }
}

/// Waveform generation mode 14: fast PWM, TOP = `ICRn`.
pub const WGM_FAST_PWM_ICR: u8 = 0b1110;

/// Contents of the two mode-control registers, minus the clock select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PwmMode {
    /// `WGMn3:0`
    pub wgm: u8,
    pub output_a: CompareOutput,
    pub output_b: CompareOutput,
}

impl PwmMode {
    /// Fast PWM counting up to `ICRn`, both channels non-inverted.
    pub const FAST_PWM_NON_INVERTING: PwmMode = PwmMode {
        wgm: WGM_FAST_PWM_ICR,
        output_a: CompareOutput::NonInverting,
        output_b: CompareOutput::NonInverting,
    };

    /// Value for `TCCRnA`.
    pub fn tccr_a(&self) -> u8 {
        self.output_a.bits() << 6 | self.output_b.bits() << 4 | (self.wgm & 0b11)
    }

    /// Value for `TCCRnB` with the clock stopped (`CSn2:0 = 0`).
    pub fn tccr_b(&self) -> u8 {
        (self.wgm >> 2 & 0b11) << 3
    }
}

/// Replace the clock-select field of a `TCCRnB` value, keeping the rest.
pub fn merge_clock_select(tccr_b: u8, clock: ClockSelect) -> u8 {
    tccr_b & !ClockSelect::MASK | clock.bits()
}

/// A 16-bit timer with two PWM outputs.
///
/// Implementations write the hardware directly and never read it back, so
/// nothing else may touch the same registers concurrently.
pub trait TimerPwm {
    /// Make both compare pins digital outputs.  Repeating this is harmless.
    fn enable_outputs(&mut self);

    /// Write both mode-control registers.  Leaves the clock stopped.
    fn set_mode(&mut self, mode: PwmMode);

    /// Write the clock-select field, keeping the mode bits.
    fn set_prescaler(&mut self, clock: ClockSelect);

    /// Write the counter TOP (`ICRn`).
    fn set_top(&mut self, top: u16);

    /// Write the compare register of `channel`.
    ///
    /// A value above TOP never matches and leaves the output permanently
    /// high.
    fn set_duty_cycle(&mut self, channel: Channel, duty: u16);
}
