//! Register-level stand-in for a 16-bit timer, for the unit tests.
use core::convert::Infallible;

use crate::prescaler::ClockSelect;
use crate::timer::{merge_clock_select, Channel, PwmMode, TimerPwm};

/// One register access, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Ddr,
    TccrA(u8),
    TccrB(u8),
    Icr(u16),
    OcrA(u16),
    OcrB(u16),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub outputs: bool,
    pub tccr_a: u8,
    pub tccr_b: u8,
    pub icr: u16,
    pub ocr_a: u16,
    pub ocr_b: u16,
}

#[derive(Debug, Default)]
pub struct MockTimer {
    pub regs: Registers,
    pub log: Vec<Access>,
}

impl TimerPwm for MockTimer {
    fn enable_outputs(&mut self) {
        self.regs.outputs = true;
        self.log.push(Access::Ddr);
    }

    fn set_mode(&mut self, mode: PwmMode) {
        self.regs.tccr_a = mode.tccr_a();
        self.regs.tccr_b = mode.tccr_b();
        self.log.push(Access::TccrA(self.regs.tccr_a));
        self.log.push(Access::TccrB(self.regs.tccr_b));
    }

    fn set_prescaler(&mut self, clock: ClockSelect) {
        self.regs.tccr_b = merge_clock_select(self.regs.tccr_b, clock);
        self.log.push(Access::TccrB(self.regs.tccr_b));
    }

    fn set_top(&mut self, top: u16) {
        self.regs.icr = top;
        self.log.push(Access::Icr(top));
    }

    fn set_duty_cycle(&mut self, channel: Channel, duty: u16) {
        match channel {
            Channel::A => {
                self.regs.ocr_a = duty;
                self.log.push(Access::OcrA(duty));
            }
            Channel::B => {
                self.regs.ocr_b = duty;
                self.log.push(Access::OcrB(duty));
            }
        }
    }
}

/// Serial port stand-in collecting everything written to it.
#[derive(Debug, Default)]
pub struct Sink(pub String);

impl ufmt::uWrite for Sink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.push_str(s);
        Ok(())
    }
}
