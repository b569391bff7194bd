//! `TC1` behind [`TimerPwm`].
use embedded_hal::digital::OutputPin;
use timer_pwm_generic::timer::merge_clock_select;
use timer_pwm_generic::{Channel, ClockSelect, PwmMode, TimerPwm};

use crate::pac::TC1;

/// Timer/counter 1 driving `OC1A` and `OC1B`.
///
/// Owns the `TC1` block, so no other code can reach these registers while it
/// exists.  The two pins must already be outputs; the compare unit takes them
/// over once a compare output mode is written.
pub struct Timer1Pwm<A, B> {
	tc1: TC1,
	oc1a: A,
	oc1b: B,
	/// Last `TCCR1B` mode bits, so the clock select can be written without
	/// reading the register back.
	tccr1b_mode: u8,
}

impl<A: OutputPin, B: OutputPin> Timer1Pwm<A, B> {
	pub fn new(tc1: TC1, oc1a: A, oc1b: B) -> Self {
		Self {
			tc1,
			oc1a,
			oc1b,
			tccr1b_mode: 0,
		}
	}

	/// Give the timer and pins back.  The timer keeps running.
	pub fn release(self) -> (TC1, A, B) {
		(self.tc1, self.oc1a, self.oc1b)
	}
}

impl<A: OutputPin, B: OutputPin> TimerPwm for Timer1Pwm<A, B> {
	fn enable_outputs(&mut self) {
		// Pins are outputs by type already; pin them low until a compare mode
		// is connected.  AVR pin writes are infallible.
		self.oc1a.set_low().ok();
		self.oc1b.set_low().ok();
	}

	fn set_mode(&mut self, mode: PwmMode) {
		self.tccr1b_mode = mode.tccr_b();
		self.tc1.tccr1a().write(|w| unsafe { w.bits(mode.tccr_a()) });
		self.tc1.tccr1b().write(|w| unsafe { w.bits(self.tccr1b_mode) });
	}

	fn set_prescaler(&mut self, clock: ClockSelect) {
		let tccr1b = merge_clock_select(self.tccr1b_mode, clock);
		self.tc1.tccr1b().write(|w| unsafe { w.bits(tccr1b) });
	}

	fn set_top(&mut self, top: u16) {
		self.tc1.icr1().write(|w| unsafe { w.bits(top) });
	}

	fn set_duty_cycle(&mut self, channel: Channel, duty: u16) {
		match channel {
			Channel::A => self.tc1.ocr1a().write(|w| unsafe { w.bits(duty) }),
			Channel::B => self.tc1.ocr1b().write(|w| unsafe { w.bits(duty) }),
		};
	}
}
