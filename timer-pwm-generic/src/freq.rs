//! Counter period, output frequency and duty ratio.
use ufmt::{uDisplay, uWrite, Formatter};

use crate::prescaler::ClockSelect;

/// Counter TOP for a resolution of `bit_depth` bits: `2^bit_depth - 1`.
///
/// The register is 16 bits wide, so only the low 16 bits survive; every
/// depth of 16 or more ends up as `0xFFFF`.
pub fn top_value(bit_depth: u8) -> u16 {
    1u32.checked_shl(u32::from(bit_depth))
        .map_or(u32::MAX, |steps| steps - 1) as u16
}

/// Counter steps per PWM period, `2^bit_depth`.
fn period_steps(bit_depth: u8) -> f32 {
    1u64.checked_shl(u32::from(bit_depth))
        .map_or(f32::INFINITY, |steps| steps as f32)
}

/// `cpu_hz / (prescaler * 2^bit_depth)`.
pub fn frequency_hz(cpu_hz: u32, prescaler: u16, bit_depth: u8) -> f32 {
    cpu_hz as f32 / (f32::from(prescaler) * period_steps(bit_depth))
}

/// Frequency the timer really produces once `prescaler` went through the
/// clock-select table.
pub fn effective_frequency_hz(cpu_hz: u32, prescaler: u16, bit_depth: u8) -> f32 {
    frequency_hz(cpu_hz, ClockSelect::from_divisor(prescaler).divisor(), bit_depth)
}

/// Fraction of the period a channel is high for a compare value of `duty`.
///
/// The counter runs `0..=top`, so the ratio is `duty / top`.  Values at or
/// above TOP saturate at 1.0.
pub fn duty_ratio(duty: u16, top: u16) -> f32 {
    if duty >= top {
        1.0
    } else {
        f32::from(duty) / f32::from(top)
    }
}

/// A frequency printed with two decimals, e.g. `1953.13`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hertz(pub f32);

impl uDisplay for Hertz {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let mut value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value < 0.0 {
            f.write_str("-")?;
            value = -value;
        }
        if value.is_infinite() {
            return f.write_str("inf");
        }
        // Hundredths have to fit in a u32.
        if value > 42_949_672.0 {
            return f.write_str("ovf");
        }

        let hundredths = (value * 100.0 + 0.5) as u32;
        uDisplay::fmt(&(hundredths / 100), f)?;
        f.write_str(".")?;
        let frac = hundredths % 100;
        if frac < 10 {
            f.write_str("0")?;
        }
        uDisplay::fmt(&frac, f)
    }
}
