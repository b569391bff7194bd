//! Clock-select field of the 16-bit timer.
//!
//! Only five divisors map onto a clock-select pattern.  Every other request is
//! answered with the [`DEFAULT`](ClockSelect::DEFAULT) entry instead of an
//! error, so the programmed divisor can silently differ from the requested
//! one.  Use [`ClockSelect::divisor`] to find out what the hardware really
//! runs at.

/// Clock source for the timer counter (`CSn2:0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ufmt::derive::uDebug)]
pub enum ClockSelect {
    /// `clk_io / 1`
    Direct,
    /// `clk_io / 8`
    Prescale8,
    /// `clk_io / 64`
    Prescale64,
    /// `clk_io / 256`
    Prescale256,
    /// `clk_io / 1024`
    Prescale1024,
}

/// Divisor to clock-select lookup.  Exact match only.
const TABLE: [(u16, ClockSelect); 5] = [
    (1, ClockSelect::Direct),
    (8, ClockSelect::Prescale8),
    (64, ClockSelect::Prescale64),
    (256, ClockSelect::Prescale256),
    (1024, ClockSelect::Prescale1024),
];

impl ClockSelect {
    /// Entry used for any divisor not in the table.
    pub const DEFAULT: ClockSelect = ClockSelect::Direct;

    /// Mask of the clock-select field in `TCCRnB`.
    pub const MASK: u8 = 0b111;

    /// Look up the clock source for a requested divisor.
    ///
    /// Never fails: divisors other than 1, 8, 64, 256 and 1024 give
    /// [`ClockSelect::DEFAULT`].
    pub fn from_divisor(divisor: u16) -> Self {
        TABLE
            .iter()
            .find(|(d, _)| *d == divisor)
            .map_or(Self::DEFAULT, |(_, cs)| *cs)
    }

    /// Divisor the hardware actually applies with this clock source.
    pub fn divisor(self) -> u16 {
        match self {
            ClockSelect::Direct => 1,
            ClockSelect::Prescale8 => 8,
            ClockSelect::Prescale64 => 64,
            ClockSelect::Prescale256 => 256,
            ClockSelect::Prescale1024 => 1024,
        }
    }

    /// Raw `CSn2:0` pattern.
    pub fn bits(self) -> u8 {
        match self {
            ClockSelect::Direct => 0b001,
            ClockSelect::Prescale8 => 0b010,
            ClockSelect::Prescale64 => 0b011,
            ClockSelect::Prescale256 => 0b100,
            ClockSelect::Prescale1024 => 0b101,
        }
    }

    /// Whether `divisor` is one of the values with its own table entry.
    pub fn is_exact(divisor: u16) -> bool {
        TABLE.iter().any(|(d, _)| *d == divisor)
    }
}

impl Default for ClockSelect {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_map_to_their_pattern() {
        let expected = [
            (1, 0b001),
            (8, 0b010),
            (64, 0b011),
            (256, 0b100),
            (1024, 0b101),
        ];
        for (divisor, bits) in expected {
            let cs = ClockSelect::from_divisor(divisor);
            assert_eq!(cs.bits(), bits, "divisor {}", divisor);
            assert_eq!(cs.divisor(), divisor);
            assert!(ClockSelect::is_exact(divisor));
        }
    }

    #[test]
    fn unknown_divisor_falls_back_to_direct() {
        let direct = ClockSelect::from_divisor(1).bits();
        for divisor in [0, 2, 3, 7, 9, 32, 65, 128, 255, 512, 1023, 1025, 4096, u16::MAX] {
            assert_eq!(ClockSelect::from_divisor(divisor).bits(), direct, "divisor {}", divisor);
            assert!(!ClockSelect::is_exact(divisor));
        }
        assert_eq!(ClockSelect::default(), ClockSelect::Direct);
    }

    #[test]
    fn patterns_fit_the_field() {
        for (_, cs) in TABLE {
            assert_eq!(cs.bits() & !ClockSelect::MASK, 0);
            assert_ne!(cs.bits(), 0, "0b000 stops the timer");
        }
    }
}
