//! Operands carrying their decimal width

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Number of entries in [`POWERS_OF_TEN`]: `10^19` is the largest power of
/// ten a `u64` holds.
pub const POWERS_OF_TEN_LEN: usize = 20;

/// `POWERS_OF_TEN[n] == 10^n`, built once at compile time.
pub const POWERS_OF_TEN: [u64; POWERS_OF_TEN_LEN] = build_powers_of_ten();

const fn build_powers_of_ten() -> [u64; POWERS_OF_TEN_LEN] {
    let mut table = [1u64; POWERS_OF_TEN_LEN];
    let mut i = 1;
    while i < POWERS_OF_TEN_LEN {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
}

/// Number of decimal digits in `value`; zero is written with one digit.
#[inline]
pub const fn digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// A non-negative operand together with its decimal digit count.
///
/// The digit count is computed once on construction so concatenation during
/// a search only needs a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operand {
    value: u64,
    digits: u32,
}

impl Operand {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            digits: digit_count(value),
        }
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// `10^digits`, the factor that shifts an accumulator left to make room
    /// for this operand. `None` when that factor does not fit in a `u64`.
    #[inline]
    pub fn shift(&self) -> Option<u64> {
        POWERS_OF_TEN.get(self.digits as usize).copied()
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl FromStr for Operand {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
