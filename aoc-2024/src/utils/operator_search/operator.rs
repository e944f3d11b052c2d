//! Binary operators usable by the search

use super::operand::Operand;

/// A binary operator `(accumulator, operand) -> accumulator`.
///
/// Whenever [`Operator::never_decreases_with`] holds for an operand, the
/// result must be `>= accumulator`. The search prunes on that promise and
/// does not check it. `None` means the result does not fit in a `u64`.
pub trait Operator {
    fn apply(&self, accumulator: u64, operand: &Operand) -> Option<u64>;

    /// Result of applying this operator to an accumulator that has already
    /// overflowed `u64`. `None` means the result is still out of range.
    ///
    /// The default suits operators that never lower the accumulator. Override
    /// it when some operand brings a huge value back into range.
    #[inline]
    fn apply_overflowed(&self, _operand: &Operand) -> Option<u64> {
        None
    }

    /// Whether applying this operator with `operand` can never lower the
    /// accumulator.
    #[inline]
    fn never_decreases_with(&self, _operand: &Operand) -> bool {
        true
    }
}

/// Closures work as operators, e.g. `|acc, op: &Operand| acc.checked_add(op.value())`.
impl<F> Operator for F
where
    F: Fn(u64, &Operand) -> Option<u64>,
{
    #[inline]
    fn apply(&self, accumulator: u64, operand: &Operand) -> Option<u64> {
        self(accumulator, operand)
    }
}

/// The operators used by the bridge calibration puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicOperator {
    Add,
    Multiply,
    Concatenate,
}

impl BasicOperator {
    /// `{add, multiply}`
    pub const ARITHMETIC: [BasicOperator; 2] = [BasicOperator::Add, BasicOperator::Multiply];

    /// `{add, multiply, concatenate}`
    pub const ALL: [BasicOperator; 3] = [
        BasicOperator::Add,
        BasicOperator::Multiply,
        BasicOperator::Concatenate,
    ];
}

impl Operator for BasicOperator {
    #[inline]
    fn apply(&self, accumulator: u64, operand: &Operand) -> Option<u64> {
        match self {
            BasicOperator::Add => accumulator.checked_add(operand.value()),
            BasicOperator::Multiply => accumulator.checked_mul(operand.value()),
            BasicOperator::Concatenate => concatenate(accumulator, operand),
        }
    }

    #[inline]
    fn apply_overflowed(&self, operand: &Operand) -> Option<u64> {
        match self {
            BasicOperator::Multiply if operand.value() == 0 => Some(0),
            _ => None,
        }
    }

    #[inline]
    fn never_decreases_with(&self, operand: &Operand) -> bool {
        // x * 0 == 0
        !matches!(self, BasicOperator::Multiply) || operand.value() != 0
    }
}

/// Writes the digits of `rhs` after the digits of `lhs`: `12 || 34 == 1234`.
///
/// Appending `0` appends a single zero digit, so `1 || 0 == 10` and
/// `0 || 0 == 0`. Returns `None` on overflow.
#[inline]
pub fn concatenate(lhs: u64, rhs: &Operand) -> Option<u64> {
    match rhs.shift() {
        Some(shift) => lhs.checked_mul(shift)?.checked_add(rhs.value()),
        // rhs has 20 digits: only an empty (zero) prefix leaves room for it
        None if lhs == 0 => Some(rhs.value()),
        None => None,
    }
}
