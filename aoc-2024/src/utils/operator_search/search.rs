//! Depth-first search over operator assignments

use super::operand::Operand;
use super::operator::Operator;
use thiserror::Error;

/// Invalid arguments to [`is_possible`]. Both are caller bugs rather than
/// properties of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("operand sequence is empty")]
    EmptyOperands,
    #[error("operator set is empty")]
    EmptyOperators,
}

/// Returns whether `target` can be produced from `operands`, evaluated
/// strictly left to right, by placing one of `operators` in every gap.
///
/// Operators are tried in the given order and the search stops at the first
/// assignment that hits the target. A branch is abandoned as soon as its
/// accumulator exceeds `target` and no remaining operand lets any operator
/// lower it again (see [`Operator::never_decreases_with`]).
///
/// An intermediate value that overflows `u64` is kept as "out of range"
/// rather than discarded, since a later `* 0` can still bring it back to `0`
/// (see [`Operator::apply_overflowed`]).
///
/// # Example
///
/// ```
/// use aoc_2024::utils::operator_search::{is_possible, BasicOperator, Operand};
///
/// let operands: Vec<Operand> = [81, 40, 27].into_iter().map(Operand::new).collect();
/// assert!(is_possible(3267, &operands, &BasicOperator::ARITHMETIC).unwrap());
/// assert!(!is_possible(3268, &operands, &BasicOperator::ARITHMETIC).unwrap());
/// ```
pub fn is_possible<O: Operator>(
    target: u64,
    operands: &[Operand],
    operators: &[O],
) -> Result<bool, SearchError> {
    let (first, rest) = operands.split_first().ok_or(SearchError::EmptyOperands)?;
    if operators.is_empty() {
        return Err(SearchError::EmptyOperators);
    }

    let search = Search {
        target,
        operators,
        prunable_tail: monotone_tail_len(rest, operators),
    };
    Ok(search.run(Some(first.value()), rest))
}

/// Length of the longest suffix of `operands` over which every operator is
/// non-decreasing.
fn monotone_tail_len<O: Operator>(operands: &[Operand], operators: &[O]) -> usize {
    operands
        .iter()
        .rev()
        .take_while(|operand| operators.iter().all(|op| op.never_decreases_with(operand)))
        .count()
}

struct Search<'a, O> {
    target: u64,
    operators: &'a [O],
    prunable_tail: usize,
}

impl<O: Operator> Search<'_, O> {
    /// `None` is an accumulator beyond `u64::MAX`.
    fn run(&self, accumulator: Option<u64>, remaining: &[Operand]) -> bool {
        let Some((next, rest)) = remaining.split_first() else {
            return accumulator == Some(self.target);
        };

        let overshot = accumulator.is_none_or(|value| value > self.target);
        if overshot && remaining.len() <= self.prunable_tail {
            return false;
        }

        self.operators.iter().any(|operator| {
            let candidate = match accumulator {
                Some(value) => operator.apply(value, next),
                None => operator.apply_overflowed(next),
            };
            self.run(candidate, rest)
        })
    }
}
