//! Constrained operator search
//!
//! Decides whether a target value can be produced from an ordered list of
//! operands by inserting one binary operator into every gap and evaluating
//! strictly left to right (no precedence, no reordering).
//!
//! ```text
//! 7290: 6 8 6 15   ->   ((6 * 8) || 6) * 15 == 7290
//! ```
//!
//! # Pieces
//!
//! - [`Operand`]: a value plus its decimal digit count, computed once when
//!   the input is parsed
//! - [`Operator`]: a binary function that normally never lowers the
//!   accumulator; [`BasicOperator`] covers add, multiply and decimal
//!   concatenation, and plain closures also qualify
//! - [`is_possible`]: the depth-first search itself
//!
//! # Pruning and overflow
//!
//! Add and concatenate never lower the accumulator, and neither does multiply
//! unless the operand is `0`. Once the accumulator exceeds the target and no
//! zero multiplicand is left, no continuation can come back down and the
//! branch is dropped. Operators use checked arithmetic and report overflow as
//! `None`, so nothing wraps around into a false match. An overflowed
//! accumulator is tracked as out of range instead of being discarded: it is
//! pruned like any other overshoot, but while a zero multiplicand remains it
//! stays alive, because `huge * 0 == 0` can still reach a target of `0`.
//!
//! # Cost
//!
//! Worst case `operators ^ (operands - 1)` evaluations per query. Queries are
//! independent and pure, so callers may evaluate many of them in parallel.
//!
//! # Example
//!
//! ```rust
//! use aoc_2024::utils::operator_search::{is_possible, BasicOperator, Operand};
//!
//! let operands: Vec<Operand> = [6, 8, 6, 15].into_iter().map(Operand::new).collect();
//!
//! assert!(!is_possible(7290, &operands, &BasicOperator::ARITHMETIC).unwrap());
//! assert!(is_possible(7290, &operands, &BasicOperator::ALL).unwrap());
//! ```

mod operand;
mod operator;
mod search;

#[cfg(test)]
mod tests;

pub use operand::{Operand, POWERS_OF_TEN, POWERS_OF_TEN_LEN, digit_count};
pub use operator::{BasicOperator, Operator, concatenate};
pub use search::{SearchError, is_possible};
