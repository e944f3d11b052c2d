//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle ready to be solved part by part.
///
/// Owns the shared data for one year-day problem together with the time
/// the parse took. Parts run against the same shared data, so a part may
/// leave intermediate results behind for the next one.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Read-only access to the parsed data.
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {})", result.answer, result.duration());
///
///     let result = solver.solve(2)?;
///     println!("Part 2: {} (took {})", result.answer, result.duration());
///
///     println!("Parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range, not implemented, or failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the year for this solver
    fn year(&self) -> u16;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = Vec<u64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|w| {
                    w.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {w}")))
                })
                .collect()
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => {
                    shared.iter_mut().for_each(|v| *v *= 2);
                    Ok(shared.iter().sum::<u64>().to_string())
                }
                2 => Ok(shared.iter().max().copied().unwrap_or(0).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_instance_records_metadata() {
        let instance = SolverInstance::<Doubler>::new(2024, 7, "1 2 3").unwrap();
        assert_eq!(instance.year(), 2024);
        assert_eq!(instance.day(), 7);
        assert_eq!(instance.parts(), 2);
        assert_eq!(instance.shared(), &vec![1, 2, 3]);
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_parts_share_mutations() {
        let mut instance = SolverInstance::<Doubler>::new(2024, 7, "1 2 3").unwrap();
        assert_eq!(instance.solve(1).unwrap().answer, "12");
        assert_eq!(instance.solve(2).unwrap().answer, "6");
    }

    #[test]
    fn test_out_of_range_part() {
        let mut instance = SolverInstance::<Doubler>::new(2024, 7, "1").unwrap();
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_parse_failure() {
        let result = SolverInstance::<Doubler>::new(2024, 7, "1 x");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
