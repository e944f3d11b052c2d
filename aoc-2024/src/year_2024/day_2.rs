//! Red-Nosed Reports: level safety

use crate::utils::parse::parse_lines;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            line.split_whitespace()
                .map(|level| level.parse::<i64>().map_err(anyhow::Error::from))
                .collect()
        })
    }
}

/// Strictly increasing or strictly decreasing, with every step in `1..=3`.
fn is_safe<I>(levels: I) -> bool
where
    I: IntoIterator<Item = i64>,
{
    let mut levels = levels.into_iter();
    let Some(mut previous) = levels.next() else {
        return true;
    };
    let mut trend = None;

    for level in levels {
        let step = level - previous;
        if !(1..=3).contains(&step.abs()) {
            return false;
        }
        if *trend.get_or_insert(step.signum()) != step.signum() {
            return false;
        }
        previous = level;
    }
    true
}

fn is_safe_with_dampener(report: &[i64]) -> bool {
    is_safe(report.iter().copied())
        || (0..report.len()).any(|skip| {
            let remaining = report
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != skip)
                .map(|(_, level)| *level);
            is_safe(remaining)
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_with_dampener(report))
            .count();
        Ok(safe.to_string())
    }
}
