//! Historian Hysteria: two location id lists

use crate::utils::parse::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (left, right): (Vec<u64>, Vec<u64>) = parse_lines(input, |line| {
            let (left, right) = line
                .split_whitespace()
                .collect_tuple()
                .ok_or_else(|| anyhow!("expected two location ids"))?;
            Ok((left.parse::<u64>()?, right.parse::<u64>()?))
        })?
        .into_iter()
        .unzip();

        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let left = shared.left.iter().sorted_unstable();
        let right = shared.right.iter().sorted_unstable();
        let distance: u64 = left.zip(right).map(|(l, r)| l.abs_diff(*r)).sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = shared.right.iter().counts();
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}
