//! Resonant Collinearity: antinodes of antenna pairs

use crate::utils::grid::{Grid, Position};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid"])]
pub struct Solver;

const EMPTY: u8 = b'.';

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    /// Antenna positions grouped by frequency
    antennas: Vec<Vec<Position>>,
}

impl SharedData {
    fn pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.antennas
            .iter()
            .flat_map(|group| group.iter().copied().tuple_combinations())
    }

    /// Every in-bounds point `start + k * step` for `k >= 0`.
    fn ray(&self, start: Position, step: Position) -> impl Iterator<Item = Position> + '_ {
        (0..)
            .map(move |k| start + step * k)
            .take_while(|&position| self.grid.contains(position))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let antennas = grid
            .iter()
            .filter(|&(_, cell)| cell != EMPTY)
            .map(|(position, frequency)| (frequency, position))
            .into_group_map()
            .into_values()
            .collect();
        Ok(SharedData { grid, antennas })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shared = &*shared;
        let antinodes: HashSet<Position> = shared
            .pairs()
            .flat_map(|(a, b)| [a + (a - b), b + (b - a)])
            .filter(|&position| shared.grid.contains(position))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shared = &*shared;
        let antinodes: HashSet<Position> = shared
            .pairs()
            .flat_map(|(a, b)| shared.ray(a, b - a).chain(shared.ray(a, a - b)))
            .collect();
        Ok(antinodes.len().to_string())
    }
}
