//! Ceres Search: word search in a letter grid

use crate::utils::grid::{Grid, NEIGHBOURS, Position};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

const WORD: &[u8] = b"XMAS";

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(Grid::parse(input)?)
    }
}

fn spells_word(grid: &Grid, start: Position, step: Position) -> bool {
    (0..WORD.len() as isize)
        .zip(WORD)
        .all(|(k, &letter)| grid.get(start + step * k) == Some(letter))
}

/// Both diagonals through `center` read `MAS` forwards or backwards.
fn is_x_mas(grid: &Grid, center: Position) -> bool {
    let diagonal = |a: Position, b: Position| {
        matches!(
            (grid.get(center + a), grid.get(center + b)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    grid.get(center) == Some(b'A')
        && diagonal(Position::new(-1, -1), Position::new(1, 1))
        && diagonal(Position::new(-1, 1), Position::new(1, -1))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*shared;
        let count = grid
            .iter()
            .filter(|&(_, cell)| cell == WORD[0])
            .map(|(start, _)| {
                NEIGHBOURS
                    .iter()
                    .filter(|&&step| spells_word(grid, start, step))
                    .count()
            })
            .sum::<usize>();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*shared;
        let count = grid
            .positions()
            .filter(|&center| is_x_mas(grid, center))
            .count();
        Ok(count.to_string())
    }
}
