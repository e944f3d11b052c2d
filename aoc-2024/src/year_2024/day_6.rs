//! Guard Gallivant: patrol simulation and loop detection

use crate::utils::grid::{Direction, Grid, Position};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "parallel"])]
pub struct Solver;

const OBSTACLE: u8 = b'#';
const GUARD: u8 = b'^';

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    start: Position,
    /// Distinct cells on the unobstructed patrol, filled by whichever part
    /// runs first.
    patrol: Option<Vec<Position>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(GUARD)
            .ok_or_else(|| ParseError::MissingData("no guard '^' on the map".to_string()))?;
        Ok(SharedData {
            grid,
            start,
            patrol: None,
        })
    }
}

enum Outcome {
    Exits,
    Loops,
}

/// Walks the guard from `start`, calling `on_visit` for each newly entered
/// cell, with an optional extra obstacle.
fn walk(
    grid: &Grid,
    start: Position,
    extra_obstacle: Option<Position>,
    mut on_visit: impl FnMut(Position),
) -> Outcome {
    // one bit per direction for every cell
    let mut seen = vec![0u8; grid.len()];
    let mut position = start;
    let mut direction = Direction::Up;

    loop {
        let Some(index) = grid.index_of(position) else {
            return Outcome::Exits;
        };
        let bit = 1 << direction.index();
        if seen[index] & bit != 0 {
            return Outcome::Loops;
        }
        if seen[index] == 0 {
            on_visit(position);
        }
        seen[index] |= bit;

        let ahead = position.step(direction);
        if grid.get(ahead) == Some(OBSTACLE) || Some(ahead) == extra_obstacle {
            direction = direction.turn_right();
        } else {
            position = ahead;
        }
    }
}

fn patrol(shared: &mut SharedData) -> &[Position] {
    shared.patrol.get_or_insert_with(|| {
        let mut visited = Vec::new();
        walk(&shared.grid, shared.start, None, |position| visited.push(position));
        visited
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(patrol(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.start;
        patrol(shared);
        let SharedData { grid, patrol, .. } = &*shared;
        let candidates = patrol.as_deref().unwrap_or_default();

        // an obstruction off the unobstructed path is never reached
        let loops = candidates
            .par_iter()
            .filter(|&&candidate| candidate != start)
            .filter(|&&candidate| {
                matches!(walk(grid, start, Some(candidate), |_| ()), Outcome::Loops)
            })
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "41");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_part_2_runs_patrol_on_its_own() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
        assert_eq!(shared.patrol.as_ref().map(Vec::len), Some(41));
    }

    #[test]
    fn test_missing_guard() {
        assert!(matches!(Solver::parse("..#\n...\n"), Err(ParseError::MissingData(_))));
    }
}
