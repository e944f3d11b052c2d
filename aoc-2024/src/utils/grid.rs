//! Rectangular byte grids addressed by signed positions

use aoc_solver::ParseError;
use std::ops::{Add, Mul, Sub};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("expected {expected} columns, found {found} on line {line}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl From<GridError> for ParseError {
    fn from(error: GridError) -> Self {
        match error {
            GridError::Empty => ParseError::MissingData(error.to_string()),
            GridError::Ragged { line, .. } => ParseError::invalid_line(line, &error),
        }
    }
}

/// A cell coordinate or an offset between two cells.
///
/// Signed so that stepping off the grid is representable and simply fails
/// [`Grid::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<isize> for Position {
    type Output = Position;

    fn mul(self, rhs: isize) -> Self::Output {
        Position::new(self.row * rhs, self.col * rhs)
    }
}

/// Offsets to all eight neighbours, clockwise from north.
pub const NEIGHBOURS: [Position; 8] = [
    Position::new(-1, 0),
    Position::new(-1, 1),
    Position::new(0, 1),
    Position::new(1, 1),
    Position::new(1, 0),
    Position::new(1, -1),
    Position::new(0, -1),
    Position::new(-1, -1),
];

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn offset(self) -> Position {
        match self {
            Direction::Up => Position::new(-1, 0),
            Direction::Right => Position::new(0, 1),
            Direction::Down => Position::new(1, 0),
            Direction::Left => Position::new(0, -1),
        }
    }

    pub const fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Dense index in `0..4`, usable for per-direction bitsets.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Row-major grid of bytes, one row per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parses non-empty lines into a grid. Every line must have the same
    /// length.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(GridError::Ragged {
                    line: line_idx + 1,
                    expected,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let width = width.ok_or(GridError::Empty)?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        (0..self.height as isize).contains(&position.row)
            && (0..self.width as isize).contains(&position.col)
    }

    /// Row-major index of `position`, if it lies on the grid.
    #[inline]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.width + position.col as usize)
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<u8> {
        self.index_of(position).map(|index| self.cells[index])
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as isize)
            .flat_map(move |row| (0..self.width as isize).map(move |col| Position::new(row, col)))
    }

    /// Every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// First position holding `byte`.
    pub fn find(&self, byte: u8) -> Option<Position> {
        self.iter()
            .find_map(|(position, cell)| (cell == byte).then_some(position))
    }
}
