//! Disk Fragmenter: compacting a disk map

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["2024"])]
pub struct Solver;

/// A contiguous run of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct SharedData {
    /// Indexed by file id
    files: Vec<Span>,
    free: Vec<Span>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut files = Vec::new();
        let mut free = Vec::new();
        let mut start = 0;

        for (index, byte) in input.trim().bytes().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(ParseError::InvalidFormat(format!(
                    "(offset {index}) expected a digit, found {:?}",
                    byte as char
                )));
            }
            let span = Span {
                start,
                len: usize::from(byte - b'0'),
            };
            start += span.len;
            if index % 2 == 0 {
                files.push(span);
            } else {
                free.push(span);
            }
        }

        if files.is_empty() {
            return Err(ParseError::MissingData("empty disk map".to_string()));
        }
        Ok(SharedData { files, free })
    }
}

fn checksum<'a>(files: impl IntoIterator<Item = (usize, &'a Span)>) -> u64 {
    files
        .into_iter()
        .map(|(id, span)| {
            (span.start..span.start + span.len)
                .map(|position| (position * id) as u64)
                .sum::<u64>()
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total_blocks = shared.files.iter().chain(&shared.free).map(|s| s.len).sum();
        let mut disk: Vec<Option<usize>> = vec![None; total_blocks];
        for (id, span) in shared.files.iter().enumerate() {
            disk[span.start..span.start + span.len].fill(Some(id));
        }

        let (mut left, mut right) = (0, disk.len());
        loop {
            while left < right && disk[left].is_some() {
                left += 1;
            }
            while left < right && disk[right - 1].is_none() {
                right -= 1;
            }
            if left + 1 >= right {
                break;
            }
            disk.swap(left, right - 1);
        }

        let total: u64 = disk
            .iter()
            .enumerate()
            .filter_map(|(position, id)| id.map(|id| (position * id) as u64))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut files = shared.files.clone();
        let mut free = shared.free.clone();

        for file in files.iter_mut().rev() {
            let target = free
                .iter_mut()
                .take_while(|span| span.start < file.start)
                .find(|span| span.len >= file.len);
            if let Some(span) = target {
                file.start = span.start;
                span.start += file.len;
                span.len -= file.len;
            }
        }

        Ok(checksum(files.iter().enumerate()).to_string())
    }
}
