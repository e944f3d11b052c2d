//! Mull It Over: scanning corrupted memory for instructions

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "regex"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    // `\d` would also match non-ASCII digits
    Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

/// Extracts every well-formed instruction from the memory dump, in order.
pub fn instructions(memory: &str) -> Result<Vec<Instruction>, ParseError> {
    INSTRUCTION
        .captures_iter(memory)
        .map(|caps| -> Result<Instruction, ParseError> {
            match (caps.get(1), caps.get(2)) {
                (Some(a), Some(b)) => {
                    let line = memory[..a.start()].matches('\n').count() + 1;
                    let operand = |m: regex::Match<'_>| {
                        m.as_str().parse::<u64>().map_err(|e| {
                            ParseError::invalid_line(line, format!("mul operand {:?}: {e}", m.as_str()))
                        })
                    };
                    Ok(Instruction::Mul(operand(a)?, operand(b)?))
                }
                _ if caps[0].starts_with("don't") => Ok(Instruction::Dont),
                _ => Ok(Instruction::Do),
            }
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        instructions(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                Instruction::Do | Instruction::Dont => 0,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (total, _) = shared.iter().fold((0u64, true), |(total, enabled), instruction| {
            match *instruction {
                Instruction::Mul(a, b) if enabled => (total + a * b, enabled),
                Instruction::Mul(..) => (total, enabled),
                Instruction::Do => (total, true),
                Instruction::Dont => (total, false),
            }
        });
        Ok(total.to_string())
    }
}
