//! Bridge Repair: calibration equations with missing operators

use crate::utils::operator_search::{BasicOperator, Operand, Operator, SearchError, is_possible};
use crate::utils::parse::parse_lines;
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "search", "parallel"])]
pub struct Solver;

/// One input row: `target: operand operand ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub target: u64,
    pub operands: Vec<Operand>,
}

impl Equation {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let (target, operands) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("expected `target: operands`"))?;
        let target = target
            .trim()
            .parse()
            .with_context(|| format!("invalid target {:?}", target.trim()))?;
        let operands = operands
            .split_whitespace()
            .map(|operand| {
                operand
                    .parse::<Operand>()
                    .with_context(|| format!("invalid operand {operand:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if operands.is_empty() {
            bail!("equation has no operands");
        }
        Ok(Self { target, operands })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("calibration total does not fit in u64")]
    TotalOverflow,
}

/// Sums the targets of every equation that `operators` can satisfy.
pub fn calibration_total<O>(equations: &[Equation], operators: &[O]) -> Result<u64, CalibrationError>
where
    O: Operator + Sync,
{
    let (satisfied, total) = equations
        .par_iter()
        .map(|equation| -> Result<(usize, u64), CalibrationError> {
            let possible = is_possible(equation.target, &equation.operands, operators)?;
            Ok(if possible { (1usize, equation.target) } else { (0, 0) })
        })
        .try_reduce(
            || (0, 0),
            |a, b| {
                let total = a.1.checked_add(b.1).ok_or(CalibrationError::TotalOverflow)?;
                Ok((a.0 + b.0, total))
            },
        )?;

    debug!(
        equations = equations.len(),
        satisfied,
        operators = operators.len(),
        "calibration total computed"
    );
    Ok(total)
}

fn solve_with(equations: &[Equation], operators: &[BasicOperator]) -> Result<String, SolveError> {
    calibration_total(equations, operators)
        .map(|total| total.to_string())
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, Equation::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, &BasicOperator::ARITHMETIC)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, &BasicOperator::ALL)
    }
}
