//! Print Queue: page ordering rules

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashSet, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "graph"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `(before, after)` pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl SharedData {
    fn must_precede(&self, before: u32, after: u32) -> bool {
        self.rules.contains(&(before, after))
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(i, &earlier)| {
            update[i + 1..]
                .iter()
                .all(|&later| !self.must_precede(later, earlier))
        })
    }

    /// Kahn's algorithm over the rules that mention two pages of `update`.
    fn reorder(&self, update: &[u32]) -> Result<Vec<u32>, SolveError> {
        let n = update.len();
        let mut successors = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];
        for (i, &a) in update.iter().enumerate() {
            for (j, &b) in update.iter().enumerate() {
                if i != j && self.must_precede(a, b) {
                    successors[i].push(j);
                    in_degree[j] += 1;
                }
            }
        }

        let mut ready: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut ordered = Vec::with_capacity(n);
        while let Some(i) = ready.pop_front() {
            ordered.push(update[i]);
            for &j in &successors[i] {
                in_degree[j] -= 1;
                if in_degree[j] == 0 {
                    ready.push_back(j);
                }
            }
        }

        if ordered.len() != n {
            return Err(SolveError::SolveFailed(
                anyhow!("ordering rules form a cycle within update {update:?}").into(),
            ));
        }
        Ok(ordered)
    }
}

fn middle(update: &[u32]) -> u64 {
    u64::from(update[update.len() / 2])
}

fn parse_page(page: &str) -> anyhow::Result<u32> {
    page.trim()
        .parse()
        .with_context(|| format!("invalid page number {page:?}"))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = HashSet::new();
        let mut updates = Vec::new();
        let mut in_rules = true;

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            let parsed = if line.is_empty() {
                in_rules = false;
                Ok(())
            } else if in_rules {
                line.split_once('|')
                    .ok_or_else(|| anyhow!("expected a rule like 47|53"))
                    .and_then(|(before, after)| Ok((parse_page(before)?, parse_page(after)?)))
                    .map(|rule| {
                        rules.insert(rule);
                    })
            } else {
                line.split(',')
                    .map(parse_page)
                    .collect::<anyhow::Result<Vec<_>>>()
                    .map(|update| updates.push(update))
            };
            parsed.map_err(|e| ParseError::invalid_line(line_idx + 1, format!("{e:#}")))?;
        }

        if updates.is_empty() {
            return Err(ParseError::MissingData("no updates after the rules".to_string()));
        }
        Ok(SharedData { rules, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for update in shared.updates.iter().filter(|update| !shared.is_ordered(update)) {
            total += middle(&shared.reorder(update)?);
        }
        Ok(total.to_string())
    }
}
