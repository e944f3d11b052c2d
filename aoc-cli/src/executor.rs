//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// `None` when the input never reached the parser
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// State shared read-only by every worker
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        let mut inputs = InputStore::new(config.input_dir.clone());
        if let (Some(path), Some(year), Some(day)) =
            (&config.input_file, config.year_filter, config.day_filter)
        {
            inputs = inputs.with_override(year, day, path.clone());
        }

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Work items whose input file is absent
    pub fn missing_inputs<'a>(&self, work_items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        work_items
            .iter()
            .filter(|w| !self.sync_executor_config.inputs.contains(w.year, w.day))
            .collect()
    }

    /// Where the input for a work item is read from
    pub fn input_path(&self, work: &WorkItem) -> std::path::PathBuf {
        self.sync_executor_config.inputs.input_path(work.year, work.day)
    }

    /// Execute all work items and send results to channel
    ///
    /// Failures of individual puzzles are sent as results; only failures of
    /// the executor itself are returned.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(
            work_items = work_items.len(),
            parallelize_by = ?self.sync_executor_config.parallelize_by,
            "starting execution"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // registry order keeps each year contiguous
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally fans out inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singletons = work_items.into_iter().map(|work| vec![work]).collect();
                self.execute_parallel_grouped(singletons, &tx)
            }
        }
    }

    /// Run groups in parallel; items within a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map_with(tx.clone(), |tx, items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same error as the result of every part of `work`
fn send_failed_parts(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

/// Read the input for one puzzle and run its selected parts
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match sync_executor_config.inputs.get(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(year, day, error = %source, "input unavailable");
            let error = ExecutorError::Input { year, day, source }.into();
            return send_failed_parts(work, error, tx);
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_parts_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Parse once and solve the parts in order, so later parts can reuse
/// whatever earlier parts stored in the shared data
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let mut solver = match registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => return send_failed_parts(work, ExecutorError::from(e).into(), tx),
    };

    for part in work.parts.clone() {
        send(tx, solve_part(work.year, work.day, part, &mut *solver))?;
    }
    Ok(())
}

/// Solve every part on its own parsed instance
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .map(|part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part(year, day, part, &mut *solver),
                Err(e) => SolverResult::failed(year, day, part, ExecutorError::from(e).into()),
            };
            send(tx, result)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .filter_map(Result::err)
        .reduce(ArcExecutorError::combine)
        .map_or(Ok(()), Err)
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    debug!(year, day, part, "solving");
    let parse_duration = Some(solver.parse_duration());

    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => {
            debug!(year, day, part, error = %e, "part failed");
            SolverResult {
                parse_duration,
                ..SolverResult::failed(
                    year,
                    day,
                    part,
                    ExecutorError::from(aoc_solver::SolverError::from(e)).into(),
                )
            }
        }
    }
}
