//! Advent of Code Solver Library
//!
//! A small, type-safe framework for Advent of Code puzzles. Each puzzle is a
//! type that parses its input once and then answers one or more parts
//! against the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the day's shared data
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] ties the parts together (derive it with `#[derive(AocSolver)]`)
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to
//!   factories that parse input into a type-erased [`DynSolver`]
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so solvers are
//!   discovered without manual registration
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive `&mut SharedData`, so a part can store intermediate results
//! that a later part reuses. Parts that only read the data simply ignore the
//! mutability.

// Lets the derive macros' `::aoc_solver::...` paths resolve inside this crate's own tests.
extern crate self as aoc_solver;

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver,
    SolverFactory, SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
