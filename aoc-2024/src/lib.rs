//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day lives in [`year_2024`] and uses the `AutoRegisterSolver` derive
//! macro, so linking this crate is enough to make every day available to a
//! registry built with `register_all_plugins`. Helpers shared between days
//! live in [`utils`].

pub mod utils;
pub mod year_2024;
