//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Input directory used when neither the flag nor the environment names one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding puzzle inputs
    pub input_dir: PathBuf,
    /// Explicit input file for the single selected puzzle
    pub input_file: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args and the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_dir = resolve_input_dir(args.input_dir, std::env::var_os(INPUT_DIR_ENV));

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config("--threads must be at least 1".to_string()));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        let config = Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            input_file: args.input.as_deref().map(expand_tilde),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Flag beats environment beats [`DEFAULT_INPUT_DIR`]; `~` is expanded.
fn resolve_input_dir(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    let dir = flag
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    expand_tilde(&dir)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
