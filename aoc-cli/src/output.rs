//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

/// Totals over a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn of(results: &[SolverResult]) -> Self {
        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        // parse time is counted once per puzzle rather than once per part
        let parse_time = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| ((r.year, r.day), r.parse_duration))
            .collect::<std::collections::BTreeMap<_, _>>()
            .into_values()
            .flatten()
            .sum();
        let solve_time = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        Self {
            solved,
            failed: results.len() - solved,
            parse_time,
            solve_time,
        }
    }
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (self.quiet, &result.answer) {
            (_, Err(e)) => eprintln!("{}", format_error(result, e)),
            (true, Ok(answer)) => println!("{}", answer),
            (false, Ok(_)) => println!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let total_compute_time = summary.parse_time + summary.solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", summary.solved, summary.failed);
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)`
fn format_result(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or_default();
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

fn format_error(result: &SolverResult, error: &impl std::fmt::Display) -> String {
    format!("{}: Error - {}", prefix(result), error)
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};

    fn result(day: u8, part: u8, answer: Result<&str, ArcExecutorError>) -> SolverResult {
        SolverResult {
            year: 2024,
            day,
            part,
            answer: answer.map(str::to_string),
            parse_duration: Some(TimeDelta::microseconds(1500)),
            solve_duration: TimeDelta::microseconds(250),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_result_line() {
        assert_eq!(
            format_result(&result(7, 1, Ok("3749"))),
            "2024/07 Part 1: 3749 (parse: 1.50ms, solve: 250µs)"
        );
        let error: ArcExecutorError = ExecutorError::ChannelSend.into();
        let failed = result(7, 2, Err(error.clone()));
        assert_eq!(
            format_error(&failed, &error),
            "2024/07 Part 2: Error - Channel send error"
        );
    }

    #[test]
    fn test_summary_counts_parse_time_once_per_puzzle() {
        let error: ArcExecutorError = ExecutorError::ChannelSend.into();
        let results = [
            result(1, 1, Ok("11")),
            result(1, 2, Ok("31")),
            result(2, 1, Err(error)),
        ];
        let summary = Summary::of(&results);
        assert_eq!((summary.solved, summary.failed), (2, 1));
        assert_eq!(summary.parse_time, TimeDelta::microseconds(1500));
        assert_eq!(summary.solve_time, TimeDelta::microseconds(500));
    }
}
