//! Result aggregator for ordering parallel solver results
//!
//! Results arrive in completion order. The aggregator knows every key it will
//! receive up front and releases results only in ascending `(year, day,
//! part)` order, buffering anything that arrives early.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, BTreeSet};

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Aggregator that buffers results and emits them in sorted order
#[derive(Debug, Default)]
pub struct ResultAggregator {
    /// Keys not yet emitted
    expected: BTreeSet<ResultKey>,
    /// Received results waiting for an earlier key
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    /// Create aggregator from the keys that will be received
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().collect(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.first().copied() {
            let Some(result) = self.pending.remove(&next) else {
                break;
            };
            self.expected.pop_first();
            ready.push(result);
        }
        ready
    }

    /// Drain buffered results in order, including ones never expected
    pub fn drain(&mut self) -> Vec<SolverResult> {
        for key in self.pending.keys() {
            self.expected.remove(key);
        }
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }

    /// Keys still outstanding
    pub fn missing(&self) -> impl Iterator<Item = &ResultKey> {
        self.expected.iter()
    }
}
