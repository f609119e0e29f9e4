//! Runs of equal values and the frequency table built from them

use sorted_core::{Error, OrderedNumericBuffer, Result};
use std::fmt;

/// One row of a frequency table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    /// Distinct value
    pub value: f64,
    /// Number of occurrences of `value`
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(value: f64, count: usize) -> Self {
        Self { value, count }
    }

    /// Share of `total` taken by this value, as a percentage
    pub fn percentage(&self, total: usize) -> f64 {
        if total > 0 {
            100.0 * self.count as f64 / total as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value, self.count)
    }
}

/// Maximal spans of equal values in a sorted slice, as `(value, length)`
pub fn runs(sorted: &[f64]) -> impl Iterator<Item = (f64, usize)> + '_ {
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
}

/// Distinct values in ascending order, each with its occurrence count
pub fn frequency_table(buffer: &OrderedNumericBuffer) -> Result<Vec<FrequencyEntry>> {
    Error::check_size(buffer.len(), 1, "Frequency Table")?;
    Ok(runs(buffer.as_slice())
        .map(|(value, count)| FrequencyEntry::new(value, count))
        .collect())
}
