//! Error types for descriptive statistics
//!
//! Provides a unified error type for all sorted-stats crates.

use thiserror::Error;

/// Core error type for statistics over an ordered dataset
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset holds no values at all
    #[error("Dataset is empty.")]
    EmptyDataset,

    /// The dataset holds values, but fewer than the statistic needs
    #[error("{statistic} requires at least {required} value(s).")]
    InsufficientData {
        statistic: &'static str,
        required: usize,
        actual: usize,
    },

    /// The statistic is mathematically undefined for this data
    #[error("{statistic} undefined when {reason}.")]
    UndefinedResult {
        statistic: &'static str,
        reason: &'static str,
    },

    /// IO error (import and report files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that a dataset of `actual` values satisfies a statistic's minimum size
    ///
    /// An empty dataset is always reported as [`Error::EmptyDataset`], whatever
    /// the statistic's own minimum is.
    pub fn check_size(actual: usize, required: usize, statistic: &'static str) -> Result<()> {
        if actual == 0 {
            return Err(Error::EmptyDataset);
        }
        if actual < required {
            return Err(Error::InsufficientData {
                statistic,
                required,
                actual,
            });
        }
        Ok(())
    }

    /// Create the error raised by the coefficient-of-variation family for a zero mean
    pub fn zero_mean(statistic: &'static str) -> Self {
        Self::UndefinedResult {
            statistic,
            reason: "mean is 0",
        }
    }

    /// Name of the statistic that raised this error, if any
    pub fn statistic(&self) -> Option<&'static str> {
        match self {
            Self::InsufficientData { statistic, .. } | Self::UndefinedResult { statistic, .. } => {
                Some(*statistic)
            }
            Self::EmptyDataset | Self::Io(_) => None,
        }
    }
}
