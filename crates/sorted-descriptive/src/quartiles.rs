//! Tukey quartiles, interquartile range and fence outliers
//!
//! Quartiles are the medians of the lower and upper halves of the sorted
//! data, with no interpolation between ranks. For an odd count the central
//! value belongs to neither half.

use crate::location::median_of_sorted;
use sorted_core::{Error, OrderedNumericBuffer, Result};
use std::fmt;

/// Multiple of the IQR that places the outlier fences
pub const TUKEY_FENCE: f64 = 1.5;

/// First, second and third quartile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Inclusive `(lower, upper)` fences at `factor * IQR` beyond the outer quartiles
    pub fn fences(&self, factor: f64) -> (f64, f64) {
        let width = factor * self.iqr();
        (self.q1 - width, self.q3 + width)
    }
}

impl fmt::Display for Quartiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.q1, self.q2, self.q3)
    }
}

/// Quartiles by Tukey's halving method
pub fn quartiles(buffer: &OrderedNumericBuffer) -> Result<Quartiles> {
    Error::check_size(buffer.len(), 2, "Quartiles")?;
    Ok(quartiles_of_sorted(buffer.as_slice()))
}

/// Interquartile range, `Q3 - Q1`
pub fn iqr(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 2, "Interquartile Range")?;
    Ok(quartiles_of_sorted(buffer.as_slice()).iqr())
}

/// Values outside `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`, ascending
pub fn outliers(buffer: &OrderedNumericBuffer) -> Result<Vec<f64>> {
    Error::check_size(buffer.len(), 2, "Outliers")?;
    let (lo, hi) = quartiles_of_sorted(buffer.as_slice()).fences(TUKEY_FENCE);
    Ok(buffer.iter().filter(|&x| x < lo || x > hi).collect())
}

fn quartiles_of_sorted(sorted: &[f64]) -> Quartiles {
    let n = sorted.len();
    debug_assert!(n >= 2);
    let m = n / 2;
    let lower = &sorted[..m];
    let upper = if n % 2 == 0 {
        &sorted[m..]
    } else {
        &sorted[m + 1..]
    };
    Quartiles {
        q1: median_of_sorted(lower),
        q2: median_of_sorted(sorted),
        q3: median_of_sorted(upper),
    }
}
