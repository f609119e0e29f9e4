//! Location statistics: extremes, sum, mean, median, midrange and modes

use crate::frequency::runs;
use sorted_core::{compensated_sum_by, Error, OrderedNumericBuffer, Result};

/// Smallest value
pub fn minimum(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Minimum")?;
    Ok(buffer.at(0))
}

/// Largest value
pub fn maximum(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Maximum")?;
    Ok(buffer.at(buffer.len() - 1))
}

/// `max - min`
pub fn range(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Range")?;
    Ok(buffer.at(buffer.len() - 1) - buffer.at(0))
}

/// Sum of all values, accumulated with compensation
pub fn sum(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Sum")?;
    Ok(compensated_sum_by(buffer.as_slice(), |x| x))
}

/// Arithmetic mean
///
/// When the plain sum overflows, the mean is accumulated as `sum(x / n)`
/// instead, which stays finite for any finite data.
pub fn mean(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Mean")?;
    let n = buffer.len() as f64;
    let total = sum(buffer)?;
    if total.is_finite() {
        Ok(total / n)
    } else {
        Ok(compensated_sum_by(buffer.as_slice(), |x| x / n))
    }
}

/// Median of the sorted values
///
/// The middle value for odd counts, the average of the two central values
/// for even counts.
pub fn median(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Median")?;
    Ok(median_of_sorted(buffer.as_slice()))
}

/// `(min + max) / 2`
pub fn midrange(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Midrange")?;
    Ok(midpoint(minimum(buffer)?, maximum(buffer)?))
}

/// Every value tied for the highest frequency, ascending
///
/// Returns an empty list when no value occurs more than once.
pub fn modes(buffer: &OrderedNumericBuffer) -> Result<Vec<f64>> {
    Error::check_size(buffer.len(), 1, "Mode(s)")?;
    let values = buffer.as_slice();
    let best = runs(values).map(|(_, count)| count).max().unwrap_or(0);
    if best <= 1 {
        return Ok(Vec::new());
    }
    Ok(runs(values)
        .filter(|&(_, count)| count == best)
        .map(|(value, _)| value)
        .collect())
}

/// Median of a non-empty sorted slice
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    let m = n / 2;
    if n % 2 == 1 {
        sorted[m]
    } else {
        midpoint(sorted[m - 1], sorted[m])
    }
}

/// `(a + b) / 2`, halving first when the sum would overflow
fn midpoint(a: f64, b: f64) -> f64 {
    let total = a + b;
    if total.is_finite() {
        total / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}
