//! Dispersion statistics
//!
//! Variance, standard deviation and the statistics derived from them take an
//! explicit [`EstimationMode`]: [`EstimationMode::Sample`] divides the sum of
//! squared deviations by `n - 1` and needs at least two values,
//! [`EstimationMode::Population`] divides by `n`.

use crate::location::mean;
use sorted_core::{compensated_sum_by, Error, EstimationMode, OrderedNumericBuffer, Result};

/// Variance around the mean
pub fn variance(buffer: &OrderedNumericBuffer, mode: EstimationMode) -> Result<f64> {
    match mode {
        EstimationMode::Sample => Error::check_size(buffer.len(), 2, "Variance (sample)")?,
        EstimationMode::Population => {
            Error::check_size(buffer.len(), 1, "Variance (population)")?
        }
    }
    let mu = mean(buffer)?;
    let ss = compensated_sum_by(buffer.as_slice(), |x| {
        let d = x - mu;
        d * d
    });
    let denom = match mode {
        EstimationMode::Sample => (buffer.len() - 1) as f64,
        EstimationMode::Population => buffer.len() as f64,
    };
    let var = ss / denom;
    // Only rounding noise is clamped; an overflowed sum stays infinite
    Ok(if var < 0.0 { 0.0 } else { var })
}

/// Standard deviation, `sqrt(variance)`
pub fn std_dev(buffer: &OrderedNumericBuffer, mode: EstimationMode) -> Result<f64> {
    Ok(variance(buffer, mode)?.sqrt())
}

/// Standard error of the mean, `std_dev / sqrt(n)`
pub fn standard_error(buffer: &OrderedNumericBuffer, mode: EstimationMode) -> Result<f64> {
    match mode {
        EstimationMode::Sample => {
            Error::check_size(buffer.len(), 2, "Standard Error of Mean (sample)")?
        }
        EstimationMode::Population => {
            Error::check_size(buffer.len(), 1, "Standard Error of Mean (population)")?
        }
    }
    Ok(std_dev(buffer, mode)? / (buffer.len() as f64).sqrt())
}

/// Sum of squared values
pub fn sum_squares(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Sum of Squares")?;
    Ok(compensated_sum_by(buffer.as_slice(), |x| x * x))
}

/// Mean absolute deviation from the mean
pub fn mean_abs_deviation(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Mean Absolute Deviation")?;
    let mu = mean(buffer)?;
    let total = compensated_sum_by(buffer.as_slice(), |x| (x - mu).abs());
    Ok(total / buffer.len() as f64)
}

/// Root mean square, `sqrt(sum_squares / n)`
pub fn rms(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 1, "Root Mean Square")?;
    Ok((sum_squares(buffer)? / buffer.len() as f64).sqrt())
}

/// `std_dev / mean`
///
/// Fails with [`Error::UndefinedResult`] when the mean is exactly zero.
pub fn coefficient_of_variation(
    buffer: &OrderedNumericBuffer,
    mode: EstimationMode,
) -> Result<f64> {
    const LABEL: &str = "Coefficient of Variation";
    Error::check_size(buffer.len(), 1, LABEL)?;
    let mu = mean(buffer)?;
    if mu == 0.0 {
        return Err(Error::zero_mean(LABEL));
    }
    Ok(std_dev(buffer, mode)? / mu)
}

/// Coefficient of variation as a percentage
pub fn relative_std_deviation(buffer: &OrderedNumericBuffer, mode: EstimationMode) -> Result<f64> {
    const LABEL: &str = "Relative Standard Deviation";
    Error::check_size(buffer.len(), 1, LABEL)?;
    match coefficient_of_variation(buffer, mode) {
        Ok(cv) => Ok(100.0 * cv),
        Err(Error::UndefinedResult { .. }) => Err(Error::zero_mean(LABEL)),
        Err(e) => Err(e),
    }
}
