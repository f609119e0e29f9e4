//! Higher-order moments: skewness and kurtosis
//!
//! Central moments are accumulated with compensated summation around the
//! mean. Data with zero spread yields 0 for every shape statistic instead of
//! a division by zero.

use crate::location::mean;
use sorted_core::{CompensatedSum, Error, EstimationMode, OrderedNumericBuffer, Result};

/// Sums of squared and cubed deviations from `mu`
fn second_and_third(values: &[f64], mu: f64) -> (f64, f64) {
    let mut m2 = CompensatedSum::new();
    let mut m3 = CompensatedSum::new();
    for &x in values {
        let d = x - mu;
        m2 += d * d;
        m3 += d * d * d;
    }
    (m2.value(), m3.value())
}

/// Skewness of the data
///
/// Population: `(m3 / n) / s^3` with `s = sqrt(m2 / n)`.
/// Sample: `g1 = (m3 / n) / s^3` with `s = sqrt(m2 / (n - 1))`, scaled by
/// `sqrt(n (n - 1)) / (n - 2)`.
pub fn skewness(buffer: &OrderedNumericBuffer, mode: EstimationMode) -> Result<f64> {
    match mode {
        EstimationMode::Sample => Error::check_size(buffer.len(), 3, "Skewness (sample)")?,
        EstimationMode::Population => {
            Error::check_size(buffer.len(), 1, "Skewness (population)")?
        }
    }
    let mu = mean(buffer)?;
    let (m2, m3) = second_and_third(buffer.as_slice(), mu);
    if m2 == 0.0 {
        return Ok(0.0);
    }

    let n = buffer.len() as f64;
    match mode {
        EstimationMode::Sample => {
            let s = (m2 / (n - 1.0)).sqrt();
            let g1 = (m3 / n) / (s * s * s);
            Ok((n * (n - 1.0)).sqrt() / (n - 2.0) * g1)
        }
        EstimationMode::Population => {
            let s = (m2 / n).sqrt();
            Ok((m3 / n) / (s * s * s))
        }
    }
}

/// Bias-corrected fourth standardized moment term and the excess correction
fn kurtosis_terms(buffer: &OrderedNumericBuffer) -> Result<Option<(f64, f64)>> {
    let mu = mean(buffer)?;
    let values = buffer.as_slice();
    let n = values.len() as f64;

    let ss = values
        .iter()
        .map(|&x| (x - mu) * (x - mu))
        .sum::<CompensatedSum>()
        .value();
    let s = (ss / (n - 1.0)).sqrt();
    if s == 0.0 {
        return Ok(None);
    }

    let sum_z4 = values
        .iter()
        .map(|&x| {
            let z = (x - mu) / s;
            let z2 = z * z;
            z2 * z2
        })
        .sum::<CompensatedSum>()
        .value();

    let term1 = (n * (n + 1.0)) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * sum_z4;
    let term2 = (3.0 * (n - 1.0) * (n - 1.0)) / ((n - 2.0) * (n - 3.0));
    Ok(Some((term1, term2)))
}

/// Bias-corrected kurtosis term
///
/// `n (n + 1) / ((n - 1)(n - 2)(n - 3)) * sum(z^4)` where `z` is standardized
/// with the sample standard deviation. For {0, 9, 34, 92} this is about
/// 14.944851.
pub fn kurtosis(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 4, "Kurtosis")?;
    Ok(kurtosis_terms(buffer)?.map_or(0.0, |(term1, _)| term1))
}

/// Excess kurtosis, the kurtosis term minus `3 (n - 1)^2 / ((n - 2)(n - 3))`
pub fn kurtosis_excess(buffer: &OrderedNumericBuffer) -> Result<f64> {
    Error::check_size(buffer.len(), 4, "Kurtosis Excess")?;
    Ok(kurtosis_terms(buffer)?.map_or(0.0, |(term1, term2)| term1 - term2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sorted_core::EstimationMode::{Population, Sample};

    fn buffer(values: &[f64]) -> OrderedNumericBuffer {
        values.iter().copied().collect()
    }

    #[test]
    fn test_kurtosis_reference_values() {
        let data = buffer(&[0.0, 9.0, 34.0, 92.0]);
        assert_relative_eq!(kurtosis(&data).unwrap(), 14.944851, epsilon = 1e-6);
        assert_relative_eq!(kurtosis_excess(&data).unwrap(), 1.444851, epsilon = 1e-6);
    }

    #[test]
    fn test_kurtosis_other_values() {
        let data = buffer(&[1.0, 2.0, 3.0, 4.0, 10.0]);
        assert_relative_eq!(kurtosis(&data).unwrap(), 11.152, epsilon = 1e-10);
        assert_relative_eq!(kurtosis_excess(&data).unwrap(), 3.152, epsilon = 1e-10);
    }

    #[test]
    fn test_kurtosis_requires_four() {
        let data = buffer(&[1.0, 2.0, 3.0]);
        match kurtosis(&data) {
            Err(Error::InsufficientData { statistic, required, actual }) => {
                assert_eq!(statistic, "Kurtosis");
                assert_eq!(required, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("Wrong result: {other:?}"),
        }
        assert!(matches!(
            kurtosis_excess(&data),
            Err(Error::InsufficientData { required: 4, .. })
        ));
        assert!(matches!(
            kurtosis(&OrderedNumericBuffer::new()),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn test_kurtosis_zero_spread() {
        let data = buffer(&[2.0; 5]);
        assert_eq!(kurtosis(&data).unwrap(), 0.0);
        assert_eq!(kurtosis_excess(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_skewness_values() {
        let data = buffer(&[1.0, 2.0, 3.0, 4.0, 10.0]);
        assert_relative_eq!(skewness(&data, Sample).unwrap(), 1.2143146215046576, epsilon = 1e-12);
        assert_relative_eq!(
            skewness(&data, Population).unwrap(),
            1.1384199576606164,
            epsilon = 1e-12
        );

        let data = buffer(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(skewness(&data, Population).unwrap(), 0.65625, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_symmetric_is_zero() {
        let data = buffer(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_relative_eq!(skewness(&data, Sample).unwrap(), 0.0);
        assert_relative_eq!(skewness(&data, Population).unwrap(), 0.0);
    }

    #[test]
    fn test_skewness_sign() {
        let right = buffer(&[1.0, 1.0, 2.0, 2.0, 3.0, 20.0]);
        assert!(skewness(&right, Sample).unwrap() > 0.0);
        let left = buffer(&[-20.0, 1.0, 1.0, 2.0, 2.0, 3.0]);
        assert!(skewness(&left, Sample).unwrap() < 0.0);
    }

    #[test]
    fn test_skewness_minimum_sizes() {
        let data = buffer(&[1.0, 2.0]);
        match skewness(&data, Sample) {
            Err(Error::InsufficientData { statistic, required, .. }) => {
                assert_eq!(statistic, "Skewness (sample)");
                assert_eq!(required, 3);
            }
            other => panic!("Wrong result: {other:?}"),
        }
        assert_relative_eq!(skewness(&data, Population).unwrap(), 0.0);
        // A single value has no spread
        assert_eq!(skewness(&buffer(&[7.0]), Population).unwrap(), 0.0);
    }
}
