//! Method-style access to the statistics engine

use crate::{dispersion, frequency, location, moments, quartiles};
use crate::{FrequencyEntry, Quartiles, Summary};
use sorted_core::{Dataset, EstimationMode, OrderedNumericBuffer, Result};

/// Descriptive statistics as methods on sorted data
///
/// Every method recomputes its result from the current contents; nothing is
/// cached between calls. Statistics that distinguish sample from population
/// estimation take the [`EstimationMode`] explicitly.
pub trait Descriptive {
    /// The sorted values the statistics are computed from
    fn sorted_buffer(&self) -> &OrderedNumericBuffer;

    /// Smallest value; needs 1 value
    fn min(&self) -> Result<f64> {
        location::minimum(self.sorted_buffer())
    }

    /// Largest value; needs 1 value
    fn max(&self) -> Result<f64> {
        location::maximum(self.sorted_buffer())
    }

    /// `max - min`; needs 1 value
    fn range(&self) -> Result<f64> {
        location::range(self.sorted_buffer())
    }

    /// Compensated sum of all values; needs 1 value
    fn sum(&self) -> Result<f64> {
        location::sum(self.sorted_buffer())
    }

    /// Arithmetic mean; needs 1 value
    fn mean(&self) -> Result<f64> {
        location::mean(self.sorted_buffer())
    }

    /// Middle value, or the average of the two central ones; needs 1 value
    fn median(&self) -> Result<f64> {
        location::median(self.sorted_buffer())
    }

    /// Values tied for the longest run, ascending
    ///
    /// Needs 1 value. Empty when every value occurs once.
    fn modes(&self) -> Result<Vec<f64>> {
        location::modes(self.sorted_buffer())
    }

    /// Variance in the given mode
    ///
    /// Needs 2 values for [`EstimationMode::Sample`] (divides by `n - 1`)
    /// and 1 for [`EstimationMode::Population`] (divides by `n`).
    ///
    /// ```rust
    /// use sorted_core::{Error, EstimationMode, OrderedNumericBuffer};
    /// use sorted_descriptive::Descriptive;
    ///
    /// let single: OrderedNumericBuffer = [4.0].into_iter().collect();
    /// assert_eq!(single.variance(EstimationMode::Population).unwrap(), 0.0);
    /// assert!(matches!(
    ///     single.variance(EstimationMode::Sample),
    ///     Err(Error::InsufficientData { required: 2, .. })
    /// ));
    /// ```
    fn variance(&self, mode: EstimationMode) -> Result<f64> {
        dispersion::variance(self.sorted_buffer(), mode)
    }

    /// Square root of [`Descriptive::variance`], with the same minimum sizes
    fn std_dev(&self, mode: EstimationMode) -> Result<f64> {
        dispersion::std_dev(self.sorted_buffer(), mode)
    }

    /// `(min + max) / 2`; needs 1 value
    fn midrange(&self) -> Result<f64> {
        location::midrange(self.sorted_buffer())
    }

    /// Tukey quartiles (medians of the lower and upper halves); needs 2 values
    fn quartiles(&self) -> Result<Quartiles> {
        quartiles::quartiles(self.sorted_buffer())
    }

    /// `Q3 - Q1`; needs 2 values
    fn iqr(&self) -> Result<f64> {
        quartiles::iqr(self.sorted_buffer())
    }

    /// Values beyond 1.5 IQR from the outer quartiles, ascending; needs 2 values
    fn outliers(&self) -> Result<Vec<f64>> {
        quartiles::outliers(self.sorted_buffer())
    }

    /// Sum of squared values; needs 1 value
    fn sum_squares(&self) -> Result<f64> {
        dispersion::sum_squares(self.sorted_buffer())
    }

    /// Mean absolute deviation from the mean; needs 1 value
    fn mean_abs_deviation(&self) -> Result<f64> {
        dispersion::mean_abs_deviation(self.sorted_buffer())
    }

    /// Root mean square; needs 1 value
    fn rms(&self) -> Result<f64> {
        dispersion::rms(self.sorted_buffer())
    }

    /// Standard error of the mean, `std_dev(mode) / sqrt(n)`
    ///
    /// Needs 2 values for the sample estimate and 1 for the population one.
    fn standard_error(&self, mode: EstimationMode) -> Result<f64> {
        dispersion::standard_error(self.sorted_buffer(), mode)
    }

    /// Skewness in the given mode
    ///
    /// Needs 3 values for the adjusted sample estimate and 1 for the
    /// population one. Returns 0 when all values are equal.
    fn skewness(&self, mode: EstimationMode) -> Result<f64> {
        moments::skewness(self.sorted_buffer(), mode)
    }

    /// Bias-corrected kurtosis term; needs 4 values, 0 when all values are equal
    ///
    /// Always standardized with the sample standard deviation, whatever the
    /// dataset's mode.
    fn kurtosis(&self) -> Result<f64> {
        moments::kurtosis(self.sorted_buffer())
    }

    /// Kurtosis minus `3 (n - 1)^2 / ((n - 2)(n - 3))`; needs 4 values
    fn kurtosis_excess(&self) -> Result<f64> {
        moments::kurtosis_excess(self.sorted_buffer())
    }

    /// `std_dev(mode) / mean`
    ///
    /// Needs the same sizes as [`Descriptive::std_dev`] and fails with
    /// [`sorted_core::Error::UndefinedResult`] when the mean is 0.
    fn coefficient_of_variation(&self, mode: EstimationMode) -> Result<f64> {
        dispersion::coefficient_of_variation(self.sorted_buffer(), mode)
    }

    /// Coefficient of variation as a percentage, with the same preconditions
    fn relative_std_deviation(&self, mode: EstimationMode) -> Result<f64> {
        dispersion::relative_std_deviation(self.sorted_buffer(), mode)
    }

    /// Distinct values with their counts, ascending; needs 1 value
    fn frequency_table(&self) -> Result<Vec<FrequencyEntry>> {
        frequency::frequency_table(self.sorted_buffer())
    }

    /// Every statistic at once, failing with the first unmet precondition
    ///
    /// The full set needs at least 4 values and a non-zero mean.
    fn summary(&self, mode: EstimationMode) -> Result<Summary> {
        Summary::compute(self.sorted_buffer(), mode)
    }
}

impl Descriptive for OrderedNumericBuffer {
    fn sorted_buffer(&self) -> &OrderedNumericBuffer {
        self
    }
}

impl Descriptive for Dataset {
    fn sorted_buffer(&self) -> &OrderedNumericBuffer {
        self.buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sorted_core::Error;

    #[test]
    fn test_methods_on_buffer() {
        let mut buffer = OrderedNumericBuffer::new();
        for x in [5.0, 3.0, 8.0, 3.0] {
            buffer.insert(x);
        }
        assert_eq!(buffer.as_slice(), &[3.0, 3.0, 5.0, 8.0]);
        assert_relative_eq!(buffer.mean().unwrap(), 4.75);
        assert_relative_eq!(buffer.median().unwrap(), 4.0);
        assert_eq!(buffer.modes().unwrap(), vec![3.0]);
        assert_relative_eq!(
            buffer.variance(EstimationMode::Sample).unwrap(),
            16.75 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_methods_on_dataset() {
        let mut dataset = Dataset::new(EstimationMode::Sample);
        assert!(matches!(dataset.min(), Err(Error::EmptyDataset)));

        dataset.insert(10.0);
        dataset.insert(20.0);
        assert_eq!(dataset.range().unwrap(), 10.0);
        assert_eq!(dataset.iqr().unwrap(), 10.0);
        assert_relative_eq!(dataset.std_dev(dataset.mode()).unwrap(), 50f64.sqrt());
        assert_eq!(dataset.frequency_table().unwrap().len(), 2);
    }
}
