//! Snapshot of every statistic for one state of the buffer

use crate::dispersion::{
    coefficient_of_variation, mean_abs_deviation, relative_std_deviation, rms, standard_error,
    std_dev, sum_squares, variance,
};
use crate::frequency::{frequency_table, FrequencyEntry};
use crate::location::{maximum, mean, median, midrange, minimum, modes, range, sum};
use crate::moments::{kurtosis, kurtosis_excess, skewness};
use crate::quartiles::{outliers, quartiles, Quartiles};
use sorted_core::{Dataset, EstimationMode, OrderedNumericBuffer, Result};

/// All descriptive statistics of a dataset, computed in one pass over the API
///
/// A `Summary` is a plain value: it is computed from the buffer as it is at
/// the time of the call and is not updated by later mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mode: EstimationMode,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub modes: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
    pub midrange: f64,
    pub quartiles: Quartiles,
    pub iqr: f64,
    pub outliers: Vec<f64>,
    pub sum_squares: f64,
    pub mean_abs_deviation: f64,
    pub rms: f64,
    pub standard_error: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub kurtosis_excess: f64,
    pub coefficient_of_variation: f64,
    pub relative_std_deviation: f64,
    pub frequencies: Vec<FrequencyEntry>,
}

impl Summary {
    /// Compute every statistic, failing with the first precondition that is not met
    ///
    /// Statistics are evaluated in report order, so an empty buffer fails with
    /// [`sorted_core::Error::EmptyDataset`] and a short one with the error of
    /// the first statistic whose minimum size is not reached.
    pub fn compute(buffer: &OrderedNumericBuffer, mode: EstimationMode) -> Result<Self> {
        let min = minimum(buffer)?;
        let max = maximum(buffer)?;
        let range = range(buffer)?;
        let sum = sum(buffer)?;
        let mean = mean(buffer)?;
        let median = median(buffer)?;
        let modes = modes(buffer)?;
        let variance = variance(buffer, mode)?;
        let std_dev = std_dev(buffer, mode)?;
        let midrange = midrange(buffer)?;
        let quartiles = quartiles(buffer)?;
        let outliers = outliers(buffer)?;
        let sum_squares = sum_squares(buffer)?;
        let mean_abs_deviation = mean_abs_deviation(buffer)?;
        let rms = rms(buffer)?;
        let standard_error = standard_error(buffer, mode)?;
        let skewness = skewness(buffer, mode)?;
        let kurtosis = kurtosis(buffer)?;
        let kurtosis_excess = kurtosis_excess(buffer)?;
        let coefficient_of_variation = coefficient_of_variation(buffer, mode)?;
        let relative_std_deviation = relative_std_deviation(buffer, mode)?;
        let frequencies = frequency_table(buffer)?;

        Ok(Self {
            mode,
            count: buffer.len(),
            min,
            max,
            range,
            sum,
            mean,
            median,
            modes,
            variance,
            std_dev,
            midrange,
            iqr: quartiles.iqr(),
            quartiles,
            outliers,
            sum_squares,
            mean_abs_deviation,
            rms,
            standard_error,
            skewness,
            kurtosis,
            kurtosis_excess,
            coefficient_of_variation,
            relative_std_deviation,
            frequencies,
        })
    }

    /// Summary of a dataset in its configured mode
    pub fn of(dataset: &Dataset) -> Result<Self> {
        Self::compute(dataset.buffer(), dataset.mode())
    }
}
