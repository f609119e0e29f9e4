//! Descriptive statistics over an ordered numeric buffer
//!
//! Every statistic is a pure function of an [`OrderedNumericBuffer`] (and an
//! [`EstimationMode`] where sample and population estimates differ). Because
//! the buffer is always sorted, order statistics are direct index lookups and
//! equal values form contiguous runs.
//!
//! # Statistics
//!
//! | Statistic | Minimum size | Module |
//! |-----------|--------------|--------|
//! | min, max, range, sum, mean, median, midrange, modes | 1 | [`location`] |
//! | variance, std dev, SEM | 2 sample / 1 population | [`dispersion`] |
//! | sum of squares, mean abs deviation, RMS | 1 | [`dispersion`] |
//! | coefficient of variation, relative std dev | 1, mean != 0 | [`dispersion`] |
//! | quartiles, IQR, outliers | 2 | [`quartiles`] |
//! | skewness | 3 sample / 1 population | [`moments`] |
//! | kurtosis, kurtosis excess | 4 | [`moments`] |
//! | frequency table | 1 | [`frequency`] |
//!
//! An empty buffer always fails with [`Error::EmptyDataset`]; a buffer that
//! is too short for a statistic fails with [`Error::InsufficientData`] naming
//! the statistic and its minimum.
//!
//! # Example
//!
//! ```rust
//! use sorted_core::{EstimationMode, OrderedNumericBuffer};
//! use sorted_descriptive::Descriptive;
//!
//! let buffer: OrderedNumericBuffer = [5.0, 3.0, 8.0, 3.0].into_iter().collect();
//!
//! assert_eq!(buffer.mean().unwrap(), 4.75);
//! assert_eq!(buffer.median().unwrap(), 4.0);
//! assert_eq!(buffer.modes().unwrap(), vec![3.0]);
//!
//! let q = buffer.quartiles().unwrap();
//! assert_eq!((q.q1, q.q2, q.q3), (3.0, 4.0, 6.5));
//!
//! // Sample variance needs two values
//! let single: OrderedNumericBuffer = [1.0].into_iter().collect();
//! assert!(single.variance(EstimationMode::Sample).is_err());
//! ```

pub mod dispersion;
pub mod frequency;
pub mod location;
pub mod moments;
pub mod quartiles;
pub mod summary;
pub mod traits;

pub use dispersion::{
    coefficient_of_variation, mean_abs_deviation, relative_std_deviation, rms, standard_error,
    std_dev, sum_squares, variance,
};
pub use frequency::{frequency_table, runs, FrequencyEntry};
pub use location::{maximum, mean, median, midrange, minimum, modes, range, sum};
pub use moments::{kurtosis, kurtosis_excess, skewness};
pub use quartiles::{iqr, outliers, quartiles, Quartiles, TUKEY_FENCE};
pub use summary::Summary;
pub use traits::Descriptive;

pub use sorted_core::{Error, EstimationMode, OrderedNumericBuffer, Result};
