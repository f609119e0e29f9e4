//! # sorted-stats
//!
//! Descriptive statistics over a dataset that is kept sorted at all times.
//!
//! Values are inserted into an [`OrderedNumericBuffer`] in ascending
//! position, so order statistics (median, quartiles, outliers) are direct
//! index lookups and equal values form runs (modes, frequency table). Sums
//! use compensated accumulation.
//!
//! ## Crates
//!
//! - [`sorted_core`]: the buffer, [`Dataset`], [`EstimationMode`], import and
//!   [`Error`]
//! - [`sorted_descriptive`]: every statistic as a free function, the
//!   [`Descriptive`] method trait, and [`Summary`]
//! - [`sorted_report`]: the plain-text report and its file output
//!
//! ## Quick Start
//!
//! ```rust
//! use sorted_stats::prelude::*;
//!
//! let mut dataset = Dataset::new(EstimationMode::Sample);
//! dataset.buffer_mut().insert_tokens("12 7.5 3 7.5 20 1");
//!
//! assert_eq!(dataset.median().unwrap(), 7.5);
//! assert_eq!(dataset.modes().unwrap(), vec![7.5]);
//!
//! let q = dataset.quartiles().unwrap();
//! assert_eq!((q.q1, q.q3), (3.0, 12.0));
//!
//! let report = render_to_string(&dataset).unwrap();
//! assert!(report.starts_with("DATA (sorted, n=6): 1 3 7.5 7.5 12 20\n"));
//! ```

pub use sorted_core;
pub use sorted_descriptive;
pub use sorted_report;

pub use sorted_core::{
    CompensatedSum, Dataset, Error, EstimationMode, OrderedNumericBuffer, Result,
};
pub use sorted_descriptive::{Descriptive, FrequencyEntry, Quartiles, Summary};
pub use sorted_report::{render_all, render_to_string, write_to_file, ReportOptions, ReportRenderer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        render_all, render_to_string, write_to_file, Dataset, Descriptive, Error, EstimationMode,
        FrequencyEntry, OrderedNumericBuffer, Quartiles, ReportOptions, ReportRenderer, Result,
        Summary,
    };
}
