//! Core types for descriptive statistics over a sorted dataset
//!
//! This crate provides the storage layer the statistics engine and the
//! report renderer are built on:
//!
//! - [`OrderedNumericBuffer`]: a growable buffer of finite `f64` values that
//!   stays in ascending order under insertion and erasure
//! - [`Dataset`]: a buffer together with its [`EstimationMode`]
//! - [`CompensatedSum`]: the extended-precision accumulator used for every
//!   running total
//! - [`Error`]: the error taxonomy shared by all sorted-stats crates
//!
//! # Example
//!
//! ```rust
//! use sorted_core::{Dataset, EstimationMode};
//!
//! let mut dataset = Dataset::new(EstimationMode::Sample);
//! for x in [5.0, 3.0, 8.0, 3.0] {
//!     dataset.insert(x);
//! }
//! assert_eq!(dataset.buffer().as_slice(), &[3.0, 3.0, 5.0, 8.0]);
//!
//! // Import skips tokens that are not finite numbers
//! let inserted = dataset.buffer_mut().insert_tokens("1 two 3");
//! assert_eq!(inserted, 2);
//! assert_eq!(dataset.len(), 6);
//! ```

pub mod accumulator;
pub mod buffer;
pub mod dataset;
pub mod error;
pub mod import;

pub use accumulator::{compensated_sum_by, CompensatedSum};
pub use buffer::{OrderedNumericBuffer, MIN_CAPACITY};
pub use dataset::{Dataset, EstimationMode};
pub use error::{Error, Result};
pub use import::{parse_token, parse_tokens};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Dataset, Error, EstimationMode, OrderedNumericBuffer, Result};
}
