//! Plain-text statistics reports
//!
//! [`ReportRenderer`] prints the sorted data, one labeled line per
//! statistic and a frequency table. Numbers use the formatting of a default
//! C++ output stream (six significant digits, `%g` style), so reports line up
//! with those of existing tools.
//!
//! ```rust
//! use sorted_core::{Dataset, EstimationMode};
//!
//! let mut dataset = Dataset::new(EstimationMode::Sample);
//! for x in [5.0, 3.0, 8.0, 3.0] {
//!     dataset.insert(x);
//! }
//!
//! let report = sorted_report::render_to_string(&dataset).unwrap();
//! assert!(report.starts_with("DATA (sorted, n=4): 3 3 5 8\n"));
//! assert!(report.contains("Variance (sample): 5.58333\n"));
//! ```

pub mod config;
pub mod format;
pub mod renderer;

pub use config::ReportOptions;
pub use format::format_general;
pub use renderer::{render_all, render_to_string, write_to_file, ReportRenderer};
