//! Layout options for rendered reports

/// Column widths and precisions of a report
///
/// The defaults give the reference layout: frequency table columns
/// left-justified to 10, 12 and 12 characters, percentages with two
/// decimals, and every other number with six significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Width of the frequency table's value column
    pub value_width: usize,
    /// Width of the frequency table's count column
    pub count_width: usize,
    /// Width of the frequency table's percentage column
    pub percent_width: usize,
    /// Decimals printed for frequency percentages
    pub percent_precision: usize,
    /// Significant digits for every other number
    pub significant_digits: usize,
}

impl ReportOptions {
    pub const fn new() -> Self {
        Self {
            value_width: 10,
            count_width: 12,
            percent_width: 12,
            percent_precision: 2,
            significant_digits: 6,
        }
    }

    /// Set the width of the value column
    pub fn with_value_width(mut self, width: usize) -> Self {
        self.value_width = width;
        self
    }

    /// Set the width of the count column
    pub fn with_count_width(mut self, width: usize) -> Self {
        self.count_width = width;
        self
    }

    /// Set the width of the percentage column
    pub fn with_percent_width(mut self, width: usize) -> Self {
        self.percent_width = width;
        self
    }

    /// Set the number of decimals for percentages
    pub fn with_percent_precision(mut self, precision: usize) -> Self {
        self.percent_precision = precision;
        self
    }

    /// Set the number of significant digits
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        assert!(digits > 0, "Significant digits must be positive");
        self.significant_digits = digits;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}
