//! Dataset: an ordered buffer plus its estimation mode

use crate::buffer::OrderedNumericBuffer;
use crate::error::Result;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Whether the data is a sample or the whole population
///
/// Selects the denominator and bias corrections used by variance, standard
/// deviation, standard error, coefficient of variation, relative standard
/// deviation and skewness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EstimationMode {
    /// Bessel-corrected estimates (divide by n - 1)
    #[default]
    Sample,
    /// Population parameters (divide by n)
    Population,
}

impl EstimationMode {
    /// Lower-case name used in statistic labels
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Population => "population",
        }
    }

    /// Whether this is [`EstimationMode::Sample`]
    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample)
    }
}

impl fmt::Display for EstimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample => f.write_str("Sample"),
            Self::Population => f.write_str("Population"),
        }
    }
}

/// An ordered buffer together with the estimation mode applied to it
///
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    buffer: OrderedNumericBuffer,
    mode: EstimationMode,
}

impl Dataset {
    /// Create an empty dataset in the given mode
    pub fn new(mode: EstimationMode) -> Self {
        Self {
            buffer: OrderedNumericBuffer::new(),
            mode,
        }
    }

    /// Wrap an existing buffer
    pub fn from_buffer(buffer: OrderedNumericBuffer, mode: EstimationMode) -> Self {
        Self { buffer, mode }
    }

    /// Estimation mode used by mode-dependent statistics
    pub fn mode(&self) -> EstimationMode {
        self.mode
    }

    /// Switch between sample and population estimates; the data is unchanged
    ///
    /// ```rust
    /// use sorted_core::{Dataset, EstimationMode};
    ///
    /// let mut dataset = Dataset::new(EstimationMode::Sample);
    /// dataset.insert(2.0);
    /// dataset.set_mode(EstimationMode::Population);
    /// assert_eq!(dataset.mode(), EstimationMode::Population);
    /// assert_eq!(dataset.at(0), 2.0);
    /// ```
    pub fn set_mode(&mut self, mode: EstimationMode) {
        self.mode = mode;
    }

    /// The sorted values
    pub fn buffer(&self) -> &OrderedNumericBuffer {
        &self.buffer
    }

    /// Mutable access to the values; every buffer mutation keeps them sorted
    pub fn buffer_mut(&mut self) -> &mut OrderedNumericBuffer {
        &mut self.buffer
    }

    /// Drop the mode and keep the values
    pub fn into_buffer(self) -> OrderedNumericBuffer {
        self.buffer
    }

    /// See [`OrderedNumericBuffer::insert`]
    pub fn insert(&mut self, x: f64) {
        self.buffer.insert(x);
    }

    /// See [`OrderedNumericBuffer::erase_value`]
    pub fn erase_value(&mut self, v: f64, count: usize) -> usize {
        self.buffer.erase_value(v, count)
    }

    /// Remove every occurrence of `v`
    pub fn erase_all(&mut self, v: f64) -> usize {
        self.buffer.erase_value(v, usize::MAX)
    }

    /// See [`OrderedNumericBuffer::erase_at`]
    pub fn erase_at(&mut self, index: usize) {
        self.buffer.erase_at(index);
    }

    /// See [`OrderedNumericBuffer::clear`]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// See [`OrderedNumericBuffer::len`]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// See [`OrderedNumericBuffer::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// See [`OrderedNumericBuffer::capacity`]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// See [`OrderedNumericBuffer::at`]
    pub fn at(&self, index: usize) -> f64 {
        self.buffer.at(index)
    }

    /// Insert every finite number found in the file at `path`
    ///
    /// Returns the number of values inserted. A file that cannot be opened
    /// is reported as [`crate::Error::Io`] and leaves the dataset untouched.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "loading values from file");
        self.buffer.insert_from_reader(BufReader::new(file))
    }
}
