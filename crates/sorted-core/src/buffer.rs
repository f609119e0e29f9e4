//! Growable buffer of finite values kept in ascending order
//!
//! [`OrderedNumericBuffer`] owns a contiguous `Vec<f64>` and keeps it sorted
//! under every mutation: insertion finds its slot with a lower-bound binary
//! search and shifts the tail right, erasure shifts the tail left to close
//! the gap. Capacity is tracked explicitly so growth follows a fixed
//! doubling policy (minimum 8 slots) and never shrinks on erase.

use std::ops::Index;
use tracing::trace;

/// Capacity of the first allocation
pub const MIN_CAPACITY: usize = 8;

/// Sorted, growable sequence of finite `f64` values
#[derive(Debug, Default)]
pub struct OrderedNumericBuffer {
    elements: Vec<f64>,
    capacity: usize,
}

impl OrderedNumericBuffer {
    /// Create an empty buffer; nothing is allocated until the first insert
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            capacity: 0,
        }
    }

    /// Create an empty buffer with room for `capacity` values
    ///
    /// A requested capacity of zero allocates [`MIN_CAPACITY`] slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity > 0 { capacity } else { MIN_CAPACITY };
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert `x` at its sorted position
    ///
    /// # Panics
    ///
    /// Panics if `x` is NaN or infinite.
    pub fn insert(&mut self, x: f64) {
        assert!(x.is_finite(), "cannot insert non-finite value {x}");
        let pos = self.lower_bound(x);
        self.insert_at(pos, x);
    }

    /// Remove up to `count` occurrences of `v`, returning how many were removed
    ///
    /// Pass `usize::MAX` (or any count >= `len()`) to remove every occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn erase_value(&mut self, v: f64, count: usize) -> usize {
        assert!(count >= 1, "erase count must be at least 1");
        let pos = self.lower_bound(v);
        let run = self.elements[pos..]
            .iter()
            .take(count)
            .take_while(|&&x| x == v)
            .count();
        if run > 0 {
            self.remove_range(pos, run);
        }
        run
    }

    /// Remove the value at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase_at(&mut self, index: usize) {
        assert!(
            index < self.elements.len(),
            "erase index {index} out of bounds for length {}",
            self.elements.len()
        );
        self.remove_range(index, 1);
    }

    /// Drop every value, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the buffer holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of slots allocated
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Value at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> f64 {
        assert!(
            index < self.elements.len(),
            "index {index} out of bounds for length {}",
            self.elements.len()
        );
        self.elements[index]
    }

    /// Value at `index`, or `None` when out of bounds
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.elements.get(index).copied()
    }

    /// Sorted view of the stored values
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    /// Iterate the values in ascending order
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.elements.iter().copied()
    }

    /// First index whose value is `>= x`, or `len()` if there is none
    pub fn lower_bound(&self, x: f64) -> usize {
        let (mut lo, mut hi) = (0, self.elements.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.elements[mid] < x {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    fn grow_if_needed(&mut self) {
        if self.elements.len() < self.capacity {
            return;
        }
        let new_capacity = (self.capacity * 2).max(MIN_CAPACITY);
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "growing ordered buffer"
        );
        self.elements
            .reserve_exact(new_capacity - self.elements.len());
        self.capacity = new_capacity;
    }

    fn insert_at(&mut self, pos: usize, x: f64) {
        debug_assert!(pos <= self.elements.len());
        self.grow_if_needed();
        let len = self.elements.len();
        // Open one slot at the end, then move the tail right over it
        self.elements.push(x);
        if pos < len {
            self.elements.copy_within(pos..len, pos + 1);
            self.elements[pos] = x;
        }
    }

    fn remove_range(&mut self, start: usize, count: usize) {
        let len = self.elements.len();
        self.elements.copy_within(start + count..len, start);
        self.elements.truncate(len - count);
    }
}

impl Clone for OrderedNumericBuffer {
    /// Deep copy with the same logical capacity
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Self {
            elements,
            capacity: self.capacity,
        }
    }
}

impl PartialEq for OrderedNumericBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Index<usize> for OrderedNumericBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.elements[index]
    }
}

impl Extend<f64> for OrderedNumericBuffer {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl FromIterator<f64> for OrderedNumericBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<'a> IntoIterator for &'a OrderedNumericBuffer {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
