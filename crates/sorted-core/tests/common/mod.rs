//! Shared utilities for integration tests

#![allow(dead_code)]

use proptest::prelude::*;

/// Finite values on a coarse grid so ties are common
pub fn value_strategy() -> impl Strategy<Value = f64> {
    (-50i32..=50).prop_map(|i| f64::from(i) * 0.5)
}

/// Vectors of grid values, including the empty vector
pub fn values_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(value_strategy(), 0..max_len)
}

/// Whether `values` is in non-decreasing order
pub fn is_sorted(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Reference result: the same values sorted with the standard library
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
