//! Compensated summation
//!
//! Running totals over the dataset (sums, sums of squares, powers of
//! deviations) are kept in a [`CompensatedSum`] rather than a bare `f64`.
//! The accumulator carries a second term holding the low-order bits lost by
//! each addition (Neumaier's variant of Kahan summation), which gives an
//! error bound independent of the number of terms.

use std::iter::Sum;
use std::ops::AddAssign;

/// Neumaier compensated accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Add one term
    ///
    /// Once the running total overflows it stays infinite; the compensation
    /// term is left untouched so it cannot turn the result into NaN.
    #[inline]
    pub fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if !t.is_finite() {
            self.sum = t;
            return;
        }
        if self.sum.abs() >= x.abs() {
            self.compensation += (self.sum - t) + x;
        } else {
            self.compensation += (x - t) + self.sum;
        }
        self.sum = t;
    }

    /// Narrow the running total to `f64`
    #[inline]
    pub fn value(&self) -> f64 {
        if self.sum.is_finite() {
            self.sum + self.compensation
        } else {
            self.sum
        }
    }
}

impl AddAssign<f64> for CompensatedSum {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.add(rhs);
    }
}

impl Sum<f64> for CompensatedSum {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        for x in iter {
            acc.add(x);
        }
        acc
    }
}

impl<'a> Sum<&'a f64> for CompensatedSum {
    fn sum<I: Iterator<Item = &'a f64>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Compensated sum of `f(x)` over `values`
#[inline]
pub fn compensated_sum_by<F>(values: &[f64], f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    values.iter().map(|&x| f(x)).sum::<CompensatedSum>().value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(CompensatedSum::new().value(), 0.0);
        assert_eq!(CompensatedSum::default().value(), 0.0);
    }

    #[test]
    fn test_recovers_lost_low_order_bits() {
        // Naive left-to-right summation returns 0.0 here
        let values = [1.0, 1e100, 1.0, -1e100];
        let naive: f64 = values.iter().sum();
        assert_eq!(naive, 0.0);

        let compensated: CompensatedSum = values.iter().sum();
        assert_eq!(compensated.value(), 2.0);
    }

    #[test]
    fn test_many_small_terms() {
        let mut acc = CompensatedSum::new();
        for _ in 0..1_000_000 {
            acc += 0.1;
        }
        assert_relative_eq!(acc.value(), 100_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sum_by() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(compensated_sum_by(&values, |x| x * x), 14.0);
    }

    #[test]
    fn test_overflow_is_infinite_not_nan() {
        let total: CompensatedSum = [1e308, 1e308].iter().sum();
        assert_eq!(total.value(), f64::INFINITY);

        let total: CompensatedSum = [-1e308, -1e308, 1.0].iter().sum();
        assert_eq!(total.value(), f64::NEG_INFINITY);

        // Squares of large deviations overflow term by term
        assert_eq!(compensated_sum_by(&[-1e200, 1e200], |x| x * x), f64::INFINITY);
    }

    #[test]
    fn test_large_terms_that_cancel_stay_finite() {
        let total: CompensatedSum = [1e308, 5e307, -1e308].iter().sum();
        assert_relative_eq!(total.value(), 5e307);
    }
}
