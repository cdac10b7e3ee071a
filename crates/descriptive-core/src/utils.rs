//! Utility functions for working with data slices

use crate::{Error, Result};

/// Number of decimal places reported for every numeric statistic
pub const DECIMAL_PLACES: u32 = 4;

/// Round `value` to `places` decimal places (half away from zero)
///
/// # Examples
///
/// ```rust
/// use descriptive_core::utils::round_to;
///
/// assert_eq!(round_to(4.571428571, 4), 4.5714);
/// assert_eq!(round_to(-0.33335, 2), -0.33);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    // Values this large already have no fractional digits at this scale
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}

/// Round to [`DECIMAL_PLACES`]
pub fn round4(value: f64) -> f64 {
    round_to(value, DECIMAL_PLACES)
}

/// Fail with [`Error::InvalidValue`] if any value is NaN or infinite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::non_finite(context, index)),
        None => Ok(()),
    }
}

/// Sort data and return a new vector
///
/// Uses the IEEE total order, so NaN values land at the end.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Linearly interpolated quantile of already sorted data
///
/// Matches the default ("linear") method of numpy's `percentile`.
/// Returns NaN for empty input.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let p = p.clamp(0.0, 1.0);
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Median of already sorted data
///
/// The mean of the two middle values for even lengths.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round4(4.571_428_571), 4.5714);
        assert_eq!(round4(0.333_333_33), 0.3333);
        assert_eq!(round4(0.166_666_67), 0.1667);
        assert_eq!(round4(2.0), 2.0);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_round_non_finite() {
        assert!(round4(f64::NAN).is_nan());
        assert_eq!(round4(f64::INFINITY), f64::INFINITY);
        assert_eq!(round4(1e300), 1e300);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[1.0, 2.0, 3.0], "values").is_ok());
        assert!(ensure_finite(&[], "values").is_ok());

        let err = ensure_finite(&[1.0, f64::NAN, 3.0], "values").unwrap_err();
        assert!(err.to_string().contains("position 1"));
        assert!(ensure_finite(&[f64::NEG_INFINITY], "values").is_err());
    }

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, -1.0, 0.0, -5.0, 2.0];
        assert_eq!(sorted(&data), vec![-5.0, -1.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[-10.0, 10.0]), 0.0);
    }

    #[test]
    fn test_median_sorted() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median_sorted(&[42.0]), 42.0);
        assert!(median_sorted(&[]).is_nan());
    }

    #[test]
    fn test_quantile_sorted_linear() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&data, 0.0), 1.0);
        assert_eq!(quantile_sorted(&data, 0.25), 2.0);
        assert_eq!(quantile_sorted(&data, 0.5), 3.0);
        assert_eq!(quantile_sorted(&data, 1.0), 5.0);

        // numpy.percentile([1, 2, 3, 4], 25) == 1.75
        assert_relative_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.25), 1.75);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    proptest! {
        #[test]
        fn prop_median_between_extremes(data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let s = sorted(&data);
            let m = median_sorted(&s);
            prop_assert!(m >= s[0] && m <= s[s.len() - 1]);
            prop_assert!((quantile_sorted(&s, 0.5) - m).abs() <= 1e-6);
        }
    }
}
