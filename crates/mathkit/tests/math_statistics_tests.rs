//! Tests for descriptive statistics.
//!
//! These tests verify:
//! - Mean and median for odd, even and unsorted samples
//! - Mode policy (unique mode or error) and multimode
//! - Sample variance and standard deviation
//! - Sample validation
//!
//! ## Test Organization
//!
//! 1. **Location** - Mean, median
//! 2. **Mode** - Unique, tied and multimode
//! 3. **Spread** - Variance, standard deviation, extreme magnitudes
//! 4. **Validation** - Empty, too small and non-finite samples

use approx::assert_relative_eq;

use mathkit::prelude::*;

// ============================================================================
// Location
// ============================================================================

/// Test the mean of a simple sample.
#[test]
fn test_mean_basic() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
    assert_eq!(mean(&[-2.0, 2.0]), Ok(0.0));
    assert_eq!(mean(&[7.5]), Ok(7.5));
}

/// Test the median of odd and even samples.
#[test]
fn test_median_odd_even() {
    assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
    assert_eq!(median(&[5.0]), Ok(5.0));
}

/// Test that the median does not reorder the caller's data.
#[test]
fn test_median_preserves_input() {
    let data = vec![9.0, 1.0, 8.0, 2.0, 7.0, 3.0];
    let m = median(&data).unwrap();

    assert_eq!(m, 5.0);
    assert_eq!(data, vec![9.0, 1.0, 8.0, 2.0, 7.0, 3.0]);
}

/// Test the median with repeated values.
#[test]
fn test_median_duplicates() {
    assert_eq!(median(&[2.0, 2.0, 2.0, 5.0]), Ok(2.0));
    assert_eq!(median(&[1.0, 3.0, 3.0, 3.0]), Ok(3.0));
}

/// Test the median is robust to an outlier.
#[test]
fn test_median_outlier() {
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 1e9]), Ok(3.0));
}

// ============================================================================
// Mode
// ============================================================================

/// Test a sample with a unique mode.
#[test]
fn test_mode_unique() {
    assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 2.0, 1.0]), Ok(2.0));
    assert_eq!(mode(&[4.0]), Ok(4.0));
}

/// Test that ties are rejected.
#[test]
fn test_mode_tied() {
    assert_eq!(
        mode(&[1.0, 1.0, 2.0, 2.0, 3.0]),
        Err(MathError::NoUniqueMode { candidates: 2 })
    );
    assert_eq!(
        mode(&[1.0, 2.0, 3.0]),
        Err(MathError::NoUniqueMode { candidates: 3 })
    );
}

/// Test multimode ordering by first appearance.
#[test]
fn test_multimode() {
    assert_eq!(multimode(&[3.0, 1.0, 1.0, 3.0, 2.0]), Ok(vec![3.0, 1.0]));
    assert_eq!(multimode(&[5.0, 5.0, 1.0]), Ok(vec![5.0]));
    assert_eq!(multimode(&[2.0, 1.0]), Ok(vec![2.0, 1.0]));
}

/// Test that counting is independent of input order and sign of zero.
#[test]
fn test_multimode_unsorted_runs() {
    let data = [9.0, -1.0, 4.0, 9.0, 4.0, -1.0, 7.0, 4.0, 9.0];
    assert_eq!(multimode(&data), Ok(vec![9.0, 4.0]));

    // -0.0 == 0.0, so both count toward one value, reported as first seen.
    let zeros: Vec<f64> = multimode(&[-0.0, 1.0, 0.0]).unwrap();
    assert_eq!(zeros.len(), 1);
    assert!(zeros[0].is_sign_negative());
}

// ============================================================================
// Spread
// ============================================================================

/// Test sample variance and standard deviation.
#[test]
fn test_variance_stdev_basic() {
    assert_relative_eq!(variance(&[1.0, 2.0, 3.0]).unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(stdev(&[1.0, 2.0, 3.0]).unwrap(), 1.0, epsilon = 1e-12);
}

/// Test a textbook sample.
#[test]
fn test_variance_textbook() {
    // Mean 5, squared deviations sum to 32, n - 1 = 7
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    assert_relative_eq!(variance(&data).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
    assert_relative_eq!(
        stdev(&data).unwrap(),
        (32.0_f64 / 7.0).sqrt(),
        epsilon = 1e-12
    );
}

/// Test that constant samples have zero spread.
#[test]
fn test_variance_constant() {
    assert_eq!(variance(&[4.5, 4.5, 4.5]), Ok(0.0));
}

/// Test that the two-pass variance survives a large offset.
#[test]
fn test_variance_large_offset() {
    let data = [1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0];
    assert_relative_eq!(variance(&data).unwrap(), 1.0, epsilon = 1e-6);
}

/// Test that sums near the float limits do not overflow.
#[test]
fn test_mean_extreme_magnitudes() {
    assert_eq!(mean(&[f64::MAX, f64::MAX]), Ok(f64::MAX));
    assert_eq!(mean(&[f64::MAX, -f64::MAX]), Ok(0.0));
    assert_eq!(median(&[f64::MAX, f64::MAX]), Ok(f64::MAX));
    assert_eq!(median(&[-f64::MAX, f64::MAX]), Ok(0.0));
    assert_eq!(mean(&[f32::MAX, f32::MAX]), Ok(f32::MAX));
}

/// Test spread of samples whose squared deviations leave the float range.
#[test]
fn test_spread_extreme_magnitudes() {
    // Variance 2e400 overflows, but the standard deviation is representable.
    let wide = [1e200, -1e200];
    assert_eq!(
        variance(&wide),
        Err(MathError::NonFiniteResult {
            operation: "variance"
        })
    );
    assert_relative_eq!(
        stdev(&wide).unwrap(),
        2.0_f64.sqrt() * 1e200,
        max_relative = 1e-12
    );

    // Squared deviations of 1e-200 underflow without rescaling.
    let narrow = [1e-200, -1e-200];
    assert_relative_eq!(
        stdev(&narrow).unwrap(),
        2.0_f64.sqrt() * 1e-200,
        max_relative = 1e-12
    );

    assert_eq!(
        stdev(&[f64::MAX, -f64::MAX]),
        Err(MathError::NonFiniteResult { operation: "stdev" })
    );
}

/// Test statistics in single precision.
#[test]
fn test_statistics_f32() {
    let data = [1.0_f32, 2.0, 3.0, 4.0];

    assert_eq!(mean(&data), Ok(2.5));
    assert_eq!(median(&data), Ok(2.5));
    assert_relative_eq!(variance(&data).unwrap(), 5.0 / 3.0, epsilon = 1e-6);
}

// ============================================================================
// Validation
// ============================================================================

/// Test that every statistic rejects an empty sample.
#[test]
fn test_empty_sample() {
    let empty: [f64; 0] = [];

    assert_eq!(mean(&empty), Err(MathError::EmptyInput));
    assert_eq!(median(&empty), Err(MathError::EmptyInput));
    assert_eq!(mode(&empty), Err(MathError::EmptyInput));
    assert_eq!(multimode(&empty), Err(MathError::EmptyInput));
    assert_eq!(variance(&empty), Err(MathError::EmptyInput));
    assert_eq!(stdev(&empty), Err(MathError::EmptyInput));
}

/// Test that spread needs two values.
#[test]
fn test_single_value_spread() {
    let err = MathError::TooFewPoints { got: 1, min: 2 };

    assert_eq!(variance(&[1.0]), Err(err.clone()));
    assert_eq!(stdev(&[1.0]), Err(err));
}

/// Test that non-finite values are rejected with their position.
#[test]
fn test_non_finite_sample() {
    let res = mean(&[1.0, f64::NAN, 3.0]);
    assert_eq!(
        res,
        Err(MathError::InvalidNumericValue("data[1]=NaN".into()))
    );

    assert!(matches!(
        median(&[f64::INFINITY]),
        Err(MathError::InvalidNumericValue(_))
    ));
}
