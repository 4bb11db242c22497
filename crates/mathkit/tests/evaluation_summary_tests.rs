//! Tests for the descriptive sample summary.
//!
//! ## Test Organization
//!
//! 1. **Computation** - Field values for typical samples
//! 2. **Partial Statistics** - Missing mode and spread
//! 3. **Display** - Report formatting
//! 4. **Validation** - Rejected samples

use approx::assert_relative_eq;

use mathkit::prelude::*;

// ============================================================================
// Computation
// ============================================================================

/// Test every field on a sample with a unique mode.
#[test]
fn test_summary_fields() {
    let data = [4.0, 1.0, 4.0, 3.0, 8.0];
    let summary = Summary::from_sample(&data).unwrap();

    assert_eq!(summary.count, 5);
    assert_relative_eq!(summary.mean, 4.0, epsilon = 1e-12);
    assert_eq!(summary.median, 4.0);
    assert_eq!(summary.mode, Some(4.0));
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 8.0);
    assert_eq!(summary.range(), 7.0);

    // Squared deviations: 0 + 9 + 0 + 1 + 16 = 26, n - 1 = 4
    assert_relative_eq!(summary.variance.unwrap(), 6.5, epsilon = 1e-12);
    assert_relative_eq!(summary.stdev.unwrap(), 6.5_f64.sqrt(), epsilon = 1e-12);
}

/// Test that the summary agrees with the standalone statistics.
#[test]
fn test_summary_matches_functions() {
    let data = [2.5, -1.0, 7.25, 3.0, 3.0, 0.5];
    let summary = Summary::from_sample(&data).unwrap();

    assert_eq!(summary.mean, mean(&data).unwrap());
    assert_eq!(summary.median, median(&data).unwrap());
    assert_eq!(summary.mode, mode(&data).ok());
    assert_eq!(summary.variance, variance(&data).ok());
    assert_eq!(summary.stdev, stdev(&data).ok());
}

// ============================================================================
// Partial Statistics
// ============================================================================

/// Test that a tie leaves the mode empty instead of failing.
#[test]
fn test_summary_no_unique_mode() {
    let summary = Summary::from_sample(&[1.0, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!(summary.mode, None);
    assert_eq!(summary.median, 2.5);
}

/// Test that a single value has no spread.
#[test]
fn test_summary_single_value() {
    let summary = Summary::from_sample(&[42.0]).unwrap();

    assert_eq!(summary.count, 1);
    assert_eq!(summary.mean, 42.0);
    assert_eq!(summary.mode, Some(42.0));
    assert_eq!(summary.variance, None);
    assert_eq!(summary.stdev, None);
    assert_eq!(summary.range(), 0.0);
}

/// Test that an overflowing variance is dropped while the rest survives.
#[test]
fn test_summary_overflowing_variance() {
    let summary = Summary::from_sample(&[1e200, -1e200]).unwrap();

    assert_eq!(summary.mean, 0.0);
    assert_eq!(summary.variance, None);
    assert_relative_eq!(
        summary.stdev.unwrap(),
        2.0_f64.sqrt() * 1e200,
        max_relative = 1e-12
    );

    let text = summary.to_string();
    assert!(text.contains("  Variance: n/a"));
    assert!(!text.contains("  Std Dev:  n/a"));
}

// ============================================================================
// Display
// ============================================================================

/// Test the report layout.
#[test]
fn test_summary_display() {
    let summary = Summary::from_sample(&[1.0, 2.0, 3.0]).unwrap();
    let text = summary.to_string();

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("  Count:    3"));
    assert!(text.contains("  Mean:     2.000000"));
    assert!(text.contains("  Mode:     none"));
    assert!(text.contains("  Std Dev:  1.000000"));
}

/// Test the report for a single value.
#[test]
fn test_summary_display_single_value() {
    let text = Summary::from_sample(&[5.0_f32]).unwrap().to_string();

    assert!(text.contains("  Mode:     5.000000"));
    assert!(text.contains("  Variance: n/a"));
    assert!(text.contains("  Std Dev:  n/a"));
}

// ============================================================================
// Validation
// ============================================================================

/// Test that invalid samples are rejected.
#[test]
fn test_summary_invalid_sample() {
    assert_eq!(
        Summary::<f64>::from_sample(&[]),
        Err(MathError::EmptyInput)
    );
    assert!(matches!(
        Summary::from_sample(&[1.0, f64::NEG_INFINITY]),
        Err(MathError::InvalidNumericValue(_))
    ));
}
