//! Descriptive statistics over a sample.
//!
//! ## Purpose
//!
//! This module computes the location and spread of a finite sample: mean,
//! median, mode(s), and the sample variance and standard deviation.
//!
//! ## Design notes
//!
//! * **Validated**: Samples must be non-empty and finite; variance and
//!   standard deviation need at least two values.
//! * **Selection**: The median uses `select_nth_unstable_by` (quickselect,
//!   O(n) expected) on a scratch copy; the caller's slice is never reordered.
//! * **Two-pass variance**: Deviations are taken from the computed mean,
//!   avoiding the cancellation of the sum-of-squares formula.
//! * **Rescaled sums**: Values are divided by a power of two near the largest
//!   magnitude before summing, so finite samples near the float limits do
//!   not overflow. A spread that is itself beyond the float range is an error.
//! * **Counting**: Modes are found by sorting a copy and counting runs,
//!   O(n log n).
//!
//! ## Key concepts
//!
//! * **Sample statistics**: Variance divides by n − 1 (Bessel's correction).
//! * **Mode policy**: A mode must be unique; ties are an error, and
//!   [`multimode`] reports every tied value instead.
//!
//! ## Invariants
//!
//! * `variance >= 0` and `stdev = sqrt(variance)` whenever both are finite.
//! * `multimode` lists values in order of first appearance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::scaling::binary_scale;
use crate::primitives::errors::MathError;

// ============================================================================
// Location
// ============================================================================

/// Arithmetic mean.
///
/// # Errors
///
/// [`MathError::EmptyInput`] or [`MathError::InvalidNumericValue`].
pub fn mean<T: Float>(data: &[T]) -> Result<T, MathError> {
    Validator::validate_sample(data)?;
    Ok(sample_mean(data))
}

/// Median; the average of the two middle values for even-length samples.
///
/// # Errors
///
/// [`MathError::EmptyInput`] or [`MathError::InvalidNumericValue`].
pub fn median<T: Float>(data: &[T]) -> Result<T, MathError> {
    Validator::validate_sample(data)?;
    let mut scratch = data.to_vec();
    Ok(median_inplace(&mut scratch))
}

/// The unique most frequent value.
///
/// # Errors
///
/// * [`MathError::EmptyInput`] or [`MathError::InvalidNumericValue`].
/// * [`MathError::NoUniqueMode`] if two or more values share the highest count.
pub fn mode<T: Float>(data: &[T]) -> Result<T, MathError> {
    Validator::validate_sample(data)?;
    let modes = most_frequent(data);
    match modes.as_slice() {
        [only] => Ok(*only),
        _ => Validator::reject(MathError::NoUniqueMode {
            candidates: modes.len(),
        }),
    }
}

/// Every value sharing the highest count, in order of first appearance.
///
/// # Errors
///
/// [`MathError::EmptyInput`] or [`MathError::InvalidNumericValue`].
pub fn multimode<T: Float>(data: &[T]) -> Result<Vec<T>, MathError> {
    Validator::validate_sample(data)?;
    Ok(most_frequent(data))
}

// ============================================================================
// Spread
// ============================================================================

/// Sample variance (n − 1 denominator).
///
/// # Errors
///
/// * [`MathError::EmptyInput`] or [`MathError::InvalidNumericValue`].
/// * [`MathError::TooFewPoints`] for fewer than two values.
/// * [`MathError::NonFiniteResult`] if the variance exceeds the float range.
pub fn variance<T: Float>(data: &[T]) -> Result<T, MathError> {
    Validator::validate_sample(data)?;
    Validator::validate_min_points(data.len(), 2)?;
    let (var, _) = sample_spread(data, sample_mean(data));
    Validator::validate_result(var, "variance")?;
    Ok(var)
}

/// Sample standard deviation, the square root of [`variance`].
///
/// Computed directly, so it stays finite for samples whose variance
/// overflows.
///
/// # Errors
///
/// Same as [`variance`].
pub fn stdev<T: Float>(data: &[T]) -> Result<T, MathError> {
    Validator::validate_sample(data)?;
    Validator::validate_min_points(data.len(), 2)?;
    let (_, sd) = sample_spread(data, sample_mean(data));
    Validator::validate_result(sd, "stdev")?;
    Ok(sd)
}

// ============================================================================
// Unchecked Kernels
// ============================================================================

// Mean of a non-empty finite sample.
pub(crate) fn sample_mean<T: Float>(data: &[T]) -> T {
    let scale = binary_scale(data);
    let n = T::from(data.len()).unwrap_or(T::one());
    let scaled_sum = data.iter().fold(T::zero(), |acc, &v| acc + v / scale);
    scaled_sum / n * scale
}

// Variance and standard deviation around a precomputed mean of a sample
// with at least two values. Either may be infinite.
pub(crate) fn sample_spread<T: Float>(data: &[T], mean: T) -> (T, T) {
    let scale = binary_scale(data);
    let scaled_mean = mean / scale;
    let dof = T::from(data.len() - 1).unwrap_or(T::one());
    let ss = data.iter().fold(T::zero(), |acc, &v| {
        let d = v / scale - scaled_mean;
        acc + d * d
    });
    let unit_variance = ss / dof;

    (unit_variance * scale * scale, unit_variance.sqrt() * scale)
}

// Median of a non-empty slice, reordering it in place via quickselect.
pub(crate) fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n.is_multiple_of(2) {
        // After selection every value below `mid` is <= upper; the lower middle
        // value is the largest of them.
        let lower = vals[..mid].iter().fold(vals[0], |m, &v| m.max(v));
        let two = T::one() + T::one();
        // Midpoint without overflow: the sum is safe across signs, the
        // difference within one sign.
        if lower.is_sign_negative() != upper.is_sign_negative() {
            (lower + upper) / two
        } else {
            lower + (upper - lower) / two
        }
    } else {
        upper
    }
}

// Values with the highest count, in order of first appearance.
pub(crate) fn most_frequent<T: Float>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    // Distinct values sharing the longest run, ascending.
    let mut top: Vec<T> = Vec::new();
    let mut top_count = 0;
    for run in sorted.chunk_by(|a, b| a == b) {
        if run.len() > top_count {
            top_count = run.len();
            top.clear();
        }
        if run.len() == top_count {
            top.push(run[0]);
        }
    }

    let mut taken = vec![false; top.len()];
    let mut modes = Vec::with_capacity(top.len());
    for &v in data {
        if let Ok(i) = top.binary_search_by(|t| t.partial_cmp(&v).unwrap_or(Equal)) {
            if !taken[i] {
                taken[i] = true;
                modes.push(v);
            }
        }
    }
    modes
}
