//! Degree-based trigonometry and triangle-solving laws.
//!
//! ## Purpose
//!
//! This module converts between degrees and radians, evaluates sine, cosine
//! and tangent of angles given in degrees, and solves triangles with the laws
//! of cosines and sines.
//!
//! ## Design notes
//!
//! * **Degrees in, lengths out**: Every angle argument is in degrees; the
//!   plain conversions are the only functions that take radians.
//! * **Validated laws**: Side lengths must be finite and non-negative and
//!   angles finite. The laws report violations as errors.
//! * **Rescaling**: The law of cosines works on sides divided by a power of
//!   two, so sides near the float limits do not overflow.
//!
//! ## Key concepts
//!
//! * **Law of sines sentinel**: b = a·sin B / sin A is undefined when
//!   sin A = 0. Because sin(k·180°) is only zero up to rounding, |sin A| is
//!   compared against machine epsilon scaled by max(|A in radians|, 1).
//!   `Ok(None)` reports that case, which is distinct from an error.
//!
//! ## Non-goals
//!
//! * This module does not solve the ambiguous SSA case of the law of sines.

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::scaling::binary_scale;
use crate::primitives::errors::MathError;

// ============================================================================
// Conversions and Degree Functions
// ============================================================================

/// Convert degrees to radians.
#[inline]
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn to_degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg<T: Float>(degrees: T) -> T {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg<T: Float>(degrees: T) -> T {
    degrees.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg<T: Float>(degrees: T) -> T {
    degrees.to_radians().tan()
}

// ============================================================================
// Triangle Laws
// ============================================================================

/// Side opposite angle C, given sides `a`, `b` and the included angle C in degrees.
///
/// c = √(a² + b² − 2ab·cos C)
///
/// # Errors
///
/// * [`MathError::NegativeLength`] if a side is negative.
/// * [`MathError::InvalidNumericValue`] if a side or the angle is NaN or infinite.
/// * [`MathError::NonFiniteResult`] if the side exceeds the float range.
pub fn law_of_cosines<T: Float>(a: T, b: T, angle_c_deg: T) -> Result<T, MathError> {
    Validator::validate_length(a, "a")?;
    Validator::validate_length(b, "b")?;
    Validator::validate_scalar(angle_c_deg, "angle_c")?;

    let scale = binary_scale(&[a, b]);
    let (x, y) = (a / scale, b / scale);
    let two = T::one() + T::one();
    let c_squared = x * x + y * y - two * x * y * cos_deg(angle_c_deg);
    // (a − b)² ≤ c² for every C; clamp the rounding residue at C = 0.
    let c = c_squared.max(T::zero()).sqrt() * scale;
    Validator::validate_result(c, "law_of_cosines")?;
    Ok(c)
}

/// Side opposite angle B, given side `a` opposite angle A (angles in degrees).
///
/// b = a·sin B / sin A. Returns `Ok(None)` when sin A is zero (A a multiple
/// of 180°), where the ratio is undefined.
///
/// # Errors
///
/// * [`MathError::NegativeLength`] if `a` is negative.
/// * [`MathError::InvalidNumericValue`] if `a` or an angle is NaN or infinite.
/// * [`MathError::NonFiniteResult`] if the side exceeds the float range.
pub fn law_of_sines<T: Float>(
    a: T,
    angle_a_deg: T,
    angle_b_deg: T,
) -> Result<Option<T>, MathError> {
    Validator::validate_length(a, "a")?;
    Validator::validate_scalar(angle_a_deg, "angle_a")?;
    Validator::validate_scalar(angle_b_deg, "angle_b")?;

    let angle_a = angle_a_deg.to_radians();
    let sin_a = angle_a.sin();
    // The rounding error of sin(kπ) grows with |kπ|.
    if sin_a.abs() <= T::epsilon() * angle_a.abs().max(T::one()) {
        trace!("law of sines has no solution: sin(A) = 0");
        return Ok(None);
    }

    let b = a * sin_deg(angle_b_deg) / sin_a;
    Validator::validate_result(b, "law_of_sines")?;
    Ok(Some(b))
}
