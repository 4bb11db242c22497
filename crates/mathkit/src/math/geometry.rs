//! Plane geometry: triangles, distances, angles and circles.
//!
//! ## Purpose
//!
//! This module provides triangle area from side lengths (Heron's formula),
//! Euclidean distance, the angle between two vectors, the unknown side of a
//! right triangle, and a small circle value type.
//!
//! ## Design notes
//!
//! * **Validated**: Lengths must be finite and non-negative; impossible
//!   triangles and zero-length vectors are reported as errors.
//! * **Rounding**: Degenerate triangles and (anti)parallel vectors can land a
//!   hair outside the valid range after rounding; such values are pulled back
//!   onto the boundary before `sqrt`/`acos`.
//!
//! ## Non-goals
//!
//! * This module does not handle three-dimensional solids.

// External dependencies
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::scaling::binary_scale;
use crate::primitives::errors::MathError;

// ============================================================================
// Triangles
// ============================================================================

/// Area of a triangle with sides `a`, `b`, `c` (Heron's formula).
///
/// Degenerate triangles (one side equal to the sum of the other two) have
/// area zero.
///
/// # Errors
///
/// * [`MathError::NegativeLength`] if a side is negative.
/// * [`MathError::TriangleInequality`] if the sides cannot close a triangle.
/// * [`MathError::NonFiniteResult`] if the area exceeds the float range.
pub fn heron_area<T: Float>(a: T, b: T, c: T) -> Result<T, MathError> {
    Validator::validate_length(a, "a")?;
    Validator::validate_length(b, "b")?;
    Validator::validate_length(c, "c")?;

    // Rescaled sides keep the sums and the product in range.
    let scale = binary_scale(&[a, b, c]);
    let (x, y, z) = (a / scale, b / scale, c / scale);

    let longest = x.max(y).max(z);
    if longest + longest > x + y + z {
        return Validator::reject(MathError::TriangleInequality {
            a: a.to_f64().unwrap_or(f64::NAN),
            b: b.to_f64().unwrap_or(f64::NAN),
            c: c.to_f64().unwrap_or(f64::NAN),
        });
    }

    let s = (x + y + z) / (T::one() + T::one());
    let radicand = s * (s - x) * (s - y) * (s - z);
    let area = radicand.max(T::zero()).sqrt() * scale * scale;
    Validator::validate_result(area, "heron_area")?;
    Ok(area)
}

/// The unknown side of a right triangle with legs `a`, `b` and hypotenuse `c`.
///
/// Exactly one of the three must be `None`.
///
/// # Errors
///
/// * [`MathError::MissingSides`] unless exactly one side is `None`.
/// * [`MathError::NegativeLength`] if a known side is negative.
/// * [`MathError::HypotenuseTooShort`] if a leg is requested and `c` does not
///   exceed the known leg.
/// * [`MathError::NonFiniteResult`] if the hypotenuse exceeds the float range.
pub fn missing_right_triangle_side<T: Float>(
    a: Option<T>,
    b: Option<T>,
    c: Option<T>,
) -> Result<T, MathError> {
    match (a, b, c) {
        (Some(a), Some(b), None) => {
            Validator::validate_length(a, "a")?;
            Validator::validate_length(b, "b")?;
            let hypotenuse = a.hypot(b);
            Validator::validate_result(hypotenuse, "hypotenuse")?;
            Ok(hypotenuse)
        }
        (None, Some(b), Some(c)) => missing_leg(c, b, "b"),
        (Some(a), None, Some(c)) => missing_leg(c, a, "a"),
        _ => {
            let missing = [a, b, c].iter().filter(|side| side.is_none()).count();
            Validator::reject(MathError::MissingSides { missing })
        }
    }
}

fn missing_leg<T: Float>(hypotenuse: T, leg: T, leg_name: &'static str) -> Result<T, MathError> {
    Validator::validate_length(hypotenuse, "c")?;
    Validator::validate_length(leg, leg_name)?;
    if hypotenuse <= leg {
        return Validator::reject(MathError::HypotenuseTooShort {
            hypotenuse: hypotenuse.to_f64().unwrap_or(f64::NAN),
            leg: leg.to_f64().unwrap_or(f64::NAN),
        });
    }
    let scale = binary_scale(&[hypotenuse, leg]);
    let (hypotenuse, leg) = (hypotenuse / scale, leg / scale);
    Ok(((hypotenuse - leg) * (hypotenuse + leg)).sqrt() * scale)
}

// ============================================================================
// Distances and Angles
// ============================================================================

/// Euclidean distance between (x1, y1) and (x2, y2).
#[inline]
pub fn distance_2d<T: Float>(x1: T, y1: T, x2: T, y2: T) -> T {
    (x2 - x1).hypot(y2 - y1)
}

/// Angle in radians between two vectors, in [0, π].
///
/// Each vector is rescaled by a power of two near its largest component, so
/// very large or very small finite components neither overflow nor vanish.
///
/// # Errors
///
/// * [`MathError::MismatchedDimensions`] if the vectors differ in length.
/// * [`MathError::InvalidNumericValue`] if a component is NaN or infinite.
/// * [`MathError::ZeroMagnitude`] if either vector has zero length.
pub fn angle_between_vectors<T: Float>(v1: &[T], v2: &[T]) -> Result<T, MathError> {
    Validator::validate_dimensions(v1.len(), v2.len())?;
    for (&p, &q) in v1.iter().zip(v2.iter()) {
        Validator::validate_scalar(p, "v1")?;
        Validator::validate_scalar(q, "v2")?;
    }

    let scale1 = binary_scale(v1);
    let scale2 = binary_scale(v2);

    let mut dot = T::zero();
    let mut norm1 = T::zero();
    let mut norm2 = T::zero();
    for (&p, &q) in v1.iter().zip(v2.iter()) {
        let (p, q) = (p / scale1, q / scale2);
        dot = dot + p * q;
        norm1 = norm1 + p * p;
        norm2 = norm2 + q * q;
    }

    if norm1 == T::zero() || norm2 == T::zero() {
        return Validator::reject(MathError::ZeroMagnitude);
    }

    // Finite inputs give a finite cosine; clamp only the rounding residue.
    let cosine = dot / (norm1.sqrt() * norm2.sqrt());
    Ok(cosine.max(-T::one()).min(T::one()).acos())
}

// ============================================================================
// Circle
// ============================================================================

/// A circle described by its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T> {
    radius: T,
}

impl<T: Float + FloatConst> Circle<T> {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// [`MathError::InvalidRadius`] if `radius` is negative or not finite.
    pub fn new(radius: T) -> Result<Self, MathError> {
        Validator::validate_radius(radius)?;
        Ok(Self { radius })
    }

    /// The radius.
    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Replace the radius. An invalid radius leaves the circle unchanged.
    pub fn set_radius(&mut self, radius: T) -> Result<(), MathError> {
        Validator::validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// The diameter, 2r.
    #[inline]
    pub fn diameter(&self) -> T {
        self.radius + self.radius
    }

    /// The area, πr².
    #[inline]
    pub fn area(&self) -> T {
        T::PI() * self.radius * self.radius
    }

    /// The circumference, 2πr.
    #[inline]
    pub fn circumference(&self) -> T {
        T::TAU() * self.radius
    }
}
