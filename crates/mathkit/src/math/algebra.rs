//! Linear and quadratic equations.
//!
//! ## Purpose
//!
//! This module solves a·x + b = 0 and a·x² + b·x + c = 0 over the reals.
//!
//! ## Design notes
//!
//! * **Sentinels**: An equation with no real root is a legitimate answer and
//!   is returned as `None` / [`QuadraticRoots::None`], not as an error.
//! * **Stability**: Distinct quadratic roots use q = -(b + sign(b)·√D) / 2 so
//!   neither root suffers cancellation when b² ≫ 4ac.
//!
//! ## Invariants
//!
//! * Distinct roots are reported in ascending order.
//!
//! ## Non-goals
//!
//! * This module does not return complex roots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::MathError;

// ============================================================================
// Quadratic Roots
// ============================================================================

/// Real roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots<T> {
    /// Negative discriminant: no real roots.
    None,

    /// Zero discriminant: one root of multiplicity two.
    Double(T),

    /// Positive discriminant: two distinct roots, smaller first.
    Distinct(T, T),
}

impl<T: Float> QuadraticRoots<T> {
    /// Each distinct real root once, in ascending order.
    pub fn roots(&self) -> Vec<T> {
        match *self {
            Self::None => Vec::new(),
            Self::Double(r) => vec![r],
            Self::Distinct(lo, hi) => vec![lo, hi],
        }
    }

    /// Number of distinct real roots.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Double(_) => 1,
            Self::Distinct(..) => 2,
        }
    }

    /// Whether the equation has no real roots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether some root lies within `tolerance` of `value`.
    pub fn contains(&self, value: T, tolerance: T) -> bool {
        self.roots()
            .iter()
            .any(|&r| (r - value).abs() <= tolerance)
    }
}

// ============================================================================
// Linear Equations
// ============================================================================

/// Root of a·x + b = 0, or `None` when a = 0.
pub fn solve_linear<T: Float>(a: T, b: T) -> Option<T> {
    if a == T::zero() {
        trace!("linear equation has no unique solution: a = 0");
        return None;
    }
    Some(-b / a)
}

// ============================================================================
// Quadratic Equations
// ============================================================================

/// Discriminant b² - 4ac.
#[inline]
pub fn discriminant<T: Float>(a: T, b: T, c: T) -> T {
    let four = T::from(4.0).unwrap_or(T::one() + T::one() + T::one() + T::one());
    b * b - four * a * c
}

/// Real roots of a·x² + b·x + c = 0.
///
/// # Errors
///
/// * [`MathError::InvalidNumericValue`] if a coefficient is NaN or infinite.
/// * [`MathError::ZeroArgument`] if `a` is zero (the equation is not quadratic).
pub fn solve_quadratic<T: Float>(a: T, b: T, c: T) -> Result<QuadraticRoots<T>, MathError> {
    Validator::validate_scalar(a, "a")?;
    Validator::validate_scalar(b, "b")?;
    Validator::validate_scalar(c, "c")?;
    if a == T::zero() {
        return Validator::reject(MathError::ZeroArgument { parameter: "a" });
    }

    let two = T::one() + T::one();
    let d = discriminant(a, b, c);

    if d < T::zero() {
        trace!("quadratic has no real roots: negative discriminant");
        return Ok(QuadraticRoots::None);
    }
    if d == T::zero() {
        return Ok(QuadraticRoots::Double(-b / (two * a)));
    }

    // q is non-zero here: √D > 0 and is added with the sign of b.
    let sqrt_d = d.sqrt();
    let q = if b >= T::zero() {
        -(b + sqrt_d) / two
    } else {
        (sqrt_d - b) / two
    };
    let r1 = q / a;
    let r2 = c / q;

    Ok(QuadraticRoots::Distinct(r1.min(r2), r1.max(r2)))
}
