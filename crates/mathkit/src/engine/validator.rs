//! Input validation for toolkit arguments.
//!
//! ## Purpose
//!
//! This module provides the domain checks shared by every toolkit function:
//! sample emptiness and size, finiteness, sign constraints on integers and
//! lengths, and calculus configuration bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Float checks are generic over `Float` types.
//! * **Traceable**: Every rejection is recorded at `debug` level through the
//!   `log` facade before it is returned.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and has no effect besides logging.
//!
//! ## Non-goals
//!
//! * This module does not transform, clamp or coerce inputs.
//! * This module does not compute any results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MathError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for toolkit arguments.
///
/// Provides static methods that return `Result<(), MathError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Log a domain violation and return it as an error.
    #[inline]
    pub fn reject<R>(err: MathError) -> Result<R, MathError> {
        debug!("rejected input: {err}");
        Err(err)
    }

    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate a statistics sample: non-empty and all values finite.
    pub fn validate_sample<T: Float>(data: &[T]) -> Result<(), MathError> {
        // Check 1: Non-empty
        if data.is_empty() {
            return Self::reject(MathError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Self::reject(MathError::InvalidNumericValue(format!(
                    "data[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that a sample holds at least `min` values.
    pub fn validate_min_points(got: usize, min: usize) -> Result<(), MathError> {
        if got < min {
            return Self::reject(MathError::TooFewPoints { got, min });
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), MathError> {
        if !val.is_finite() {
            return Self::reject(MathError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that a computed value is finite.
    pub fn validate_result<T: Float>(value: T, operation: &'static str) -> Result<(), MathError> {
        if !value.is_finite() {
            return Self::reject(MathError::NonFiniteResult { operation });
        }
        Ok(())
    }

    // ========================================================================
    // Integer Arguments
    // ========================================================================

    /// Validate that an integer argument is non-negative.
    pub fn validate_non_negative(value: i64, parameter: &'static str) -> Result<(), MathError> {
        if value < 0 {
            return Self::reject(MathError::NegativeArgument { parameter, value });
        }
        Ok(())
    }

    /// Validate that an integer argument is non-zero.
    pub fn validate_non_zero(value: i64, parameter: &'static str) -> Result<(), MathError> {
        if value == 0 {
            return Self::reject(MathError::ZeroArgument { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Geometry Arguments
    // ========================================================================

    /// Validate a length: finite and non-negative.
    pub fn validate_length<T: Float>(value: T, parameter: &'static str) -> Result<(), MathError> {
        Self::validate_scalar(value, parameter)?;
        if value < T::zero() {
            return Self::reject(MathError::NegativeLength {
                parameter,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that two vectors have the same number of components.
    pub fn validate_dimensions(left: usize, right: usize) -> Result<(), MathError> {
        if left != right {
            return Self::reject(MathError::MismatchedDimensions { left, right });
        }
        Ok(())
    }

    /// Validate a circle radius: finite and non-negative.
    pub fn validate_radius<T: Float>(radius: T) -> Result<(), MathError> {
        if !radius.is_finite() || radius < T::zero() {
            return Self::reject(MathError::InvalidRadius(
                radius.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Calculus Configuration
    // ========================================================================

    /// Validate the finite-difference step.
    pub fn validate_step<T: Float>(step: T) -> Result<(), MathError> {
        if !step.is_finite() || step <= T::zero() {
            return Self::reject(MathError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the number of Riemann-sum subdivisions.
    pub fn validate_subdivisions(n: usize) -> Result<(), MathError> {
        if n == 0 {
            return Self::reject(MathError::InvalidSubdivisions(n));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), MathError> {
        if let Some(parameter) = duplicate_param {
            return Self::reject(MathError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
