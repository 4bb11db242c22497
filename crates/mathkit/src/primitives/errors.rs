//! Error types for toolkit operations.
//!
//! ## Purpose
//!
//! This module defines the domain violations a toolkit function can report:
//! inputs outside the mathematical range a function is defined for, samples
//! that are too small, and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., the sides of an
//!   impossible triangle, the negative factorial argument).
//! * **Disjoint from sentinels**: "No real solution" outcomes such as a zero
//!   linear coefficient are returned as `None`, never as a `MathError`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//!
//! ## Invariants
//!
//! * Every variant names the parameter or quantity at fault.
//! * Numeric context is reported as `f64` regardless of the caller's float type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for toolkit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// The input sample is empty.
    EmptyInput,

    /// The sample has fewer values than the statistic requires.
    TooFewPoints {
        /// Number of values provided.
        got: usize,
        /// Minimum required values.
        min: usize,
    },

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// An integer argument that must be non-negative was negative.
    NegativeArgument {
        /// Name of the argument.
        parameter: &'static str,
        /// The value provided.
        value: i64,
    },

    /// An argument that must be non-zero was zero.
    ZeroArgument {
        /// Name of the argument.
        parameter: &'static str,
    },

    /// The exact result does not fit in the return type.
    Overflow {
        /// Name of the operation.
        operation: &'static str,
        /// The argument that produced the overflow.
        argument: u64,
    },

    /// The result of a floating-point operation is NaN or overflows.
    NonFiniteResult {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Two or more values share the highest frequency.
    NoUniqueMode {
        /// Number of values tied for the highest frequency.
        candidates: usize,
    },

    /// A length (triangle side) was negative.
    NegativeLength {
        /// Name of the side.
        parameter: &'static str,
        /// The value provided.
        value: f64,
    },

    /// The three sides violate the triangle inequality.
    TriangleInequality {
        /// First side.
        a: f64,
        /// Second side.
        b: f64,
        /// Third side.
        c: f64,
    },

    /// A vector has zero magnitude, so no angle is defined.
    ZeroMagnitude,

    /// Two vectors have a different number of components.
    MismatchedDimensions {
        /// Components in the first vector.
        left: usize,
        /// Components in the second vector.
        right: usize,
    },

    /// Exactly one right-triangle side must be unknown.
    MissingSides {
        /// Number of sides that were unknown.
        missing: usize,
    },

    /// The hypotenuse must be strictly longer than the known leg.
    HypotenuseTooShort {
        /// The hypotenuse provided.
        hypotenuse: f64,
        /// The known leg.
        leg: f64,
    },

    /// Circle radius must be non-negative and finite.
    InvalidRadius(f64),

    /// Finite-difference step must be positive and finite.
    InvalidStep(f64),

    /// Riemann sums need at least one subdivision.
    InvalidSubdivisions(usize),

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sample is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NegativeArgument { parameter, value } => {
                write!(f, "Invalid {parameter}: {value} (must be >= 0)")
            }
            Self::ZeroArgument { parameter } => {
                write!(f, "Invalid {parameter}: 0 (must be non-zero)")
            }
            Self::Overflow {
                operation,
                argument,
            } => {
                write!(f, "Overflow: {operation}({argument}) does not fit in u128")
            }
            Self::NonFiniteResult { operation } => {
                write!(f, "Non-finite result: {operation} is NaN or out of range")
            }
            Self::NoUniqueMode { candidates } => {
                write!(
                    f,
                    "No unique mode: {candidates} values share the highest frequency"
                )
            }
            Self::NegativeLength { parameter, value } => {
                write!(f, "Invalid side {parameter}: {value} (must be >= 0)")
            }
            Self::TriangleInequality { a, b, c } => {
                write!(
                    f,
                    "Sides {a}, {b}, {c} violate the triangle inequality"
                )
            }
            Self::ZeroMagnitude => write!(f, "Vector has zero magnitude"),
            Self::MismatchedDimensions { left, right } => {
                write!(
                    f,
                    "Dimension mismatch: first vector has {left} components, second has {right}"
                )
            }
            Self::MissingSides { missing } => {
                write!(
                    f,
                    "Exactly one side must be missing, got {missing} missing sides"
                )
            }
            Self::HypotenuseTooShort { hypotenuse, leg } => {
                write!(
                    f,
                    "Hypotenuse {hypotenuse} must be greater than the known leg {leg}"
                )
            }
            Self::InvalidRadius(r) => write!(f, "Invalid radius: {r} (must be >= 0 and finite)"),
            Self::InvalidStep(h) => write!(f, "Invalid step: {h} (must be > 0 and finite)"),
            Self::InvalidSubdivisions(n) => {
                write!(f, "Invalid subdivisions: {n} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MathError {}
