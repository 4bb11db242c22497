//! Numerical differentiation and integration.
//!
//! ## Purpose
//!
//! This module approximates derivatives with a central difference and
//! definite integrals with Riemann sums over a uniform partition.
//!
//! ## Design notes
//!
//! * **Defaults**: Step h = 1e-5 and n = 10 000 subdivisions, the values the
//!   convenience functions [`derivative`] and [`integral`] use.
//! * **Generic callables**: Any `Fn(T) -> T` is accepted, closures included.
//! * **Orientation**: Reversed bounds (b < a) give the negated integral.
//! * **Validated**: Every entry point checks that the evaluation point or
//!   bounds are finite and that the approximation itself is finite, so a
//!   NaN or overflowing integrand is reported rather than returned.
//!
//! ## Key concepts
//!
//! * **Central difference**: f'(x) ≈ (f(x + h) − f(x − h)) / 2h, error O(h²).
//! * **Riemann rules**: Left and right sums are O(1/n); midpoint and
//!   trapezoid are O(1/n²) for smooth integrands.
//!
//! ## Non-goals
//!
//! * This module does not adapt the step or partition to the integrand.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::MathError;

// ============================================================================
// Defaults
// ============================================================================

/// Default central-difference step.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Default number of Riemann-sum subdivisions.
pub const DEFAULT_SUBDIVISIONS: usize = 10_000;

// ============================================================================
// Riemann Rule
// ============================================================================

/// Sample point used inside each subinterval of a Riemann sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiemannRule {
    /// Left endpoint of each subinterval.
    #[default]
    Left,

    /// Right endpoint of each subinterval.
    Right,

    /// Midpoint of each subinterval.
    Midpoint,

    /// Average of both endpoints (trapezoidal rule).
    Trapezoid,
}

impl RiemannRule {
    /// Get the name of the rule.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            RiemannRule::Left => "Left",
            RiemannRule::Right => "Right",
            RiemannRule::Midpoint => "Midpoint",
            RiemannRule::Trapezoid => "Trapezoid",
        }
    }

    /// Sum `f` over `n` equal subintervals of [a, b].
    fn sum<T, F>(&self, f: F, a: T, b: T, n: usize) -> T
    where
        T: Float,
        F: Fn(T) -> T,
    {
        let n_t = T::from(n).unwrap_or(T::one());
        let dx = (b - a) / n_t;
        let half = T::from(0.5).unwrap_or(T::one() / (T::one() + T::one()));
        let node = |i: usize| a + T::from(i).unwrap_or(T::zero()) * dx;

        let total = match self {
            Self::Left => (0..n).fold(T::zero(), |acc, i| acc + f(node(i))),
            Self::Right => (1..=n).fold(T::zero(), |acc, i| acc + f(node(i))),
            Self::Midpoint => (0..n).fold(T::zero(), |acc, i| acc + f(node(i) + half * dx)),
            Self::Trapezoid => {
                let interior = (1..n).fold(T::zero(), |acc, i| acc + f(node(i)));
                interior + half * (f(a) + f(b))
            }
        };

        total * dx
    }
}

// ============================================================================
// Differentiation
// ============================================================================

/// Central-difference derivative of `f` at `x` with the default step.
///
/// # Errors
///
/// * [`MathError::InvalidNumericValue`] if `x` is NaN or infinite.
/// * [`MathError::NonFiniteResult`] if `f` is not finite near `x`.
pub fn derivative<T, F>(f: F, x: T) -> Result<T, MathError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = T::from(DEFAULT_STEP).unwrap_or(T::epsilon().sqrt());
    derivative_with_step(f, x, h)
}

/// Central-difference derivative of `f` at `x` with step `h`.
///
/// # Errors
///
/// * [`MathError::InvalidStep`] if `h` is not positive and finite.
/// * [`MathError::InvalidNumericValue`] if `x` is NaN or infinite.
/// * [`MathError::NonFiniteResult`] if `f` is not finite near `x`.
pub fn derivative_with_step<T, F>(f: F, x: T, h: T) -> Result<T, MathError>
where
    T: Float,
    F: Fn(T) -> T,
{
    Validator::validate_step(h)?;
    Validator::validate_scalar(x, "x")?;
    let slope = (f(x + h) - f(x - h)) / (h + h);
    Validator::validate_result(slope, "derivative")?;
    Ok(slope)
}

// ============================================================================
// Integration
// ============================================================================

/// Left Riemann sum of `f` over [a, b] with the default subdivisions.
///
/// # Errors
///
/// * [`MathError::InvalidNumericValue`] if a bound is NaN or infinite.
/// * [`MathError::NonFiniteResult`] if `f` is not finite on [a, b].
pub fn integral<T, F>(f: F, a: T, b: T) -> Result<T, MathError>
where
    T: Float,
    F: Fn(T) -> T,
{
    integral_with(f, a, b, DEFAULT_SUBDIVISIONS, RiemannRule::Left)
}

/// Riemann sum of `f` over [a, b] with `n` subdivisions and the given rule.
///
/// # Errors
///
/// * [`MathError::InvalidSubdivisions`] if `n` is zero.
/// * [`MathError::InvalidNumericValue`] if a bound is NaN or infinite.
/// * [`MathError::NonFiniteResult`] if `f` is not finite on [a, b].
pub fn integral_with<T, F>(f: F, a: T, b: T, n: usize, rule: RiemannRule) -> Result<T, MathError>
where
    T: Float,
    F: Fn(T) -> T,
{
    Validator::validate_subdivisions(n)?;
    Validator::validate_scalar(a, "a")?;
    Validator::validate_scalar(b, "b")?;
    let area = rule.sum(f, a, b, n);
    Validator::validate_result(area, "integral")?;
    Ok(area)
}
