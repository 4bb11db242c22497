//! Tests for numerical differentiation and integration.
//!
//! ## Test Organization
//!
//! 1. **Differentiation** - Default and explicit steps
//! 2. **Integration** - Default left sum and each Riemann rule
//! 3. **Configuration Errors** - Invalid steps and subdivisions
//! 4. **Domain Errors** - Non-finite points, bounds and integrands

use approx::assert_relative_eq;
use core::f64::consts::PI;

use mathkit::prelude::*;

// ============================================================================
// Differentiation
// ============================================================================

/// Test the derivative of x^2 at 3.
#[test]
fn test_derivative_square() {
    assert_relative_eq!(derivative(|x: f64| x * x, 3.0).unwrap(), 6.0, epsilon = 1e-5);
}

/// Test derivatives of transcendental functions.
#[test]
fn test_derivative_transcendental() {
    assert_relative_eq!(derivative(f64::sin, 0.0).unwrap(), 1.0, epsilon = 1e-8);
    assert_relative_eq!(derivative(f64::exp, 1.0).unwrap(), 1.0_f64.exp(), epsilon = 1e-8);
    assert_relative_eq!(derivative(f64::cos, PI / 2.0).unwrap(), -1.0, epsilon = 1e-8);
}

/// Test that a closure capturing state is accepted.
#[test]
fn test_derivative_capturing_closure() {
    let k = 4.0_f64;
    assert_relative_eq!(derivative(|x: f64| k * x, 10.0).unwrap(), 4.0, epsilon = 1e-8);
}

/// Test an explicit step.
#[test]
fn test_derivative_with_step() {
    let d = derivative_with_step(|x: f64| x * x * x, 2.0, 1e-4).unwrap();
    assert_relative_eq!(d, 12.0, epsilon = 1e-6);
}

/// Test that the central difference is exact for quadratics up to rounding.
#[test]
fn test_derivative_with_large_step_quadratic() {
    let d = derivative_with_step(|x: f64| x * x, 3.0, 0.5).unwrap();
    assert_relative_eq!(d, 6.0, epsilon = 1e-12);
}

// ============================================================================
// Integration
// ============================================================================

/// Test the default left sum of x over [0, 1].
#[test]
fn test_integral_identity() {
    assert_relative_eq!(integral(|x: f64| x, 0.0, 1.0).unwrap(), 0.5, epsilon = 1e-4);
}

/// Test the default left sum of sin over [0, pi].
#[test]
fn test_integral_sine() {
    assert_relative_eq!(integral(f64::sin, 0.0, PI).unwrap(), 2.0, epsilon = 1e-4);
}

/// Test that reversed bounds negate the integral.
#[test]
fn test_integral_reversed_bounds() {
    let forward = integral(|x: f64| x * x, 0.0, 2.0).unwrap();
    let backward = integral(|x: f64| x * x, 2.0, 0.0).unwrap();

    assert_relative_eq!(forward, 8.0 / 3.0, epsilon = 1e-3);
    assert_relative_eq!(backward, -8.0 / 3.0, epsilon = 1e-3);
}

/// Test that an empty interval integrates to zero.
#[test]
fn test_integral_empty_interval() {
    assert_eq!(integral(|x: f64| x * x, 1.0, 1.0), Ok(0.0));
}

/// Test each rule on a linear integrand with a single subdivision.
#[test]
fn test_integral_with_rules_single_piece() {
    let f = |x: f64| x;

    assert_eq!(integral_with(f, 0.0, 2.0, 1, Left), Ok(0.0));
    assert_eq!(integral_with(f, 0.0, 2.0, 1, Right), Ok(4.0));
    assert_eq!(integral_with(f, 0.0, 2.0, 1, Midpoint), Ok(2.0));
    assert_eq!(integral_with(f, 0.0, 2.0, 1, Trapezoid), Ok(2.0));
}

/// Test that midpoint and trapezoid rules converge faster than endpoint rules.
#[test]
fn test_integral_with_rule_accuracy() {
    let f = |x: f64| x.exp();
    let exact = 1.0_f64.exp() - 1.0;
    let error = |rule: RiemannRule| (integral_with(f, 0.0, 1.0, 100, rule).unwrap() - exact).abs();

    assert!(error(Midpoint) < error(Left));
    assert!(error(Trapezoid) < error(Right));
    assert!(error(Midpoint) < 1e-5);
    assert!(error(Trapezoid) < 1e-4);
}

/// Test the rule names and default.
#[test]
fn test_riemann_rule_metadata() {
    assert_eq!(RiemannRule::default(), Left);
    assert_eq!(Left.name(), "Left");
    assert_eq!(Right.name(), "Right");
    assert_eq!(Midpoint.name(), "Midpoint");
    assert_eq!(Trapezoid.name(), "Trapezoid");
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Test that non-positive or non-finite steps are rejected.
#[test]
fn test_derivative_invalid_step() {
    let f = |x: f64| x;

    assert_eq!(
        derivative_with_step(f, 1.0, 0.0),
        Err(MathError::InvalidStep(0.0))
    );
    assert_eq!(
        derivative_with_step(f, 1.0, -1e-3),
        Err(MathError::InvalidStep(-1e-3))
    );
    assert!(derivative_with_step(f, 1.0, f64::NAN).is_err());
}

/// Test that zero subdivisions and non-finite bounds are rejected.
#[test]
fn test_integral_with_invalid_config() {
    let f = |x: f64| x;

    assert_eq!(
        integral_with(f, 0.0, 1.0, 0, Left),
        Err(MathError::InvalidSubdivisions(0))
    );
    assert!(matches!(
        integral_with(f, 0.0, f64::INFINITY, 10, Left),
        Err(MathError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Domain Errors
// ============================================================================

/// Test that a non-finite evaluation point is rejected by both entry points.
#[test]
fn test_derivative_non_finite_point() {
    let f = |x: f64| x * x;

    assert_eq!(
        derivative(f, f64::NAN),
        Err(MathError::InvalidNumericValue("x=NaN".into()))
    );
    assert_eq!(
        derivative_with_step(f, f64::INFINITY, 1e-3),
        Err(MathError::InvalidNumericValue("x=inf".into()))
    );
}

/// Test that the default integral rejects infinite bounds like `integral_with`.
#[test]
fn test_integral_non_finite_bounds() {
    let f = |x: f64| x;

    assert_eq!(
        integral(f, 0.0, f64::INFINITY),
        Err(MathError::InvalidNumericValue("b=inf".into()))
    );
    assert_eq!(
        integral(f, f64::NAN, 1.0),
        Err(MathError::InvalidNumericValue("a=NaN".into()))
    );
}

/// Test that a NaN or overflowing integrand is reported, not returned.
#[test]
fn test_non_finite_integrand() {
    let nan = MathError::NonFiniteResult {
        operation: "integral",
    };

    // The left sum evaluates 1/x at x = 0.
    assert_eq!(integral(|x: f64| 1.0 / x, 0.0, 1.0), Err(nan.clone()));
    assert_eq!(
        integral_with(|x: f64| (-x).sqrt(), 1.0, 2.0, 10, Midpoint),
        Err(nan)
    );
    assert_eq!(
        derivative(|x: f64| x.ln(), -1.0),
        Err(MathError::NonFiniteResult {
            operation: "derivative"
        })
    );
}
