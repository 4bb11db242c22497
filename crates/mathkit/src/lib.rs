//! # mathkit: Pure Mathematical Utilities for Rust
//!
//! A collection of standalone, stateless mathematical functions: algebra,
//! geometry, trigonometry, calculus approximations, number theory and
//! descriptive statistics. Every function is pure and may be called from any
//! number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathkit::prelude::*;
//!
//! // Algebra
//! assert_eq!(solve_linear(2.0, -4.0), Some(2.0));
//! let roots = solve_quadratic(1.0, -3.0, 2.0)?;
//! assert_eq!(roots.roots(), vec![1.0, 2.0]);
//!
//! // Geometry
//! assert!((heron_area(3.0, 4.0, 5.0)? - 6.0_f64).abs() < 1e-12);
//! assert!((missing_right_triangle_side(Some(3.0), Some(4.0), None)? - 5.0_f64).abs() < 1e-12);
//!
//! // Number theory
//! assert_eq!(factor_integer(28)?, vec![2, 2, 7]);
//! assert_eq!(factorial(5)?, 120);
//!
//! // Statistics
//! assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0])?, 3.0);
//! # Result::<(), MathError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Functions with a restricted domain return `Result<_, MathError>`:
//!
//! - **`Ok(value)`**: The input was valid and the result was computed.
//! - **`Err(MathError)`**: The input lies outside the function's domain (a
//!   negative factorial argument, an empty sample, an impossible triangle).
//!
//! "No real answer" is a different outcome and is never an error. It is
//! returned as a value the caller can inspect:
//!
//! ```rust
//! use mathkit::prelude::*;
//!
//! // 0·x + 1 = 0 has no solution.
//! assert_eq!(solve_linear(0.0, 1.0), None);
//!
//! // x² + 1 = 0 has no real roots.
//! assert!(solve_quadratic(1.0, 0.0, 1.0)?.is_empty());
//!
//! // sin(0°) = 0, so the law of sines is undefined.
//! assert_eq!(law_of_sines(1.0, 0.0, 30.0)?, None);
//!
//! // A NaN side is a domain violation, not "no answer".
//! assert!(law_of_sines(f64::NAN, 30.0, 60.0).is_err());
//! # Result::<(), MathError>::Ok(())
//! ```
//!
//! ## Configurable Calculus
//!
//! ```rust
//! use mathkit::prelude::*;
//!
//! let integrator = Integral::new()
//!     .subdivisions(1_000)   // Partition [a, b] into 1000 pieces
//!     .rule(Midpoint)        // Sample each piece at its midpoint
//!     .build()?;
//!
//! let area = integrator.integrate(|x: f64| x * x, 0.0, 3.0)?;
//! assert!((area - 9.0).abs() < 1e-4);
//!
//! let slope = Derivative::new().step(1e-6).build()?.differentiate(f64::sin, 0.0)?;
//! assert!((slope - 1.0).abs() < 1e-9);
//! # Result::<(), MathError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Rejected inputs are recorded at `debug` level and "no solution" outcomes
//! at `trace` level through the [`log`](https://docs.rs/log) facade. Install
//! any `log` backend to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency; the
//! crate then needs only `alloc`, and float functions come from `libm`:
//!
//! ```toml
//! [dependencies]
//! mathkit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Engine - input validation.
mod engine;

// Layer 3: Math - pure mathematical functions.
mod math;

// Layer 4: Evaluation - sample summaries.
mod evaluation;

// High-level fluent API for configurable calculus.
mod api;

// Topic modules, for callers who prefer qualified paths.
pub use crate::math::{algebra, calculus, geometry, number_theory, statistics, trigonometry};

pub use crate::api::{
    Circle, Differentiator, DifferentiatorBuilder, Integrator, IntegratorBuilder, MathError,
    QuadraticRoots, RiemannRule, Summary,
};

// Standard mathkit prelude.
pub mod prelude {
    pub use crate::api::{
        Circle, Differentiator, DifferentiatorBuilder as Derivative, Integrator,
        IntegratorBuilder as Integral, MathError, QuadraticRoots,
        RiemannRule::{self, Left, Midpoint, Right, Trapezoid},
        Summary,
    };
    pub use crate::math::algebra::{discriminant, solve_linear, solve_quadratic};
    pub use crate::math::calculus::{derivative, derivative_with_step, integral, integral_with};
    pub use crate::math::geometry::{
        angle_between_vectors, distance_2d, heron_area, missing_right_triangle_side,
    };
    pub use crate::math::number_theory::{
        factor_integer, factorial, is_armstrong, is_perfect_square, is_prime, nth_fibonacci,
    };
    pub use crate::math::statistics::{mean, median, mode, multimode, stdev, variance};
    pub use crate::math::trigonometry::{
        cos_deg, law_of_cosines, law_of_sines, sin_deg, tan_deg, to_degrees, to_radians,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
