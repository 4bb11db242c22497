//! High-level API for configurable numerical calculus.
//!
//! ## Purpose
//!
//! This module provides fluent builders for the two configurable operations
//! of the toolkit: central-difference differentiation and Riemann-sum
//! integration. It also re-exports the public types of the lower layers.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated once, when `.build()` is called.
//!   The built evaluators still check each evaluation point and result.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Derivative::new()` or `Integral::new()`.
//! 2. Chain configuration methods (`.step()`, `.subdivisions()`, `.rule()`).
//! 3. Call `.build()` to obtain a reusable evaluator.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::calculus::{DEFAULT_STEP, DEFAULT_SUBDIVISIONS, derivative_with_step, integral_with};

// Publicly re-exported types
pub use crate::evaluation::summary::Summary;
pub use crate::math::algebra::QuadraticRoots;
pub use crate::math::calculus::RiemannRule;
pub use crate::math::geometry::Circle;
pub use crate::primitives::errors::MathError;

// ============================================================================
// Differentiation
// ============================================================================

/// Fluent builder for a central-difference differentiator.
#[derive(Debug, Clone, Copy)]
pub struct DifferentiatorBuilder<T> {
    /// Finite-difference step h.
    pub step: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DifferentiatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DifferentiatorBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            step: None,
            duplicate_param: None,
        }
    }

    /// Set the finite-difference step (default 1e-5).
    pub fn step(mut self, step: T) -> Self {
        if self.step.is_some() {
            self.duplicate_param = Some("step");
        }
        self.step = Some(step);
        self
    }

    /// Validate the configuration and build the differentiator.
    pub fn build(self) -> Result<Differentiator<T>, MathError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let step = self
            .step
            .unwrap_or_else(|| T::from(DEFAULT_STEP).unwrap_or(T::epsilon().sqrt()));
        Validator::validate_step(step)?;
        Ok(Differentiator { step })
    }
}

/// A validated central-difference differentiator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differentiator<T> {
    step: T,
}

impl<T: Float> Differentiator<T> {
    /// The configured step.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Approximate f'(x).
    ///
    /// # Errors
    ///
    /// Same as [`derivative_with_step`], minus the step check.
    pub fn differentiate<F>(&self, f: F, x: T) -> Result<T, MathError>
    where
        F: Fn(T) -> T,
    {
        derivative_with_step(f, x, self.step)
    }
}

// ============================================================================
// Integration
// ============================================================================

/// Fluent builder for a Riemann-sum integrator.
#[derive(Debug, Clone, Copy)]
pub struct IntegratorBuilder {
    /// Number of equal subintervals.
    pub subdivisions: Option<usize>,

    /// Sample point within each subinterval.
    pub rule: Option<RiemannRule>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for IntegratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegratorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            subdivisions: None,
            rule: None,
            duplicate_param: None,
        }
    }

    /// Set the number of subdivisions (default 10 000).
    pub fn subdivisions(mut self, n: usize) -> Self {
        if self.subdivisions.is_some() {
            self.duplicate_param = Some("subdivisions");
        }
        self.subdivisions = Some(n);
        self
    }

    /// Set the Riemann rule (default [`RiemannRule::Left`]).
    pub fn rule(mut self, rule: RiemannRule) -> Self {
        if self.rule.is_some() {
            self.duplicate_param = Some("rule");
        }
        self.rule = Some(rule);
        self
    }

    /// Validate the configuration and build the integrator.
    pub fn build(self) -> Result<Integrator, MathError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let subdivisions = self.subdivisions.unwrap_or(DEFAULT_SUBDIVISIONS);
        Validator::validate_subdivisions(subdivisions)?;
        Ok(Integrator {
            subdivisions,
            rule: self.rule.unwrap_or_default(),
        })
    }
}

/// A validated Riemann-sum integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integrator {
    subdivisions: usize,
    rule: RiemannRule,
}

impl Integrator {
    /// The configured number of subdivisions.
    #[inline]
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// The configured rule.
    #[inline]
    pub fn rule(&self) -> RiemannRule {
        self.rule
    }

    /// Approximate the integral of `f` over [a, b].
    ///
    /// # Errors
    ///
    /// Same as [`integral_with`], minus the subdivision check.
    pub fn integrate<T, F>(&self, f: F, a: T, b: T) -> Result<T, MathError>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        integral_with(f, a, b, self.subdivisions, self.rule)
    }
}
