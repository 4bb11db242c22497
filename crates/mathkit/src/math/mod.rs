//! Layer 3: Math
//!
//! # Purpose
//!
//! This layer provides the toolkit's pure mathematical functions, one module
//! per topic. Every function is stateless and independent of the others.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Math ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear and quadratic equations.
pub mod algebra;

/// Numerical differentiation and integration.
pub mod calculus;

/// Triangles, distances, angles and circles.
pub mod geometry;

/// Primes, factorisation, factorials and integer sequences.
pub mod number_theory;

/// Power-of-two rescaling shared by the floating-point kernels.
pub mod scaling;

/// Descriptive statistics.
pub mod statistics;

/// Degree-based trigonometry.
pub mod trigonometry;
