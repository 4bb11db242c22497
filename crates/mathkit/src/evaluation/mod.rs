//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns the statistics kernels into a reportable summary of a
//! sample.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Descriptive sample summary.
pub mod summary;
