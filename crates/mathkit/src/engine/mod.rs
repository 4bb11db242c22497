//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer holds the validation rules every toolkit function runs before
//! computing. Keeping them in one place gives all topics the same failure
//! vocabulary and the same logging.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;
