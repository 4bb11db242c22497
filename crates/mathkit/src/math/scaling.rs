//! Power-of-two rescaling for overflow-safe floating-point kernels.
//!
//! Sums of values or squares near the float range limits overflow (or
//! underflow) even when the final answer is representable. Dividing every
//! input by a power of two close to the largest magnitude keeps intermediate
//! values near 1.
//!
//! ## Invariants
//!
//! * The scale is an exact power of two, so `v / s` and `r * s` introduce no
//!   rounding. Kernels that rescale produce bit-identical results to their
//!   unscaled form whenever the unscaled form does not over- or underflow.
//! * The scale is a normal, finite, positive number.

// External dependencies
use num_traits::Float;

// Power of two within a factor of four of the largest magnitude in `values`.
//
// Returns 1 for an all-zero (or empty) slice. Inputs must be finite.
pub(crate) fn binary_scale<T: Float>(values: &[T]) -> T {
    let max_abs = values.iter().fold(T::zero(), |m, &v| m.max(v.abs()));
    if max_abs == T::zero() || !max_abs.is_finite() {
        return T::one();
    }

    let two = T::one() + T::one();
    // One below floor(log2) so that log2(MAX) rounding up cannot overflow.
    let min_exponent = T::min_positive_value().log2().to_i32().unwrap_or(0);
    let exponent = (max_abs.log2().floor().to_i32().unwrap_or(0) - 1).max(min_exponent);

    if exponent >= 0 {
        two.powi(exponent)
    } else {
        (T::one() / two).powi(-exponent)
    }
}
