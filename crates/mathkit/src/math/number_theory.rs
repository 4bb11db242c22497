//! Integer sequences, primality and factorisation.
//!
//! ## Purpose
//!
//! This module provides exact integer routines: perfect squares, Fibonacci
//! numbers, Armstrong numbers, primality, prime factorisation and factorials.
//!
//! ## Design notes
//!
//! * **Exact**: All arithmetic is integral; no floating-point square roots.
//! * **Checked**: Results that outgrow `u128` are reported as overflow
//!   instead of wrapping.
//! * **Wheel**: Trial division skips multiples of 2 and 3 (candidates 6k ± 1).
//!
//! ## Invariants
//!
//! * `factor_integer` returns prime factors in ascending order whose product is |n|.
//! * `factorial` and `nth_fibonacci` are computed iteratively.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::MathError;

// ============================================================================
// Squares and Sequences
// ============================================================================

/// Whether `n` is the square of an integer.
///
/// # Errors
///
/// [`MathError::NegativeArgument`] if `n` is negative.
pub fn is_perfect_square(n: i64) -> Result<bool, MathError> {
    Validator::validate_non_negative(n, "n")?;
    let n = n.unsigned_abs();
    let root = n.isqrt();
    Ok(root * root == n)
}

/// The nth Fibonacci number, counting from F(0) = 0, F(1) = 1.
///
/// # Errors
///
/// [`MathError::Overflow`] if F(n) exceeds `u128` (n > 186).
pub fn nth_fibonacci(n: u32) -> Result<u128, MathError> {
    let mut current: u128 = 0;
    // F(k + 1), or None once it no longer fits.
    let mut next: Option<u128> = Some(1);

    for _ in 0..n {
        let Some(value) = next else {
            return Validator::reject(MathError::Overflow {
                operation: "nth_fibonacci",
                argument: u64::from(n),
            });
        };
        next = current.checked_add(value);
        current = value;
    }

    Ok(current)
}

/// Whether `n` equals the sum of its digits each raised to the digit count.
pub fn is_armstrong(n: u64) -> bool {
    let mut digits = [0u32; 20];
    let mut count = 0usize;
    let mut rest = n;
    loop {
        digits[count] = (rest % 10) as u32;
        count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    // 20 * 9^20 fits comfortably in u128.
    let sum: u128 = digits[..count]
        .iter()
        .map(|&d| u128::from(d).pow(count as u32))
        .sum();
    sum == u128::from(n)
}

// ============================================================================
// Primes
// ============================================================================

/// Whether `n` is prime. Every `n <= 1` is reported as not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let n = n.unsigned_abs();
    let mut i: u64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Prime factors of |n| in ascending order, with multiplicity.
///
/// Returns `[n]` when |n| = 1.
///
/// # Errors
///
/// [`MathError::ZeroArgument`] if `n` is zero.
pub fn factor_integer(n: i64) -> Result<Vec<i64>, MathError> {
    Validator::validate_non_zero(n, "n")?;
    if n.unsigned_abs() == 1 {
        return Ok(vec![n]);
    }

    let mut rest = n.unsigned_abs();
    let mut factors = Vec::new();
    let mut divide_out = |rest: &mut u64, p: u64| {
        while *rest % p == 0 {
            // p < 2^63 because |i64::MIN| = 2^63 is not prime.
            factors.push(p as i64);
            *rest /= p;
        }
    };

    divide_out(&mut rest, 2);
    divide_out(&mut rest, 3);

    let mut i: u64 = 5;
    while i <= rest / i {
        divide_out(&mut rest, i);
        divide_out(&mut rest, i + 2);
        i += 6;
    }

    // Whatever survives trial division up to its square root is prime.
    if rest > 1 {
        factors.push(rest as i64);
    }

    Ok(factors)
}

// ============================================================================
// Factorial
// ============================================================================

/// n! = 1 · 2 · … · n, with 0! = 1.
///
/// # Errors
///
/// * [`MathError::NegativeArgument`] if `n` is negative.
/// * [`MathError::Overflow`] if n! exceeds `u128` (n > 34).
pub fn factorial(n: i64) -> Result<u128, MathError> {
    Validator::validate_non_negative(n, "n")?;
    let n = n.unsigned_abs();

    let product = (1..=u128::from(n)).try_fold(1u128, |acc, k| acc.checked_mul(k));
    match product {
        Some(value) => Ok(value),
        None => Validator::reject(MathError::Overflow {
            operation: "factorial",
            argument: n,
        }),
    }
}
