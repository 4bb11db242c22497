//! Descriptive summary of a sample.
//!
//! ## Purpose
//!
//! This module bundles the statistics of [`crate::math::statistics`] into a
//! single validated report with a human-readable `Display`.
//!
//! ## Design notes
//!
//! * **Single validation**: The sample is checked once; the unchecked
//!   statistics kernels do the rest.
//! * **Partial by nature**: Statistics that are undefined for the sample
//!   (no unique mode, spread of a single value, a spread beyond the float
//!   range) are `None` rather than errors.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `min <= median <= max`, and `min <= mean <= max` up to rounding.
//! * `stdev` is `Some` whenever `variance` is.
//!
//! ## Non-goals
//!
//! * This module does not compute quantiles beyond the median.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::statistics::{median_inplace, most_frequent, sample_mean, sample_spread};
use crate::primitives::errors::MathError;

// ============================================================================
// Summary Structure
// ============================================================================

/// Descriptive statistics of a finite, non-empty sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    /// Number of values.
    pub count: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Median.
    pub median: T,

    /// Unique most frequent value, if one exists.
    pub mode: Option<T>,

    /// Smallest value.
    pub min: T,

    /// Largest value.
    pub max: T,

    /// Sample variance; `None` for a single value or on overflow.
    pub variance: Option<T>,

    /// Sample standard deviation; `None` for a single value or on overflow.
    pub stdev: Option<T>,
}

impl<T: Float> Summary<T> {
    /// Summarise a sample.
    ///
    /// # Errors
    ///
    /// [`MathError::EmptyInput`] or [`MathError::InvalidNumericValue`].
    pub fn from_sample(data: &[T]) -> core::result::Result<Self, MathError> {
        Validator::validate_sample(data)?;

        let mean = sample_mean(data);
        let mut scratch = data.to_vec();
        let median = median_inplace(&mut scratch);

        let modes = most_frequent(data);
        let mode = match modes.as_slice() {
            [only] => Some(*only),
            _ => None,
        };

        let (min, max) = data
            .iter()
            .fold((data[0], data[0]), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let finite = |v: T| v.is_finite().then_some(v);
        let (variance, stdev) = if data.len() >= 2 {
            let (var, sd) = sample_spread(data, mean);
            (finite(var), finite(sd))
        } else {
            (None, None)
        };

        Ok(Self {
            count: data.len(),
            mean,
            median,
            mode,
            min,
            max,
            variance,
            stdev,
        })
    }

    /// Difference between the largest and smallest value.
    ///
    /// Infinite when the sample spans more than the float range.
    #[inline]
    pub fn range(&self) -> T {
        self.max - self.min
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Summary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Count:    {}", self.count)?;
        writeln!(f, "  Mean:     {:.6}", self.mean)?;
        writeln!(f, "  Median:   {:.6}", self.median)?;
        match self.mode {
            Some(m) => writeln!(f, "  Mode:     {:.6}", m)?,
            None => writeln!(f, "  Mode:     none")?,
        }
        writeln!(f, "  Min:      {:.6}", self.min)?;
        writeln!(f, "  Max:      {:.6}", self.max)?;
        match self.variance {
            Some(var) => writeln!(f, "  Variance: {:.6}", var)?,
            None => writeln!(f, "  Variance: n/a")?,
        }
        match self.stdev {
            Some(sd) => write!(f, "  Std Dev:  {:.6}", sd),
            None => write!(f, "  Std Dev:  n/a"),
        }
    }
}
