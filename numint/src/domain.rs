//! Validation and geometry helpers shared by the integrators.
//!
//! A domain is an axis-aligned box given by two equally long slices,
//! `lower` and `upper`. Callers are expected to pass `lower[i] <= upper[i]`;
//! this is not checked, and reversed bounds simply flip the sign of the
//! corresponding width.

use crate::error::{IntegrationError, Result};

/// Checks that `lower`, `upper` and, when given, `steps` have the same length.
///
/// Returns the common dimension on success.
pub fn check_dims(lower: &[f64], upper: &[f64], steps: Option<&[f64]>) -> Result<usize> {
    let n = lower.len();
    let steps_ok = steps.map_or(true, |h| h.len() == n);
    if n != upper.len() || !steps_ok {
        return Err(IntegrationError::DimensionMismatch {
            lower: n,
            upper: upper.len(),
            steps: steps.map(<[f64]>::len),
        });
    }
    Ok(n)
}

/// Width of every dimension, `upper[i] - lower[i]`.
pub fn widths<'a>(lower: &'a [f64], upper: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    lower.iter().zip(upper).map(|(&a, &b)| b - a)
}

/// Volume of the box, the product of its widths.
///
/// Zero or negative widths are not errors; they propagate into the product.
pub fn volume(lower: &[f64], upper: &[f64]) -> f64 {
    widths(lower, upper).product()
}
