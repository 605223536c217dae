//! Composite trapezoidal quadrature over n-dimensional boxes.
//!
//! Dimensions are reduced one at a time in index order. Integrating over
//! dimension `k` partitions `[lower[k], upper[k]]` into
//! `count = round(width / h[k])` subintervals, weights the two endpoints by
//! one half and every interior node by one, and multiplies the weighted sum
//! by `h[k]`. The value at a node is the integrand itself for the last
//! dimension and the integral over the remaining dimensions otherwise.
//!
//! When the width is not a multiple of `h[k]` the rounding of `count` is
//! accepted as is: the last subinterval differs in width from `h[k]` but is
//! still weighted as if it did not.

use crate::domain;
use crate::error::Result;
use crate::integrand::Integrand;

/// The composite trapezoidal integrator.
#[derive(Debug, Clone)]
pub struct Quadrature {
    /// The subinterval width for each dimension.
    steps: Vec<f64>,
}

impl Quadrature {
    /// Creates a new trapezoidal integrator.
    ///
    /// # Arguments
    ///
    /// * `steps`: The subinterval width for each dimension. Widths are
    ///   expected to be positive.
    pub fn new(steps: &[f64]) -> Self {
        Quadrature {
            steps: steps.to_vec(),
        }
    }

    /// Creates an integrator using the same step `h` in each of `dim` dimensions.
    pub fn uniform(dim: usize, h: f64) -> Self {
        Quadrature {
            steps: vec![h; dim],
        }
    }

    /// Returns the step sizes.
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Returns the number of dimensions of the integrator.
    pub fn dim(&self) -> usize {
        self.steps.len()
    }

    /// Integrates `integrand` over the box `[lower, upper]`.
    ///
    /// The result is deterministic: the same inputs visit the same nodes in
    /// the same order and produce a bit-identical sum.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `lower`, `upper` and the step sizes do
    /// not all have the same length. The integrand is not called in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use numint::quadrature::Quadrature;
    ///
    /// // The trapezoidal rule is exact for linear functions.
    /// let quad = Quadrature::new(&[0.1]);
    /// let value = quad.integrate(&|x: &[f64]| x[0], &[0.0], &[1.0]).unwrap();
    ///
    /// assert!((value - 0.5).abs() < 1e-12);
    /// ```
    pub fn integrate<F: Integrand + ?Sized>(
        &self,
        integrand: &F,
        lower: &[f64],
        upper: &[f64],
    ) -> Result<f64> {
        let dim = domain::check_dims(lower, upper, Some(self.steps.as_slice()))?;
        if dim == 0 {
            return Ok(0.0);
        }

        let mut point = lower.to_vec();
        Ok(self.reduce(integrand, lower, upper, 0, &mut point))
    }

    /// Returns how many times `integrate` would call the integrand on this box.
    ///
    /// This is the product over dimensions of the nodes per dimension, see
    /// [`nodes`]. A product that does not fit in `u64` saturates at
    /// `u64::MAX`.
    pub fn evaluation_count(&self, lower: &[f64], upper: &[f64]) -> Result<u64> {
        domain::check_dims(lower, upper, Some(self.steps.as_slice()))?;
        let per_dim: Vec<u64> = lower
            .iter()
            .zip(upper)
            .zip(&self.steps)
            .map(|((&a, &b), &h)| nodes(a, b, h))
            .collect();
        if per_dim.is_empty() || per_dim.contains(&0) {
            return Ok(0);
        }
        Ok(per_dim
            .iter()
            .try_fold(1u64, |acc, &n| acc.checked_mul(n))
            .unwrap_or(u64::MAX))
    }

    /// Integrates over dimension `k` with the coordinates before `k` fixed in
    /// `point`. `point[k..]` holds `lower[k..]` on entry and on return.
    fn reduce<F: Integrand + ?Sized>(
        &self,
        integrand: &F,
        lower: &[f64],
        upper: &[f64],
        k: usize,
        point: &mut [f64],
    ) -> f64 {
        let (a, b, h) = (lower[k], upper[k], self.steps[k]);
        if a == b {
            return 0.0;
        }
        let count = subintervals(a, b, h);

        let mut sum = 0.5 * self.node(integrand, lower, upper, k, point);
        for i in 1..count {
            point[k] = a + i as f64 * h;
            sum += self.node(integrand, lower, upper, k, point);
        }
        point[k] = b;
        sum += 0.5 * self.node(integrand, lower, upper, k, point);

        point[k] = a;
        sum * h
    }

    /// Value at the node currently fixed in `point[k]`.
    fn node<F: Integrand + ?Sized>(
        &self,
        integrand: &F,
        lower: &[f64],
        upper: &[f64],
        k: usize,
        point: &mut [f64],
    ) -> f64 {
        if k + 1 == point.len() {
            integrand.eval(point)
        } else {
            self.reduce(integrand, lower, upper, k + 1, point)
        }
    }
}

/// Number of subintervals for a dimension, `round((b - a) / h)`.
///
/// Negative or undefined ratios give zero.
pub fn subintervals(a: f64, b: f64, h: f64) -> usize {
    ((b - a) / h).round() as usize
}

/// Number of nodes the trapezoidal rule evaluates along one dimension.
///
/// Both endpoints are always evaluated, even when the step is wider than the
/// interval, so a non-degenerate dimension has at least two nodes. A
/// dimension with equal bounds has none.
pub fn nodes(a: f64, b: f64, h: f64) -> u64 {
    if a == b {
        return 0;
    }
    (subintervals(a, b, h).max(1) as u64).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegrationError;
    use crate::integrand::CountingIntegrand;

    fn sum_of_squares(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_linear_is_exact() {
        let quad = Quadrature::new(&[0.1]);
        let value = quad.integrate(&|x: &[f64]| x[0], &[0.0], &[1.0]).unwrap();
        assert!((value - 0.5).abs() < 1e-12, "value={}", value);
    }

    #[test]
    fn test_sum_of_squares_2d() {
        let quad = Quadrature::uniform(2, 0.1);
        let value = quad
            .integrate(&sum_of_squares, &[0.0, 0.0], &[2.0, 3.0])
            .unwrap();
        let rel = (value - 26.0).abs() / 26.0;
        assert!(rel < 1e-2, "Analytical=26 vs. Quadrature={}", value);
    }

    #[test]
    fn test_known_trapezoid_value() {
        // x^2 on [0, 3] with unit steps: 0.5*0 + 1 + 4 + 0.5*9 = 9.5
        let quad = Quadrature::new(&[1.0]);
        let value = quad.integrate(&sum_of_squares, &[0.0], &[3.0]).unwrap();
        assert!((value - 9.5).abs() < 1e-12, "value={}", value);
    }

    #[test]
    fn test_invocation_count() {
        let quad = Quadrature::new(&[0.1, 0.5, 0.25]);
        let lower = [0.0, 1.0, -1.0];
        let upper = [1.0, 3.0, 0.0];
        let f = CountingIntegrand::new(&sum_of_squares);
        quad.integrate(&f, &lower, &upper).unwrap();

        // (10 + 1) * (4 + 1) * (4 + 1)
        assert_eq!(f.count(), 275);
        assert_eq!(quad.evaluation_count(&lower, &upper).unwrap(), 275);
    }

    #[test]
    fn test_visits_nodes_in_order() {
        let quad = Quadrature::new(&[0.5, 1.0]);
        let visited = std::cell::RefCell::new(Vec::new());
        let f = |x: &[f64]| {
            visited.borrow_mut().push(x.to_vec());
            0.0
        };
        quad.integrate(&f, &[0.0, 0.0], &[1.0, 1.0]).unwrap();

        let expected = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![0.5, 0.0],
            vec![0.5, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        assert_eq!(visited.into_inner(), expected);
    }

    #[test]
    fn test_step_wider_than_interval() {
        // count rounds to zero; both endpoints are still evaluated.
        let quad = Quadrature::new(&[10.0]);
        let first = |x: &[f64]| x[0];
        let f = CountingIntegrand::new(&first);
        let value = quad.integrate(&f, &[0.0], &[1.0]).unwrap();
        assert_eq!(f.count(), 2);
        assert_eq!(value, 10.0 * 0.5);
    }

    #[test]
    fn test_degenerate_dimension_is_zero() {
        let quad = Quadrature::uniform(2, 0.1);
        let f = CountingIntegrand::new(&sum_of_squares);
        let value = quad.integrate(&f, &[0.0, 1.0], &[2.0, 1.0]).unwrap();
        assert_eq!(value, 0.0);
        assert_eq!(f.count(), quad.evaluation_count(&[0.0, 1.0], &[2.0, 1.0]).unwrap());
    }

    #[test]
    fn test_is_deterministic() {
        let quad = Quadrature::uniform(3, 0.125);
        let lower = [0.0, 2.0, 4.0];
        let upper = [1.0, 3.0, 5.0];
        let first = quad.integrate(&sum_of_squares, &lower, &upper).unwrap();
        let second = quad.integrate(&sum_of_squares, &lower, &upper).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_mismatch_does_not_evaluate() {
        let f = CountingIntegrand::new(&sum_of_squares);

        let quad = Quadrature::new(&[0.1, 0.1]);
        let err = quad.integrate(&f, &[0.0, 0.0], &[1.0]).unwrap_err();
        assert!(matches!(err, IntegrationError::DimensionMismatch { .. }));

        let quad = Quadrature::new(&[0.1]);
        let err = quad.integrate(&f, &[0.0, 0.0], &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            IntegrationError::DimensionMismatch {
                lower: 2,
                upper: 2,
                steps: Some(1)
            }
        );
        assert!(quad.evaluation_count(&[0.0, 0.0], &[1.0, 1.0]).is_err());

        assert_eq!(f.count(), 0);
    }

    #[test]
    fn test_evaluation_count_saturates() {
        let quad = Quadrature::uniform(8, 1e-4);
        let lower = [0.0; 8];
        let upper = [1.0; 8];
        assert_eq!(quad.evaluation_count(&lower, &upper).unwrap(), u64::MAX);
        assert_eq!(nodes(0.0, 1.0, 0.0), u64::MAX);

        // A degenerate dimension still wins over an overflowing product.
        let mut upper = upper;
        upper[7] = 0.0;
        assert_eq!(quad.evaluation_count(&lower, &upper).unwrap(), 0);
    }

    #[test]
    fn test_reversed_bounds() {
        // round(-10) clamps to zero subintervals: both endpoints, half weight.
        let quad = Quadrature::new(&[0.1]);
        let first = |x: &[f64]| x[0];
        let f = CountingIntegrand::new(&first);
        let value = quad.integrate(&f, &[1.0], &[0.0]).unwrap();
        assert!((value - 0.05).abs() < 1e-12, "value={}", value);
        assert_eq!(f.count(), 2);
        assert_eq!(quad.evaluation_count(&[1.0], &[0.0]).unwrap(), 2);
    }

    #[test]
    fn test_accessors() {
        let quad = Quadrature::new(&[0.1, 0.25]);
        assert_eq!(quad.dim(), 2);
        assert_eq!(quad.steps(), &[0.1, 0.25]);

        let quad = Quadrature::uniform(3, 0.5);
        assert_eq!(quad.dim(), 3);
        assert_eq!(quad.steps(), &[0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_inexact_step_is_rounded() {
        // 1 / 0.3 rounds to 3 subintervals of width 0.3.
        assert_eq!(subintervals(0.0, 1.0, 0.3), 3);
        assert_eq!(nodes(0.0, 1.0, 0.3), 4);
        let quad = Quadrature::new(&[0.3]);
        let value = quad.integrate(&|_: &[f64]| 1.0, &[0.0], &[1.0]).unwrap();
        assert!((value - 0.9).abs() < 1e-12, "value={}", value);
    }
}
