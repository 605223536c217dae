//! Reference integrands with closed-form integrals over boxes.
use crate::domain;
use crate::integrand::Integrand;

/// Integral over the box of a separable sum `sum_i g_i(x_i)`, given the
/// one-dimensional integral `g_int(i, a, b)` of `g_i` on `[a, b]`.
fn separable_sum(lower: &[f64], upper: &[f64], g_int: impl Fn(usize, f64, f64) -> f64) -> f64 {
    let widths: Vec<f64> = domain::widths(lower, upper).collect();
    let mut result = 0.0;
    for i in 0..widths.len() {
        let others: f64 = widths
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, w)| w)
            .product();
        result += g_int(i, lower[i], upper[i]) * others;
    }
    result
}

// Sum of squares
#[derive(Clone, Debug)]
pub struct SumOfSquares {
    dim: usize,
}

impl SumOfSquares {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// `sum_i (b_i^3 - a_i^3) / 3 * prod_{j != i} (b_j - a_j)`
    pub fn analytical_result(&self, lower: &[f64], upper: &[f64]) -> f64 {
        separable_sum(lower, upper, |_, a, b| (b.powi(3) - a.powi(3)) / 3.0)
    }
}

/// Only the first `dim` coordinates of a point are summed.
impl Integrand for SumOfSquares {
    fn eval(&self, x: &[f64]) -> f64 {
        x.iter().take(self.dim).map(|v| v * v).sum()
    }
}

// Linear
#[derive(Clone, Debug)]
pub struct Linear {
    c: Vec<f64>,
}

impl Linear {
    pub fn new(c: &[f64]) -> Self {
        Self { c: c.to_vec() }
    }

    pub fn dim(&self) -> usize {
        self.c.len()
    }

    pub fn analytical_result(&self, lower: &[f64], upper: &[f64]) -> f64 {
        separable_sum(lower, upper, |i, a, b| self.c[i] * (b * b - a * a) / 2.0)
    }
}

impl Integrand for Linear {
    fn eval(&self, x: &[f64]) -> f64 {
        self.c.iter().zip(x).map(|(c, x)| c * x).sum()
    }
}
