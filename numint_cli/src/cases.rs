//! The hard-coded calibration cases compared by the driver.

use numint::benchmark::integrands::SumOfSquares;

/// Monte Carlo sample counts, indexed by dimension - 1.
const POINTS: [usize; 9] = [
    7500, 195_000, 802_500, 2_070_000, 4_237_501, 7_545_001, 12_232_501, 18_540_001, 26_707_500,
];

/// Quadrature step sizes, indexed by dimension - 1.
const STEPS: [f64; 9] = [
    0.2, 0.166667, 0.125, 0.111111, 0.1, 0.1, 0.0909091, 0.0833333, 0.0769231,
];

/// Integral of the sum of squares over the unit boxes, indexed by dimension - 1.
const REFERENCE: [f64; 9] = [
    1.0 / 3.0,
    20.0 / 3.0,
    27.0,
    208.0 / 3.0,
    425.0 / 3.0,
    252.0,
    1225.0 / 3.0,
    1856.0 / 3.0,
    891.0,
];

/// One comparison of the two integrators.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub dim: usize,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    /// Number of Monte Carlo samples.
    pub points: usize,
    /// Quadrature step size, the same in every dimension.
    pub steps: Vec<f64>,
    /// The exact value of the integral.
    pub reference: f64,
}

impl TestCase {
    /// Builds the case of dimension `dim` integrating over `[2j, 2j + 1]`
    /// in every dimension `j`.
    fn calibration(dim: usize) -> Self {
        TestCase {
            dim,
            lower: (0..dim).map(|j| (2 * j) as f64).collect(),
            upper: (0..dim).map(|j| (2 * j + 1) as f64).collect(),
            points: POINTS[dim - 1],
            steps: vec![STEPS[dim - 1]; dim],
            reference: REFERENCE[dim - 1],
        }
    }

    pub fn integrand(&self) -> SumOfSquares {
        SumOfSquares::new(self.dim)
    }
}

/// Returns the calibration cases for dimensions 1 through 9.
pub fn calibration_cases() -> Vec<TestCase> {
    (1..=POINTS.len()).map(TestCase::calibration).collect()
}
