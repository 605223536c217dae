//! Plain Monte Carlo integration by uniform sampling of the domain.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::domain;
use crate::error::Result;
use crate::integrand::Integrand;

/// The Monte Carlo integrator.
///
/// The estimate is `volume * sum(f(x_i)) / n_points`, where every `x_i` is
/// drawn uniformly from the domain. Samples are drawn and accumulated in
/// order, so a seeded random source gives bit-identical results.
pub struct MonteCarlo<R = Pcg64> {
    /// The number of integrand evaluations per integration.
    n_points: usize,
    /// The random number generator.
    rng: R,
}

impl MonteCarlo<Pcg64> {
    /// Creates a new integrator drawing `n_points` samples, seeded from entropy.
    pub fn new(n_points: usize) -> Self {
        MonteCarlo {
            n_points,
            rng: Pcg64::from_entropy(),
        }
    }

    /// Sets the seed for the random number generator.
    ///
    /// # Arguments
    ///
    /// * `seed`: The seed to use.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Pcg64::seed_from_u64(seed);
    }
}

impl<R: Rng> MonteCarlo<R> {
    /// Creates a new integrator drawing its samples from `rng`.
    pub fn with_rng(n_points: usize, rng: R) -> Self {
        MonteCarlo { n_points, rng }
    }

    /// Returns the number of samples drawn per integration.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Integrates `integrand` over the box `[lower, upper)`.
    ///
    /// The integrand is called exactly `n_points` times. With zero points
    /// nothing is sampled and the estimate is `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `lower` and `upper` differ in length,
    /// before any sample is drawn.
    ///
    /// # Examples
    ///
    /// ```
    /// use numint::monte_carlo::MonteCarlo;
    ///
    /// let f = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
    /// let mut mc = MonteCarlo::new(100_000);
    /// mc.set_seed(1234);
    /// let value = mc.integrate(&f, &[0.0, 0.0], &[2.0, 3.0]).unwrap();
    ///
    /// assert!((value - 26.0).abs() / 26.0 < 0.05);
    /// ```
    pub fn integrate<F: Integrand + ?Sized>(
        &mut self,
        integrand: &F,
        lower: &[f64],
        upper: &[f64],
    ) -> Result<f64> {
        let dim = domain::check_dims(lower, upper, None)?;
        if self.n_points == 0 {
            return Ok(0.0);
        }

        let volume = domain::volume(lower, upper);
        let mut point = vec![0.0; dim];
        let mut sum = 0.0;

        for _ in 0..self.n_points {
            self.sample(lower, upper, &mut point);
            sum += integrand.eval(&point);
        }

        Ok(volume * sum / self.n_points as f64)
    }

    /// Fills `point` with a uniform sample, `lower[i] + u * (upper[i] - lower[i])`
    /// with `u` in `[0, 1)`.
    fn sample(&mut self, lower: &[f64], upper: &[f64], point: &mut [f64]) {
        for (x, (&a, &b)) in point.iter_mut().zip(lower.iter().zip(upper)) {
            let u: f64 = self.rng.gen();
            *x = a + u * (b - a);
        }
    }
}
