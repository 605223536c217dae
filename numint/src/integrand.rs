//! The `Integrand` trait, which defines the function to be integrated.

use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

/// A trait representing a function to be integrated.
///
/// The dimension of the point is fixed by the domain handed to the
/// integrator, so an integrand only needs to know how to evaluate itself.
/// Any `Fn(&[f64]) -> f64` closure is an integrand.
pub trait Integrand {
    /// Evaluates the function at a given point `x`.
    ///
    /// # Arguments
    ///
    /// * `x`: A slice of `f64` representing the point in the integration space.
    ///
    /// # Returns
    ///
    /// The value of the function `f(x)`.
    fn eval(&self, x: &[f64]) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(&[f64]) -> f64,
{
    fn eval(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// An integrand decorator that counts how many times it was evaluated.
///
/// The wrapper holds a pointer to the integrand (a reference, `Box`, `Arc`,
/// ...), so struct integrands and trait objects are counted without being
/// moved or modified. The counter lives in the wrapper, not in the
/// integrators, so the same integrator can be timed and counted by several
/// callers at once.
///
/// ```
/// use numint::integrand::{CountingIntegrand, Integrand};
///
/// let double = |x: &[f64]| x[0] * 2.0;
/// let f = CountingIntegrand::new(&double);
/// assert_eq!(f.eval(&[1.5]), 3.0);
/// assert_eq!(f.count(), 1);
/// ```
#[derive(Debug)]
pub struct CountingIntegrand<P> {
    inner: P,
    count: AtomicU64,
}

impl<P> CountingIntegrand<P> {
    pub fn new(inner: P) -> Self {
        CountingIntegrand {
            inner,
            count: AtomicU64::new(0),
        }
    }

    /// Returns the number of evaluations since creation or the last reset.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    /// Unwraps the pointer to the decorated integrand.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Integrand for CountingIntegrand<P>
where
    P: Deref,
    P::Target: Integrand,
{
    fn eval(&self, x: &[f64]) -> f64 {
        self.count.fetch_add(1, Ordering::Relaxed);
        Integrand::eval(&*self.inner, x)
    }
}
