//! `numint` computes definite integrals over n-dimensional boxes.
//!
//! Two independent integrators are provided: a plain Monte Carlo estimator
//! ([`monte_carlo::MonteCarlo`]) and a composite trapezoidal rule applied one
//! dimension at a time ([`quadrature::Quadrature`]). Both take any
//! [`integrand::Integrand`] and hold no state between calls beyond their
//! configuration.

pub mod benchmark;
pub mod domain;
pub mod error;
pub mod integrand;
pub mod monte_carlo;
pub mod quadrature;

pub use error::{IntegrationError, Result};
