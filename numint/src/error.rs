//! Errors reported by the integrators.

use thiserror::Error;

/// Errors that can occur before an integration starts.
///
/// Integrators validate their inputs up front and never fail once the
/// integrand has been called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// The bound sequences (and step sizes, for quadrature) disagree in length.
    #[error("wrong dimensions: lower has {lower}, upper has {upper}{}", fmt_steps(.steps))]
    DimensionMismatch {
        lower: usize,
        upper: usize,
        steps: Option<usize>,
    },
}

fn fmt_steps(steps: &Option<usize>) -> String {
    match steps {
        Some(n) => format!(", steps has {}", n),
        None => String::new(),
    }
}

/// Shorthand for results returned by the integrators.
pub type Result<T> = std::result::Result<T, IntegrationError>;
