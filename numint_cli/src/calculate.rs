//! Runs both integrators on a test case, counting and timing each run.

use std::time::Instant;

use log::{error, info};
use numint::benchmark::integrands::SumOfSquares;
use numint::integrand::CountingIntegrand;
use numint::monte_carlo::MonteCarlo;
use numint::quadrature::Quadrature;

use crate::cases::TestCase;
use crate::report::{Report, Stat};

/// Runs `integrate` on a freshly counted integrand and logs the outcome
/// under `method`.
fn measure<I>(case: &TestCase, method: &str, integrate: I) -> numint::Result<Stat>
where
    I: FnOnce(&CountingIntegrand<&SumOfSquares>) -> numint::Result<f64>,
{
    let integrand = case.integrand();
    let f = CountingIntegrand::new(&integrand);
    let start = Instant::now();
    let sum = match integrate(&f) {
        Ok(sum) => sum,
        Err(e) => {
            error!(target: method, "calculate: {}", e);
            return Err(e);
        }
    };
    let elapsed = start.elapsed();
    let stat = Stat::new(f.count(), elapsed);

    info!(
        target: method,
        "calculate n={} sum={} invokeCount={} executionTime={:?} error={}",
        case.dim,
        sum,
        stat.invoke_count,
        elapsed,
        (case.reference - sum).abs()
    );
    Ok(stat)
}

/// Integrates `case` with both methods.
pub fn calculate(case: &TestCase) -> numint::Result<Report> {
    let monte_carlo = measure(case, "MonteCarlo", |f| {
        MonteCarlo::new(case.points).integrate(f, &case.lower, &case.upper)
    })?;

    let quadrature = measure(case, "Quadrature", |f| {
        Quadrature::new(&case.steps).integrate(f, &case.lower, &case.upper)
    })?;

    Ok(Report {
        monte_carlo,
        quadrature,
    })
}
