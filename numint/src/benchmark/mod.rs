//! Integrands used by tests, benchmarks and the calibration driver.

pub mod integrands;
