//! Report records and their JSON output.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Serialize;

/// Instrumentation of one integrator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub invoke_count: u64,
    pub execution_time_nanos: u64,
}

impl Stat {
    pub fn new(invoke_count: u64, elapsed: Duration) -> Self {
        Stat {
            invoke_count,
            execution_time_nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }
}

/// Both integrators' statistics for one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub monte_carlo: Stat,
    pub quadrature: Stat,
}

/// Writes `reports` as a JSON array to `path`, replacing any existing file.
pub fn write_reports(path: &Path, reports: &[Report]) -> anyhow::Result<()> {
    let json = serde_json::to_string(reports).context("serializing report")?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
