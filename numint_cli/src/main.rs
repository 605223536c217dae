//! Compares Monte Carlo and trapezoidal integration of `sum(x_i^2)` on the
//! calibration cases and writes the per-method statistics as JSON.
//!
//! ```bash
//! RUST_LOG=info cargo run --release --bin numint -- --output report.json
//! ```

mod calculate;
mod cases;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::calculate::calculate;
use crate::cases::calibration_cases;
use crate::report::write_reports;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Output file
    #[clap(short, long, value_parser, default_value = "report.json")]
    output: PathBuf,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut reports = Vec::new();
    for case in calibration_cases() {
        reports.push(calculate(&case)?);
    }
    write_reports(&args.output, &reports)?;
    log::info!("report written to {}", args.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
