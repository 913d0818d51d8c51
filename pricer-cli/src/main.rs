//! Pricer CLI — value a company from a data file and a model file.
//!
//! Prints one table per valuation scenario, in the order scenarios first
//! appear in the model file. Logs go to stderr, filtered by `RUST_LOG`.

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pricer",
    about = "Pricer CLI — weighted ensemble valuation of equity per share"
)]
struct Cli {
    /// File containing data for valuation.
    #[arg(short = 'd', long = "datafile")]
    datafile: PathBuf,

    /// File containing model descriptions and weights.
    #[arg(short = 'm', long = "modelfile")]
    modelfile: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let model_src = read_input(&cli.modelfile, "model")?;
    let data_src = read_input(&cli.datafile, "data")?;

    let report = pricer_core::price(&data_src, &model_src)?;
    debug!(scenarios = report.scenarios.len(), "rendering report");
    print!("{}", render::render_report(&report));

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: &Path, kind: &str) -> Result<String> {
    debug!(path = %path.display(), kind, "reading input");
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {kind} file {}", path.display()))
}
