//! Linterp CLI - compile and query piecewise-linear curves.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a clamped ramp
//! linterp eval --points "0:0,1:1" -- -1 0.5 2
//!
//! # Sample an extrapolated curve
//! linterp sample --points "1:1,2:1,3:0" --edge extrapolate --from 0 --to 5 --steps 10
//!
//! # Show the decision tree
//! linterp tree --domain "5,5,6,6" --range "1,2,2,1" --edge die
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli.format;
    let defaults = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Eval(args) => commands::eval::execute(args, defaults, format)?,
        Commands::Sample(args) => commands::sample::execute(args, defaults, format)?,
        Commands::Tree(args) => commands::tree::execute(args, defaults, format)?,
        Commands::Segments(args) => commands::segments::execute(args, defaults, format)?,
    }

    Ok(())
}
