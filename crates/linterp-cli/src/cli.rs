//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{EvalArgs, SampleArgs, SegmentsArgs, TreeArgs};

/// Linterp - compile sample points into a fast piecewise-linear curve
#[derive(Parser)]
#[command(name = "linterp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// TOML file with default compile options
    #[arg(short, long, global = true, env = "LINTERP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the curve at one or more inputs
    Eval(EvalArgs),

    /// Evaluate the curve on an evenly spaced grid
    Sample(SampleArgs),

    /// Show the compiled decision tree
    Tree(TreeArgs),

    /// List the compiled segments
    Segments(SegmentsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
