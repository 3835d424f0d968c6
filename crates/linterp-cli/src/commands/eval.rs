//! Eval command implementation.
//!
//! Evaluates a curve at the given inputs.

use anyhow::Result;
use clap::Args;
use linterp_core::CompileOptions;

use crate::cli::OutputFormat;
use crate::commands::CurveArgs;
use crate::error::CliError;
use crate::output::{print_rows, EvalRow};

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Inputs to evaluate
    #[arg(required = true, allow_negative_numbers = true)]
    pub xs: Vec<f64>,
}

/// Executes the eval command.
pub fn execute(args: EvalArgs, defaults: CompileOptions, format: OutputFormat) -> Result<()> {
    let curve = args.curve.compile(defaults)?;

    let rows = args
        .xs
        .iter()
        .map(|&x| Ok(EvalRow::new(x, curve.evaluate(x)?)))
        .collect::<Result<Vec<_>, CliError>>()?;

    print_rows(&rows, format)
}
