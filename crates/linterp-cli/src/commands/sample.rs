//! Sample command implementation.
//!
//! Evaluates a curve on an evenly spaced grid.

use anyhow::Result;
use clap::Args;
use linterp_core::CompileOptions;

use crate::cli::OutputFormat;
use crate::commands::CurveArgs;
use crate::error::{CliError, CliResult};
use crate::output::{print_rows, EvalRow};

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// First grid point (defaults to the smallest x)
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// Last grid point (defaults to the largest x)
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Number of intervals between --from and --to (at most 1000000)
    #[arg(long, default_value = "10")]
    pub steps: usize,
}

/// Largest number of intervals a grid may have.
pub const MAX_STEPS: usize = 1_000_000;

/// Evenly spaced points from `from` to `to` inclusive.
pub fn grid(from: f64, to: f64, steps: usize) -> CliResult<Vec<f64>> {
    if steps == 0 {
        return Err(CliError::InvalidGrid("steps must be at least 1".to_string()));
    }
    if steps > MAX_STEPS {
        return Err(CliError::InvalidGrid(format!(
            "steps must be at most {}, got {}",
            MAX_STEPS, steps
        )));
    }
    if !from.is_finite() || !to.is_finite() || to < from {
        return Err(CliError::InvalidGrid(format!(
            "need finite from <= to, got {} and {}",
            from, to
        )));
    }

    let width = (to - from) / steps as f64;
    Ok((0..=steps)
        .map(|i| if i == steps { to } else { from + width * i as f64 })
        .collect())
}

/// Executes the sample command.
pub fn execute(args: SampleArgs, defaults: CompileOptions, format: OutputFormat) -> Result<()> {
    let curve = args.curve.compile(defaults)?;

    let from = args.from.unwrap_or_else(|| curve.min_x());
    let to = args.to.unwrap_or_else(|| curve.max_x());

    let rows = grid(from, to, args.steps)?
        .into_iter()
        .map(|x| Ok(EvalRow::new(x, curve.evaluate(x)?)))
        .collect::<Result<Vec<_>, CliError>>()?;

    print_rows(&rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid() {
        assert_eq!(grid(0.0, 1.0, 4).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(grid(2.0, 2.0, 1).unwrap(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_grid_invalid() {
        assert!(grid(0.0, 1.0, 0).is_err());
        assert!(grid(1.0, 0.0, 3).is_err());
        assert!(grid(f64::NAN, 1.0, 3).is_err());
    }

    #[test]
    fn test_grid_too_large() {
        assert_eq!(grid(0.0, 1.0, MAX_STEPS).unwrap().len(), MAX_STEPS + 1);
        assert!(matches!(
            grid(0.0, 1.0, MAX_STEPS + 1),
            Err(CliError::InvalidGrid(_))
        ));
        assert!(matches!(
            grid(0.0, 1.0, usize::MAX),
            Err(CliError::InvalidGrid(msg)) if msg.contains("at most")
        ));
    }
}
