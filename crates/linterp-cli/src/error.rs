//! CLI error types.

use linterp_core::{DomainError, ValidationError};
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A point token is not of the form `x:y`.
    #[error("Invalid point '{0}'. Use x:y pairs separated by commas.")]
    InvalidPoint(String),

    /// No curve input was given.
    #[error("No points given. Use --points, --domain with --range, or --file.")]
    MissingPoints,

    /// A CSV row does not have exactly two columns.
    #[error("Invalid row {row} in {path}: expected x,y")]
    InvalidRow {
        /// File the row came from.
        path: String,
        /// 1-based row number.
        row: usize,
    },

    /// Bad sampling grid.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// The curve could not be compiled.
    #[error("{0}")]
    Curve(#[from] ValidationError),

    /// Evaluation hit a domain violation.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
