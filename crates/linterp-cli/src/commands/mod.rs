//! CLI command implementations.

pub mod eval;
pub mod sample;
pub mod segments;
pub mod tree;

// Re-export submodules for convenience
pub use eval::EvalArgs;
pub use sample::SampleArgs;
pub use segments::SegmentsArgs;
pub use tree::TreeArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use linterp_core::validate::is_numeral;
use linterp_core::{CompileOptions, CompiledInterpolation, RawValue};

use crate::error::{CliError, CliResult};

/// Curve input shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    /// Points as x:y pairs (comma-separated, e.g., "0:0,1:0.5,1:1.5,2:2")
    #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["domain", "file"])]
    pub points: Option<String>,

    /// X values (comma-separated, non-decreasing)
    #[arg(long, allow_hyphen_values = true, requires = "range", conflicts_with = "file")]
    pub domain: Option<String>,

    /// Y values (comma-separated, parallel to --domain)
    #[arg(long, allow_hyphen_values = true, requires = "domain")]
    pub range: Option<String>,

    /// CSV file with x,y rows (header row optional)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Interpolation algorithm
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Edge policy: clamp, extrapolate, undef or die
    #[arg(short, long)]
    pub edge: Option<String>,

    /// Skip numeral validation of the points
    #[arg(long)]
    pub no_sanitize: bool,
}

impl CurveArgs {
    /// Applies command-line overrides to the configured defaults.
    ///
    /// The algorithm and edge policy are resolved together, so an edge
    /// policy the chosen algorithm cannot handle is reported against it.
    pub fn options(&self, defaults: CompileOptions) -> CliResult<CompileOptions> {
        let algorithm = self.algorithm.as_deref().unwrap_or(defaults.algorithm.name());
        let edge = self.edge.as_deref().unwrap_or(defaults.edge_policy.name());
        let options = CompileOptions::parse(algorithm, edge)?;
        Ok(options.with_sanitize(defaults.sanitize && !self.no_sanitize))
    }

    /// Collects the raw domain and range tokens.
    pub fn raw_points(&self) -> CliResult<(Vec<RawValue>, Vec<RawValue>)> {
        if let Some(points) = &self.points {
            return parse_pairs(points);
        }
        if let (Some(domain), Some(range)) = (&self.domain, &self.range) {
            return Ok((parse_list(domain), parse_list(range)));
        }
        if let Some(path) = &self.file {
            return read_csv(path);
        }
        Err(CliError::MissingPoints)
    }

    /// Compiles the curve described by these arguments.
    pub fn compile(&self, defaults: CompileOptions) -> CliResult<CompiledInterpolation> {
        let options = self.options(defaults)?;
        let (domain, range) = self.raw_points()?;
        tracing::debug!(points = domain.len(), ?options, "compiling curve");
        Ok(CompiledInterpolation::compile(&domain, &range, options)?)
    }
}

fn token(text: &str) -> RawValue {
    RawValue::Text(text.trim().to_string())
}

/// Parses "x:y,x:y,..." into domain and range tokens.
pub fn parse_pairs(text: &str) -> CliResult<(Vec<RawValue>, Vec<RawValue>)> {
    text.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            pair.split_once(':')
                .map(|(x, y)| (token(x), token(y)))
                .ok_or_else(|| CliError::InvalidPoint(pair.trim().to_string()))
        })
        .collect::<CliResult<Vec<_>>>()
        .map(|pairs| pairs.into_iter().unzip())
}

/// Parses "a,b,c" into tokens.
pub fn parse_list(text: &str) -> Vec<RawValue> {
    text.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(token)
        .collect()
}

/// Reads x,y rows from a CSV file. A first row whose x is not a numeral is
/// treated as a header.
pub fn read_csv(path: &Path) -> CliResult<(Vec<RawValue>, Vec<RawValue>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut domain = Vec::new();
    let mut range = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if i == 0 && record.get(0).is_some_and(|x| !is_numeral(x)) {
            continue;
        }
        match (record.get(0), record.get(1), record.len()) {
            (Some(x), Some(y), 2) => {
                domain.push(token(x));
                range.push(token(y));
            }
            _ => {
                return Err(CliError::InvalidRow {
                    path: path.display().to_string(),
                    row: i + 1,
                })
            }
        }
    }

    Ok((domain, range))
}
