//! Default compile options from a TOML file.
//!
//! ```toml
//! algorithm = "linear"
//! edge_policy = "die"
//! sanitize = true
//! ```
//!
//! Missing keys keep their defaults; command-line flags override the file.

use std::fs;
use std::path::Path;

use linterp_core::CompileOptions;

use crate::error::{CliError, CliResult};

/// Loads options from `path`, or the built-in defaults when absent.
pub fn load(path: Option<&Path>) -> CliResult<CompileOptions> {
    let Some(path) = path else {
        return Ok(CompileOptions::default());
    };

    let text = fs::read_to_string(path)?;
    let options = parse(&text)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), ?options, "loaded config");
    Ok(options)
}

/// Parses a TOML document into options.
pub fn parse(text: &str) -> Result<CompileOptions, toml::de::Error> {
    toml::from_str(text)
}
