//! Compilation options: algorithm, edge policy and input sanitizing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Interpolation algorithm used to derive segments from the points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Straight lines between consecutive points.
    #[default]
    Linear,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 1] = [Algorithm::Linear];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            _ => Err(ValidationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Behavior for inputs outside `[min(domain), max(domain)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Hold the first/last range value.
    #[default]
    Clamp,
    /// Continue the outermost segments.
    Extrapolate,
    /// Return no value.
    #[serde(alias = "undefined")]
    Undef,
    /// Fail with a [`DomainError`](crate::DomainError).
    #[serde(alias = "error")]
    Die,
}

impl EdgePolicy {
    /// All edge policies.
    pub const ALL: [EdgePolicy; 4] = [
        EdgePolicy::Clamp,
        EdgePolicy::Extrapolate,
        EdgePolicy::Undef,
        EdgePolicy::Die,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Extrapolate => "extrapolate",
            Self::Undef => "undef",
            Self::Die => "die",
        }
    }

    fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Some(Self::Clamp),
            "extrapolate" => Some(Self::Extrapolate),
            "undef" | "undefined" => Some(Self::Undef),
            "die" | "error" => Some(Self::Die),
            _ => None,
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s).ok_or_else(|| ValidationError::unsupported_edge_policy(s, "any algorithm"))
    }
}

/// Default for [`CompileOptions::sanitize`].
pub const DEFAULT_SANITIZE: bool = true;

/// Configuration for compiling a curve.
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// ```rust
/// use linterp_core::{Algorithm, CompileOptions, EdgePolicy};
///
/// let options = CompileOptions::default().with_edge_policy(EdgePolicy::Extrapolate);
/// assert_eq!(options.algorithm, Algorithm::Linear);
/// assert!(options.sanitize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Segment-building algorithm.
    pub algorithm: Algorithm,
    /// Out-of-domain behavior.
    pub edge_policy: EdgePolicy,
    /// Whether to check every value against the numeral pattern.
    pub sanitize: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            edge_policy: EdgePolicy::default(),
            sanitize: DEFAULT_SANITIZE,
        }
    }
}

impl CompileOptions {
    /// Creates a new set of options.
    #[must_use]
    pub fn new(algorithm: Algorithm, edge_policy: EdgePolicy, sanitize: bool) -> Self {
        Self {
            algorithm,
            edge_policy,
            sanitize,
        }
    }

    /// Resolves an algorithm name and an edge policy name together.
    ///
    /// The algorithm is resolved first so that a bad policy is reported
    /// against the algorithm that rejected it.
    pub fn parse(algorithm: &str, edge_policy: &str) -> ValidationResult<Self> {
        let algorithm: Algorithm = algorithm.parse()?;
        let edge_policy = EdgePolicy::parse_name(edge_policy)
            .filter(|policy| algorithm.supports(*policy))
            .ok_or_else(|| {
                ValidationError::unsupported_edge_policy(
                    edge_policy,
                    format!("the {algorithm} algorithm"),
                )
            })?;
        Ok(Self {
            algorithm,
            edge_policy,
            sanitize: DEFAULT_SANITIZE,
        })
    }

    /// Sets the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the edge policy.
    #[must_use]
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Enables or disables numeral validation.
    #[must_use]
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Checks that the algorithm offers the edge policy.
    pub fn check(&self) -> ValidationResult<()> {
        if self.algorithm.supports(self.edge_policy) {
            Ok(())
        } else {
            Err(ValidationError::unsupported_edge_policy(
                self.edge_policy.name(),
                format!("the {} algorithm", self.algorithm),
            ))
        }
    }
}
