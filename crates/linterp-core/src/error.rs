//! Error types for curve compilation and evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized Result type for curve construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A specialized Result type for curve evaluation.
pub type EvalResult<T> = Result<T, DomainError>;

/// Errors that can occur while compiling a curve.
///
/// Every variant is fatal to construction: no partially built evaluator
/// is ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Domain and range have different lengths.
    #[error("Length mismatch: domain has {domain} values, range has {range}")]
    LengthMismatch {
        /// Number of domain values.
        domain: usize,
        /// Number of range values.
        range: usize,
    },

    /// Too few points to form a single interval.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// A value does not look like a decimal numeral.
    #[error("Value '{0}' is not a number")]
    NotANumber(String),

    /// A domain value is strictly less than its predecessor.
    #[error("Input domain must be sorted in non-decreasing order: {value} at index {index} follows {previous}")]
    UnsortedDomain {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
        /// The value before it.
        previous: f64,
    },

    /// The requested interpolation algorithm does not exist.
    #[error("Unknown interpolation algorithm: '{0}'")]
    UnknownAlgorithm(String),

    /// The edge policy is unknown or not offered by the chosen algorithm.
    #[error("Edge policy '{policy}' is not supported by {algorithm}")]
    UnsupportedEdgePolicy {
        /// The requested policy name.
        policy: String,
        /// Description of the algorithm that rejected it.
        algorithm: String,
    },
}

impl ValidationError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Creates a not-a-number error from the offending value's text.
    #[must_use]
    pub fn not_a_number(value: impl Into<String>) -> Self {
        Self::NotANumber(value.into())
    }

    /// Creates an unsupported edge policy error.
    #[must_use]
    pub fn unsupported_edge_policy(policy: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self::UnsupportedEdgePolicy {
            policy: policy.into(),
            algorithm: algorithm.into(),
        }
    }
}

/// Which end of the sampled domain was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundSide {
    /// Input below the smallest domain value.
    Low,
    /// Input above the largest domain value.
    High,
}

impl BoundSide {
    /// The comparison symbol used in error messages.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Low => '<',
            Self::High => '>',
        }
    }
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::High => f.write_str("high"),
        }
    }
}

/// Errors raised while evaluating a compiled curve.
///
/// Only reachable under the `die` edge policy.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The input fell outside the sampled domain.
    #[error("Input {x} is out of bounds ({}{bound})", .side.symbol())]
    OutOfBounds {
        /// The violated side.
        side: BoundSide,
        /// The query point.
        x: f64,
        /// The domain bound that was crossed.
        bound: f64,
    },
}

impl DomainError {
    /// Creates an out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(side: BoundSide, x: f64, bound: f64) -> Self {
        Self::OutOfBounds { side, x, bound }
    }

    /// The violated side.
    #[must_use]
    pub fn side(&self) -> BoundSide {
        match self {
            Self::OutOfBounds { side, .. } => *side,
        }
    }

    /// The violated bound.
    #[must_use]
    pub fn bound(&self) -> f64 {
        match self {
            Self::OutOfBounds { bound, .. } => *bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::not_a_number("abc");
        assert!(err.to_string().to_lowercase().contains("not a number"));

        let err = ValidationError::UnsortedDomain {
            index: 2,
            value: 1.0,
            previous: 3.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("domain"));
        assert!(msg.contains("sorted"));
    }

    #[test]
    fn test_domain_error_display() {
        let low = DomainError::out_of_bounds(BoundSide::Low, 4.5, 5.0);
        assert_eq!(low.to_string(), "Input 4.5 is out of bounds (<5)");

        let high = DomainError::out_of_bounds(BoundSide::High, 6.5, 6.0);
        assert_eq!(high.to_string(), "Input 6.5 is out of bounds (>6)");
        assert_eq!(high.side(), BoundSide::High);
        assert_eq!(high.bound(), 6.0);
    }
}
