//! Point validation and normalization.
//!
//! Turns caller-supplied domain/range values into owned `f64` sequences,
//! rejecting anything that cannot describe a piecewise function: fewer than
//! two points, mismatched lengths, a decreasing domain, or (when sanitizing)
//! values that are not plain decimal numerals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Minimum number of points that still forms one interval.
pub const MIN_POINTS: usize = 2;

/// A domain or range value as supplied by the caller.
///
/// Numbers arrive already parsed; text arrives from config files, command
/// lines or other loosely typed sources and is checked against the numeral
/// pattern when sanitizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// An already-parsed number.
    Number(f64),
    /// Unparsed text.
    Text(String),
}

impl RawValue {
    /// Converts to `f64`, checking the numeral pattern first.
    pub fn to_checked(&self) -> ValidationResult<f64> {
        match self {
            // Display of NaN and infinities never matches the numeral pattern.
            Self::Number(value) if value.is_finite() => Ok(*value),
            Self::Number(value) => Err(ValidationError::not_a_number(value.to_string())),
            Self::Text(text) if is_numeral(text) => text
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ValidationError::not_a_number(text.as_str())),
            Self::Text(text) => Err(ValidationError::not_a_number(text.as_str())),
        }
    }

    /// Converts to `f64` without rejecting anything.
    ///
    /// Text is trimmed and parsed as `f64`. Anything that does not parse to a
    /// finite value becomes NaN, which never compares below its neighbours.
    #[must_use]
    pub fn to_unchecked(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Returns true if `text` is a signed decimal numeral with optional
/// fraction and exponent: `[+-]? (d+ (. d*)? | . d+) ([eE] [+-]? d+)?`.
#[must_use]
pub fn is_numeral(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let digits = |pos: &mut usize| {
        let start = *pos;
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
        *pos - start
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut mantissa = digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa += digits(&mut pos);
    }
    if mantissa == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(&mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}

/// Validated, normalized point data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPoints {
    /// Non-decreasing x values.
    pub domain: Vec<f64>,
    /// y values, parallel to `domain`.
    pub range: Vec<f64>,
}

/// Validates domain and range, returning new owned sequences.
///
/// Checks run in order: lengths, point count, numerals (only when
/// `sanitize` is set; domain first, then range), then sortedness.
pub fn validate(
    domain: &[RawValue],
    range: &[RawValue],
    sanitize: bool,
) -> ValidationResult<ValidatedPoints> {
    if domain.len() != range.len() {
        return Err(ValidationError::LengthMismatch {
            domain: domain.len(),
            range: range.len(),
        });
    }
    if domain.len() < MIN_POINTS {
        return Err(ValidationError::insufficient_points(MIN_POINTS, domain.len()));
    }

    let (domain, range) = if sanitize {
        (normalize_checked(domain)?, normalize_checked(range)?)
    } else {
        (
            domain.iter().map(RawValue::to_unchecked).collect(),
            range.iter().map(RawValue::to_unchecked).collect(),
        )
    };

    check_sorted(&domain)?;

    tracing::trace!(points = domain.len(), sanitize, "validated points");
    Ok(ValidatedPoints { domain, range })
}

fn normalize_checked(values: &[RawValue]) -> ValidationResult<Vec<f64>> {
    values.iter().map(RawValue::to_checked).collect()
}

/// Fails on the first value strictly less than its predecessor.
pub fn check_sorted(domain: &[f64]) -> ValidationResult<()> {
    for (i, pair) in domain.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(ValidationError::UnsortedDomain {
                index: i + 1,
                value: pair[1],
                previous: pair[0],
            });
        }
    }
    Ok(())
}
