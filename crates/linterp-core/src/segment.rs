//! Curve segments and the linear segment builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoundSide, DomainError, EvalResult};

/// What a segment does past the exact endpoint it pins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Beyond {
    /// No value.
    Undefined,
    /// High-side bounds violation.
    OutOfBounds {
        /// The largest domain value.
        bound: f64,
    },
}

/// The evaluation rule of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentKind {
    /// `y = x * slope + intercept`.
    Linear {
        /// Rate of change.
        slope: f64,
        /// Value at `x = 0`.
        intercept: f64,
    },
    /// A fixed value.
    Constant {
        /// The value.
        value: f64,
    },
    /// No value.
    Undefined,
    /// Bounds violation.
    OutOfBounds {
        /// Which side was crossed.
        side: BoundSide,
        /// The crossed domain bound.
        bound: f64,
    },
    /// `value` exactly at `x`, otherwise `beyond`. Closes the domain under
    /// the `undef` and `die` policies.
    Endpoint {
        /// The pinned input.
        x: f64,
        /// The value at `x`.
        value: f64,
        /// Result for any other input.
        beyond: Beyond,
    },
}

/// One interval of a piecewise function.
///
/// A segment applies from `threshold` (inclusive) up to the next segment's
/// threshold (exclusive). Only the leftmost segment has no threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Lower edge of the interval; `None` catches everything below.
    pub threshold: Option<f64>,
    /// How the interval is evaluated.
    #[serde(flatten)]
    pub kind: SegmentKind,
}

impl Segment {
    /// Creates a linear segment.
    #[must_use]
    pub fn linear(threshold: Option<f64>, slope: f64, intercept: f64) -> Self {
        Self {
            threshold,
            kind: SegmentKind::Linear { slope, intercept },
        }
    }

    /// Creates a constant segment.
    #[must_use]
    pub fn constant(threshold: Option<f64>, value: f64) -> Self {
        Self {
            threshold,
            kind: SegmentKind::Constant { value },
        }
    }

    /// Creates a segment with no value.
    #[must_use]
    pub fn undefined(threshold: Option<f64>) -> Self {
        Self {
            threshold,
            kind: SegmentKind::Undefined,
        }
    }

    /// Creates a bounds-violation segment.
    #[must_use]
    pub fn out_of_bounds(threshold: Option<f64>, side: BoundSide, bound: f64) -> Self {
        Self {
            threshold,
            kind: SegmentKind::OutOfBounds { side, bound },
        }
    }

    /// Creates an endpoint segment starting at `x`.
    #[must_use]
    pub fn endpoint(x: f64, value: f64, beyond: Beyond) -> Self {
        Self {
            threshold: Some(x),
            kind: SegmentKind::Endpoint { x, value, beyond },
        }
    }

    /// Evaluates the segment at `x`, ignoring its threshold.
    #[inline]
    pub fn evaluate(&self, x: f64) -> EvalResult<Option<f64>> {
        match self.kind {
            SegmentKind::Linear { slope, intercept } => Ok(Some(x * slope + intercept)),
            SegmentKind::Constant { value } => Ok(Some(value)),
            SegmentKind::Undefined => Ok(None),
            SegmentKind::OutOfBounds { side, bound } => {
                Err(DomainError::out_of_bounds(side, x, bound))
            }
            SegmentKind::Endpoint { x: at, value, beyond } => {
                if x == at {
                    Ok(Some(value))
                } else {
                    match beyond {
                        Beyond::Undefined => Ok(None),
                        Beyond::OutOfBounds { bound } => {
                            Err(DomainError::out_of_bounds(BoundSide::High, x, bound))
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { slope, intercept } => write!(f, "x * {slope} + {intercept}"),
            Self::Constant { value } => write!(f, "{value}"),
            Self::Undefined => f.write_str("undef"),
            Self::OutOfBounds { side, bound } => {
                write!(f, "error(out of bounds {}{bound})", side.symbol())
            }
            Self::Endpoint { x, value, beyond } => {
                write!(f, "if x == {x} {{ {value} }} else {{ ")?;
                match beyond {
                    Beyond::Undefined => f.write_str("undef")?,
                    Beyond::OutOfBounds { bound } => write!(f, "error(out of bounds >{bound})")?,
                }
                f.write_str(" }")
            }
        }
    }
}

/// Builds one linear segment per non-zero-width interval.
///
/// Interval `[domain[i-1], domain[i])` yields a segment with threshold
/// `domain[i-1]`. Intervals where `domain[i] == domain[i-1]` are skipped,
/// so at a discontinuity the segment starting at that x wins.
///
/// Inputs must already be validated: equal lengths, non-decreasing domain.
#[must_use]
pub fn linear_segments(domain: &[f64], range: &[f64]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(domain.len().saturating_sub(1));

    for i in 1..domain.len().min(range.len()) {
        let (x0, x1) = (domain[i - 1], domain[i]);
        if x1 == x0 {
            continue;
        }
        let (y0, y1) = (range[i - 1], range[i]);

        let slope = (y1 - y0) / (x1 - x0);
        let intercept = y0 - x0 * slope;
        segments.push(Segment::linear(Some(x0), slope, intercept));
    }

    segments
}
