//! # Linterp Core
//!
//! Compiles a finite set of sorted `(x, y)` samples into an immutable,
//! fast piecewise-linear evaluator.
//!
//! All slope/intercept arithmetic happens once, at compile time. Each
//! evaluation then costs `O(log n)` comparisons plus one multiply-add.
//!
//! ## Pipeline
//!
//! 1. **Validation** ([`validate`]): lengths, point count, numerals, sortedness
//! 2. **Segments** ([`segment`]): one linear segment per non-zero-width interval
//! 3. **Edges** ([`edge`]): clamp, extrapolate, undef or die outside the domain
//! 4. **Tree** ([`tree`]): pairwise merge into a balanced decision tree
//! 5. **Evaluation** ([`CompiledInterpolation::evaluate`])
//!
//! ## Example
//!
//! ```rust
//! use linterp_core::prelude::*;
//!
//! let curve = CompiledInterpolation::from_points(
//!     &[(0.0, 0.0), (1.0, 0.5), (1.0, 1.5), (2.0, 2.0)],
//!     CompileOptions::default(),
//! )
//! .unwrap();
//!
//! // At a discontinuity the right-hand value wins.
//! assert_eq!(curve.evaluate(1.0).unwrap(), Some(1.5));
//! assert_eq!(curve.evaluate(5.0).unwrap(), Some(2.0));
//! ```
//!
//! Compiled curves are read-only and `Send + Sync`; share them across threads
//! behind an `Arc` or plain reference.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

mod algorithm;
pub mod compiled;
pub mod edge;
pub mod error;
pub mod options;
pub mod segment;
pub mod tree;
pub mod validate;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compiled::{CompiledInterpolation, InterpolationBuilder};
    pub use crate::error::{BoundSide, DomainError, EvalResult, ValidationError, ValidationResult};
    pub use crate::options::{Algorithm, CompileOptions, EdgePolicy};
    pub use crate::segment::{Beyond, Segment, SegmentKind};
    pub use crate::tree::DecisionNode;
    pub use crate::validate::RawValue;
}

pub use compiled::{CompiledInterpolation, InterpolationBuilder};
pub use error::{BoundSide, DomainError, EvalResult, ValidationError, ValidationResult};
pub use options::{Algorithm, CompileOptions, EdgePolicy};
pub use segment::{Beyond, Segment, SegmentKind};
pub use tree::DecisionNode;
pub use validate::RawValue;
