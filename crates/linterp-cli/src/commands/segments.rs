//! Segments command implementation.
//!
//! Lists compiled segments in ascending order, boundary segments included.

use anyhow::Result;
use clap::Args;
use linterp_core::{CompileOptions, Segment, SegmentKind};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::CurveArgs;
use crate::output::print_output;

/// Arguments for the segments command.
#[derive(Args, Debug)]
pub struct SegmentsArgs {
    #[command(flatten)]
    pub curve: CurveArgs,
}

/// One row of the segment listing.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SegmentRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Rule")]
    pub rule: String,
}

fn kind_name(kind: &SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Linear { .. } => "linear",
        SegmentKind::Constant { .. } => "constant",
        SegmentKind::Undefined => "undefined",
        SegmentKind::OutOfBounds { .. } => "out of bounds",
        SegmentKind::Endpoint { .. } => "endpoint",
    }
}

/// Builds listing rows; each segment ends where the next one starts.
pub fn rows(segments: &[&Segment]) -> Vec<SegmentRow> {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let from = segment
                .threshold
                .map_or_else(|| "-inf".to_string(), |x| x.to_string());
            let to = segments
                .get(i + 1)
                .and_then(|next| next.threshold)
                .map_or_else(|| "+inf".to_string(), |x| x.to_string());
            SegmentRow {
                index: i,
                from,
                to,
                kind: kind_name(&segment.kind).to_string(),
                rule: segment.kind.to_string(),
            }
        })
        .collect()
}

/// Executes the segments command.
pub fn execute(args: SegmentsArgs, defaults: CompileOptions, format: OutputFormat) -> Result<()> {
    let curve = args.curve.compile(defaults)?;
    print_output(&rows(&curve.segments()), format)
}
