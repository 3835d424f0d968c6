//! Tree command implementation.
//!
//! Shows the compiled decision tree.

use anyhow::Result;
use clap::Args;
use linterp_core::{CompileOptions, Segment};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::CurveArgs;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the tree command.
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub curve: CurveArgs,
}

#[derive(Serialize)]
struct TreeReport<'a> {
    algorithm: String,
    edge_policy: String,
    points: usize,
    depth: usize,
    segments: Vec<&'a Segment>,
    render: &'a str,
}

/// Executes the tree command.
pub fn execute(args: TreeArgs, defaults: CompileOptions, format: OutputFormat) -> Result<()> {
    let curve = args.curve.compile(defaults)?;
    let options = curve.options();

    match format {
        OutputFormat::Json => {
            let report = TreeReport {
                algorithm: options.algorithm.to_string(),
                edge_policy: options.edge_policy.to_string(),
                points: curve.domain().len(),
                depth: curve.depth(),
                segments: curve.segments(),
                render: curve.render(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Minimal => print!("{}", curve.render()),
        OutputFormat::Table | OutputFormat::Csv => {
            let summary = vec![
                KeyValue::new("Algorithm", options.algorithm),
                KeyValue::new("Edge policy", options.edge_policy),
                KeyValue::new("Points", curve.domain().len()),
                KeyValue::new("Segments", curve.segment_count()),
                KeyValue::new("Depth", curve.depth()),
            ];
            print_output(&summary, format)?;
            if format == OutputFormat::Table {
                print_header("Decision tree");
                print!("{}", curve.render());
            }
        }
    }

    Ok(())
}
