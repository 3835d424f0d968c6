//! Output formatting utilities.

use std::fmt;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one compact JSON value per line.
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// A curve value that may be undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurveValue(pub Option<f64>);

impl fmt::Display for CurveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(y) => write!(f, "{}", y),
            None => f.write_str("undef"),
        }
    }
}

/// One evaluated input.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EvalRow {
    #[tabled(rename = "x")]
    pub x: f64,
    #[tabled(rename = "y")]
    pub y: CurveValue,
}

impl EvalRow {
    /// Creates a row.
    pub fn new(x: f64, y: Option<f64>) -> Self {
        Self {
            x,
            y: CurveValue(y),
        }
    }
}

/// Prints evaluated rows; minimal output prints only the y values.
pub fn print_rows(rows: &[EvalRow], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Minimal {
        for row in rows {
            println!("{}", row.y);
        }
        return Ok(());
    }
    print_output(rows, format)
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_value_display() {
        assert_eq!(CurveValue(Some(1.5)).to_string(), "1.5");
        assert_eq!(CurveValue(None).to_string(), "undef");
    }

    #[test]
    fn test_curve_value_json() {
        let row = EvalRow::new(2.0, None);
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"x":2.0,"y":null}"#);
    }
}
