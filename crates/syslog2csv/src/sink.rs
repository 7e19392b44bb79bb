//! Tabular sinks: CSV file, JSON file, console table.
//!
//! The header row is exactly the winning grammar's field names, in
//! registry order; a field the record legitimately lacks renders as the
//! empty string.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use normalizer::DecodeResult;

/// Maximum rendered cell width for the console table.
const MAX_CELL_WIDTH: usize = 48;

/// Write the decode result as a delimited file with RFC 4180 quoting.
pub fn write_csv(path: &Path, result: &DecodeResult<'_>, delimiter: char) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let field_names = result.grammar.field_names();

    let header: Vec<String> = field_names
        .iter()
        .map(|name| quote_field(name, delimiter))
        .collect();
    writeln!(out, "{}", header.join(&delimiter.to_string()))?;

    for record in &result.records {
        let row: Vec<String> = field_names
            .iter()
            .map(|name| quote_field(record.get(name).unwrap_or(""), delimiter))
            .collect();
        writeln!(out, "{}", row.join(&delimiter.to_string()))?;
    }

    out.flush()?;
    Ok(())
}

/// Write the decode result as a JSON document: grammar, records as
/// objects, and the unparsed lines (never silently dropped).
pub fn write_json(path: &Path, result: &DecodeResult<'_>) -> Result<()> {
    let document = serde_json::json!({
        "grammar": {
            "kind": result.grammar.kind(),
            "name": result.grammar.name(),
            "fields": result.grammar.field_names(),
        },
        "records": result.records,
        "unparsed_lines": result.unparsed_lines,
    });

    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    out.flush()?;
    Ok(())
}

/// Render the decode result as an aligned table on stdout.
pub fn print_table(result: &DecodeResult<'_>) {
    let field_names = result.grammar.field_names();

    let mut widths: Vec<usize> = field_names.iter().map(|n| n.len()).collect();
    for record in &result.records {
        for (i, name) in field_names.iter().enumerate() {
            let len = clip(record.get(name).unwrap_or("")).chars().count();
            widths[i] = widths[i].max(len);
        }
    }

    let header: Vec<String> = field_names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:<width$}", name, width = widths[i]))
        .collect();
    println!("{}", header.join("  "));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );

    for record in &result.records {
        let row: Vec<String> = field_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    "{:<width$}",
                    clip(record.get(name).unwrap_or("")),
                    width = widths[i]
                )
            })
            .collect();
        println!("{}", row.join("  "));
    }
}

/// Quote a CSV field per RFC 4180: wrap in double quotes when the value
/// contains the delimiter, a quote, or a line break, doubling any
/// embedded quotes.
fn quote_field(value: &str, delimiter: char) -> String {
    let needs_quoting =
        value.contains(delimiter) || value.contains('"') || value.contains('\n') || value.contains('\r');
    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn clip(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        value.to_string()
    } else {
        let head: String = value.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{head}...")
    }
}
