//! Line source: file → ordered, newline-stripped lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;

/// Read a log capture into ordered lines.
///
/// Lines are delivered newline-stripped and trimmed; blank lines are
/// dropped here so they never reach the decoder as bogus unparsed
/// entries.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut lines = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    Ok(lines)
}
