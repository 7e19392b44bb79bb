//! Batch detection and decoding: pick one grammar from the head of the
//! batch, then decode every line against that grammar only.

use tracing::{debug, trace};

use crate::model::{DecodeError, DecodeResult};
use crate::registry::{FormatRegistry, GrammarSpec};
use crate::DETECTION_SAMPLE_SIZE;

/// Select the grammar governing a batch.
///
/// At most the first [`DETECTION_SAMPLE_SIZE`] lines are examined. For
/// each examined line, grammars are tried in registry priority order
/// and the first (line, grammar) match wins immediately; there is no
/// scoring across candidates. Mixed-format batches are unsupported by
/// design: whatever wins here governs every line.
pub fn detect<'r, S: AsRef<str>>(
    lines: &[S],
    registry: &'r FormatRegistry,
) -> Result<&'r GrammarSpec, DecodeError> {
    if lines.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let sample = &lines[..lines.len().min(DETECTION_SAMPLE_SIZE)];
    for (index, line) in sample.iter().enumerate() {
        let line = line.as_ref().trim();
        for grammar in registry.all_grammars() {
            if grammar.matches(line) {
                debug!(grammar = grammar.name(), line = index, "format detected");
                return Ok(grammar);
            }
        }
        trace!(line = index, "no grammar matched sample line");
    }

    Err(DecodeError::FormatNotDetected(sample.len()))
}

/// Decode a whole batch.
///
/// Detection runs once over the batch prefix; every line is then
/// decoded against the selected grammar. Lines that fail to decode are
/// collected as unparsed, never dropped and never fatal. The result is
/// deterministic for a given input.
pub fn decode<'r, S: AsRef<str>>(
    lines: &[S],
    registry: &'r FormatRegistry,
) -> Result<DecodeResult<'r>, DecodeError> {
    let grammar = detect(lines, registry)?;

    let mut records = Vec::with_capacity(lines.len());
    let mut unparsed_lines = Vec::new();

    for raw in lines {
        let line = raw.as_ref().trim();
        match grammar.decode_line(line) {
            Some(record) => records.push(record),
            None => unparsed_lines.push(line.to_string()),
        }
    }

    debug!(
        grammar = grammar.name(),
        decoded = records.len(),
        unparsed = unparsed_lines.len(),
        "batch decode complete"
    );

    Ok(DecodeResult {
        grammar,
        records,
        unparsed_lines,
    })
}
