//! End-of-run summary: winning grammar, counts, severity breakdown,
//! and time range. Unparsed lines are always reported.

use normalizer::priority::{self, SEVERITIES};
use normalizer::timestamp::{self, Stamp};
use normalizer::DecodeResult;
use tracing::warn;

/// Unparsed lines echoed verbatim before the rest are elided.
const UNPARSED_PREVIEW: usize = 5;

pub fn report(result: &DecodeResult<'_>) {
    println!();
    println!("Detected format : {}", result.grammar.name());
    println!(
        "Lines           : {} total, {} decoded, {} unparsed",
        result.total_lines(),
        result.records.len(),
        result.unparsed_count()
    );

    if let Some(breakdown) = severity_breakdown(result) {
        println!("Severity        : {breakdown}");
    }
    if let Some((first, last)) = time_range(result) {
        println!("Time range      : {first} .. {last}");
    }

    if !result.unparsed_lines.is_empty() {
        warn!(
            count = result.unparsed_count(),
            "some lines did not match the detected grammar"
        );
        for line in result.unparsed_lines.iter().take(UNPARSED_PREVIEW) {
            warn!(%line, "unparsed");
        }
        if result.unparsed_count() > UNPARSED_PREVIEW {
            warn!(
                elided = result.unparsed_count() - UNPARSED_PREVIEW,
                "further unparsed lines elided"
            );
        }
    }
}

/// Per-severity record counts in severity order, e.g.
/// `error=3 warning=5 notice=1`. `None` when no record carried a
/// recognizable severity.
fn severity_breakdown(result: &DecodeResult<'_>) -> Option<String> {
    let kind = result.grammar.kind();
    let mut counts = [0usize; SEVERITIES.len()];
    let mut seen = false;

    for record in &result.records {
        if let Some(code) = priority::record_severity(kind, record) {
            if let Some(slot) = counts.get_mut(code as usize) {
                *slot += 1;
                seen = true;
            }
        }
    }

    if !seen {
        return None;
    }

    let parts: Vec<String> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(code, count)| format!("{}={}", SEVERITIES[code], count))
        .collect();
    Some(parts.join(" "))
}

/// Earliest and latest parseable record timestamps, if the grammar
/// carries any.
fn time_range(result: &DecodeResult<'_>) -> Option<(Stamp, Stamp)> {
    let kind = result.grammar.kind();
    let mut stamps = result
        .records
        .iter()
        .filter_map(|r| timestamp::record_timestamp(kind, r));

    let first = stamps.next()?;
    let (min, max) = stamps.fold((first, first), |(min, max), s| {
        (min.min(s), max.max(s))
    });
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use normalizer::{decode, FormatRegistry};

    #[test]
    fn severity_breakdown_counts_in_order() {
        let lines = vec![
            "<189>: %LINK-3-UPDOWN: Interface Gi0/1, changed state to down",
            "<188>: %LINEPROTO-4-UPDOWN: Line protocol on Interface Gi0/1, changed state to down",
            "<189>: %LINK-3-UPDOWN: Interface Gi0/2, changed state to down",
        ];
        let registry = FormatRegistry::new();
        let result = decode(&lines, &registry).unwrap();

        assert_eq!(
            severity_breakdown(&result).unwrap(),
            "error=2 warning=1"
        );
    }

    #[test]
    fn no_breakdown_without_severities() {
        let registry = FormatRegistry::new();
        let lines = vec!["<189>: %LINK-3-UPDOWN: up"];
        let mut result = decode(&lines, &registry).unwrap();
        result.records.clear();
        assert_eq!(severity_breakdown(&result), None);
    }

    #[test]
    fn time_range_spans_batch() {
        let lines = vec![
            "<34>1 2023-10-11T22:14:16.003Z mymachine su - ID47 - second",
            "<34>1 2023-10-11T22:14:15.003Z mymachine su - ID47 - first",
            "<34>1 2023-10-11T22:14:17.003Z mymachine su - ID47 - third",
        ];
        let registry = FormatRegistry::new();
        let result = decode(&lines, &registry).unwrap();

        let (first, last) = time_range(&result).unwrap();
        assert_eq!(first.to_string(), "2023-10-11T22:14:15.003+00:00");
        assert_eq!(last.to_string(), "2023-10-11T22:14:17.003+00:00");
    }

    #[test]
    fn no_time_range_for_ios() {
        let lines = vec!["<189>: %LINK-3-UPDOWN: Interface Gi0/1, changed state to down"];
        let registry = FormatRegistry::new();
        let result = decode(&lines, &registry).unwrap();
        assert_eq!(time_range(&result), None);
    }
}
