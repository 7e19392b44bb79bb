//! Individual grammar definitions: pattern, field list, and the
//! capture → record decode step for each supported log-line shape.

pub mod cisco_asa;
pub mod cisco_ios;
pub mod cisco_nxos;
pub mod rfc3164;
pub mod rfc5424;

use regex::Captures;

use crate::model::Record;

/// Direct one-to-one zip of field names onto capture groups 1..=N.
///
/// Grammars with post-processing (ASA's literal field, RFC 5424's
/// structured-data split) build their records by hand instead.
pub(crate) fn zip_captures(field_names: &'static [&'static str], caps: &Captures<'_>) -> Record {
    let mut record = Record::with_capacity(field_names.len());
    for (i, name) in field_names.iter().enumerate() {
        let value = caps
            .get(i + 1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        record.push(name, value);
    }
    record
}

/// Capture group as an owned string, empty if the group did not participate.
pub(crate) fn capture(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
