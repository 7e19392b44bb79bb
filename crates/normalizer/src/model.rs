use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::registry::GrammarSpec;
use crate::serde_utils::serialize_fields_as_map;

/// The closed set of log-line grammars the engine can decode.
///
/// Each variant carries its own field list and capture post-processing
/// (see `formats/`), so adding a grammar is a compile-checked change,
/// not a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarKind {
    /// RFC 3164 with a Cisco `%...` message body
    Rfc3164Cisco,
    /// Cisco IOS system message format
    CiscoIos,
    /// Cisco ASA firewall format (no `<PRI>` prefix)
    CiscoAsa,
    /// Cisco NX-OS format (fractional-second timestamp, UTC marker)
    CiscoNxos,
    /// RFC 5424 structured syslog
    Rfc5424,
}

impl GrammarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarKind::Rfc3164Cisco => "rfc3164_cisco",
            GrammarKind::CiscoIos => "cisco_ios",
            GrammarKind::CiscoAsa => "cisco_asa",
            GrammarKind::CiscoNxos => "cisco_nxos",
            GrammarKind::Rfc5424 => "rfc5424",
        }
    }
}

/// A decoded line: ordered field-name → value pairs.
///
/// Field order matches the owning grammar's `field_names`, which is the
/// output column contract, so the pairs stay in a `Vec` rather than a
/// hash map. Serializes as a JSON object.
#[derive(Debug, Clone)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fields_as_map(&self.fields, serializer)
    }
}

impl Record {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Keys are grammar field names, fixed at compile time.
    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        self.fields.push((name, value));
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field pairs in grammar order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One batch run: the grammar that won detection, every record decoded
/// under it, and the lines that failed to decode.
///
/// Created fresh per `decode` call and borrowed from the registry that
/// produced it; the core never persists these.
#[derive(Debug)]
pub struct DecodeResult<'g> {
    /// The grammar selected for the whole batch.
    pub grammar: &'g GrammarSpec,
    /// Successfully decoded records, in input order.
    pub records: Vec<Record>,
    /// Lines that did not match the selected grammar, in input order.
    pub unparsed_lines: Vec<String>,
}

impl DecodeResult<'_> {
    pub fn unparsed_count(&self) -> usize {
        self.unparsed_lines.len()
    }

    pub fn total_lines(&self) -> usize {
        self.records.len() + self.unparsed_lines.len()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no input lines supplied")]
    EmptyInput,

    #[error("no registered grammar matched any of the first {0} line(s)")]
    FormatNotDetected(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lookup_and_order() {
        let mut record = Record::with_capacity(2);
        record.push("PRI", "189".to_string());
        record.push("MSG", "hello".to_string());

        assert_eq!(record.get("PRI"), Some("189"));
        assert_eq!(record.get("MSG"), Some("hello"));
        assert_eq!(record.get("HOSTNAME"), None);

        let names: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["PRI", "MSG"]);
    }

    #[test]
    fn record_serializes_as_object() {
        let mut record = Record::with_capacity(2);
        record.push("SEVERITY", "3".to_string());
        record.push("MNEMONIC", "UPDOWN".to_string());

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"SEVERITY":"3","MNEMONIC":"UPDOWN"}"#);
    }

    #[test]
    fn error_messages_are_actionable() {
        assert_eq!(
            DecodeError::EmptyInput.to_string(),
            "no input lines supplied"
        );
        assert!(DecodeError::FormatNotDetected(5)
            .to_string()
            .contains("first 5"));
    }
}
