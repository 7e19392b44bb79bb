//! RFC 5424 structured syslog:
//! `<PRI>1 TIMESTAMP HOSTNAME APP_NAME PROCID MSGID [STRUCTURED_DATA ]MSG`.
//!
//! The trailing blob (structured data plus free-text message) is split
//! on the first space, not parsed bracket-aware. A quoted SD-PARAM
//! value containing a space WILL mis-split; that behaviour is part of
//! the compatibility contract and must not be "fixed" here.

use regex::Captures;

use crate::model::{GrammarKind, Record};
use crate::registry::GrammarSpec;

pub const NAME: &str = "RFC 5424 Format";

pub const FIELD_NAMES: &[&str] = &[
    "PRI",
    "VERSION",
    "TIMESTAMP",
    "HOSTNAME",
    "APP_NAME",
    "PROCID",
    "MSGID",
    "STRUCTURED_DATA",
    "MSG",
];

// Seven captures; VERSION is the fixed literal "1" and STRUCTURED_DATA /
// MSG come out of the first-space split of capture 7.
const PATTERN: &str = r"^<(\d+)>1\s+(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d{1,6})?Z)\s+([\w.-]+)\s+([\w.-]+)\s+(\S+)\s+(\S+)\s*(.*)$";

pub fn spec() -> GrammarSpec {
    GrammarSpec::new(GrammarKind::Rfc5424, NAME, FIELD_NAMES, PATTERN)
}

pub(crate) fn decode(caps: &Captures<'_>) -> Record {
    let mut record = Record::with_capacity(FIELD_NAMES.len());
    record.push("PRI", super::capture(caps, 1));
    record.push("VERSION", "1".to_string());
    record.push("TIMESTAMP", super::capture(caps, 2));
    record.push("HOSTNAME", super::capture(caps, 3));
    record.push("APP_NAME", super::capture(caps, 4));
    record.push("PROCID", super::capture(caps, 5));
    record.push("MSGID", super::capture(caps, 6));

    let blob = super::capture(caps, 7);
    let (structured_data, msg) = split_structured_data(&blob);
    record.push("STRUCTURED_DATA", structured_data);
    record.push("MSG", msg);
    record
}

/// First-space split of the trailing blob.
///
/// Empty blob → ("-", ""); no space → (blob, "").
fn split_structured_data(blob: &str) -> (String, String) {
    if blob.is_empty() {
        return ("-".to_string(), String::new());
    }
    match blob.split_once(' ') {
        Some((sd, msg)) => (sd.to_string(), msg.to_string()),
        None => (blob.to_string(), String::new()),
    }
}
