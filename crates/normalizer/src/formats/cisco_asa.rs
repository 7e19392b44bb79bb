//! Cisco ASA firewall messages: `%ASA-SEVERITY-SYSLOG_ID: MESSAGE`.
//!
//! The only grammar without a `<PRI>` prefix. Its first output field is
//! not a capture at all: it is always the literal "ASA".

use regex::Captures;

use crate::model::{GrammarKind, Record};
use crate::registry::GrammarSpec;

pub const NAME: &str = "Cisco ASA Format";

pub const FIELD_NAMES: &[&str] = &["ASA", "SEVERITY_LEVEL", "SYSLOG_ID", "LOG_MESSAGE"];

const PATTERN: &str = r"^%ASA-(\d+)-(\d+):\s*(.*)$";

pub fn spec() -> GrammarSpec {
    GrammarSpec::new(GrammarKind::CiscoAsa, NAME, FIELD_NAMES, PATTERN)
}

pub(crate) fn decode(caps: &Captures<'_>) -> Record {
    let mut record = Record::with_capacity(FIELD_NAMES.len());
    record.push("ASA", "ASA".to_string());
    record.push("SEVERITY_LEVEL", super::capture(caps, 1));
    record.push("SYSLOG_ID", super::capture(caps, 2));
    record.push("LOG_MESSAGE", super::capture(caps, 3));
    record
}
