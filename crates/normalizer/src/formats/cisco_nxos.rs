//! Cisco NX-OS messages:
//! `<PRI>:Mon DD HH:MM:SS.ffffff UTC: %FACILITY-SEVERITY-MNEMONIC: MESSAGE`.

use regex::Captures;

use crate::model::{GrammarKind, Record};
use crate::registry::GrammarSpec;

pub const NAME: &str = "Cisco NX-OS Format";

pub const FIELD_NAMES: &[&str] = &[
    "PRI",
    "TIMESTAMP_UTC",
    "FACILITY",
    "SEVERITY",
    "MNEMONIC",
    "MESSAGE",
];

// The fractional-second timestamp plus the "UTC" marker is what
// separates NX-OS lines from plain IOS ones. The captured timestamp
// excludes the marker itself.
const PATTERN: &str = r"^<(\d+)>:\s*(\w{3}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}\.\d{1,6})\s+UTC:\s*%(\w+)-(\d+)-(\w+):\s*(.*)$";

pub fn spec() -> GrammarSpec {
    GrammarSpec::new(GrammarKind::CiscoNxos, NAME, FIELD_NAMES, PATTERN)
}

pub(crate) fn decode(caps: &Captures<'_>) -> Record {
    super::zip_captures(FIELD_NAMES, caps)
}
