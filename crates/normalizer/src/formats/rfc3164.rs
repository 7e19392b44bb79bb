//! RFC 3164 with Cisco extensions: `<PRI>Mon DD HH:MM:SS HOSTNAME %MSG`.
//!
//! Listed first in the registry: the `%`-prefixed message body marks
//! Cisco-flavoured traffic that a more generic grammar must not claim.

use regex::Captures;

use crate::model::{GrammarKind, Record};
use crate::registry::GrammarSpec;

pub const NAME: &str = "RFC 3164 with Cisco Extensions";

pub const FIELD_NAMES: &[&str] = &["PRI", "TIMESTAMP", "HOSTNAME", "MSG"];

// Timestamp token shape is the classic "Mon DD HH:MM:SS"; single-digit
// days may be padded with an extra space.
const PATTERN: &str = r"^<(\d+)>(\w{3}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2})\s+([\w.-]+)\s+(%.*)$";

pub fn spec() -> GrammarSpec {
    GrammarSpec::new(GrammarKind::Rfc3164Cisco, NAME, FIELD_NAMES, PATTERN)
}

pub(crate) fn decode(caps: &Captures<'_>) -> Record {
    super::zip_captures(FIELD_NAMES, caps)
}
