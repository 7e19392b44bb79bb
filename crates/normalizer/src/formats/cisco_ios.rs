//! Cisco IOS system messages: `<PRI>: %FACILITY-SEVERITY-MNEMONIC: DESCRIPTION`.

use regex::Captures;

use crate::model::{GrammarKind, Record};
use crate::registry::GrammarSpec;

pub const NAME: &str = "Cisco IOS Format";

pub const FIELD_NAMES: &[&str] = &["PRI", "FACILITY", "SEVERITY", "MNEMONIC", "DESCRIPTION"];

const PATTERN: &str = r"^<(\d+)>:\s*%(\w+)-(\d+)-(\w+):\s*(.*)$";

pub fn spec() -> GrammarSpec {
    GrammarSpec::new(GrammarKind::CiscoIos, NAME, FIELD_NAMES, PATTERN)
}

pub(crate) fn decode(caps: &Captures<'_>) -> Record {
    super::zip_captures(FIELD_NAMES, caps)
}
