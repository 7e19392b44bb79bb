//! The ordered, immutable catalog of supported log grammars.

use regex::Regex;

use crate::formats;
use crate::model::{GrammarKind, Record};

/// One known log-line shape: a name, the ordered output fields, and the
/// anchored pattern that tests a line and yields its captures.
///
/// Constructed once as part of the registry and never mutated; `Regex`
/// is `Send + Sync`, so specs can be read from any thread.
#[derive(Debug)]
pub struct GrammarSpec {
    kind: GrammarKind,
    name: &'static str,
    field_names: &'static [&'static str],
    matcher: Regex,
}

impl GrammarSpec {
    pub(crate) fn new(
        kind: GrammarKind,
        name: &'static str,
        field_names: &'static [&'static str],
        pattern: &str,
    ) -> Self {
        // Patterns are fixed at compile time; a failure here is a
        // programmer error, not an input error.
        let matcher = Regex::new(pattern).expect("grammar pattern must compile");
        Self {
            kind,
            name,
            field_names,
            matcher,
        }
    }

    pub fn kind(&self) -> GrammarKind {
        self.kind
    }

    /// Human-readable grammar name, e.g. "RFC 5424 Format".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Output field identifiers, in column order.
    pub fn field_names(&self) -> &'static [&'static str] {
        self.field_names
    }

    /// Test a line without building a record.
    pub fn matches(&self, line: &str) -> bool {
        self.matcher.is_match(line)
    }

    /// Apply this grammar to one line. `None` means the line does not
    /// belong to this grammar; it never signals an error.
    pub fn decode_line(&self, line: &str) -> Option<Record> {
        let caps = self.matcher.captures(line)?;
        let record = match self.kind {
            GrammarKind::Rfc3164Cisco => formats::rfc3164::decode(&caps),
            GrammarKind::CiscoIos => formats::cisco_ios::decode(&caps),
            GrammarKind::CiscoAsa => formats::cisco_asa::decode(&caps),
            GrammarKind::CiscoNxos => formats::cisco_nxos::decode(&caps),
            GrammarKind::Rfc5424 => formats::rfc5424::decode(&caps),
        };
        debug_assert_eq!(record.len(), self.field_names.len());
        Some(record)
    }
}

/// Ordered, read-only list of every supported grammar.
///
/// Built once, passed explicitly into detect/decode calls, and safe to
/// share across concurrent callers without locking.
#[derive(Debug)]
pub struct FormatRegistry {
    grammars: Vec<GrammarSpec>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        let grammars = vec![
            // Order matters! More specific, extension-bearing grammars
            // first so a Cisco-flavoured RFC 3164 line is never claimed
            // by a more generic shape.
            formats::rfc3164::spec(),
            formats::cisco_ios::spec(),
            formats::cisco_asa::spec(),
            formats::cisco_nxos::spec(),
            formats::rfc5424::spec(),
        ];

        Self { grammars }
    }

    /// All registered grammars, highest priority first.
    pub fn all_grammars(&self) -> &[GrammarSpec] {
        &self.grammars
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
