//! Syslog PRI decoding: facility and severity codes and names.

use crate::model::{GrammarKind, Record};

/// Syslog severity names (RFC 5424 §6.2.1)
pub const SEVERITIES: [&str; 8] = [
    "emergency", "alert", "critical", "error",
    "warning", "notice", "info", "debug",
];

/// Syslog facility names (RFC 5424 §6.2.1)
pub const FACILITIES: [&str; 24] = [
    "kern", "user", "mail", "daemon", "auth", "syslog", "lpr", "news",
    "uucp", "cron", "authpriv", "ftp", "ntp", "audit", "alert2", "clock",
    "local0", "local1", "local2", "local3", "local4", "local5", "local6", "local7",
];

/// Facility/severity pair decoded from a numeric PRI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    pub facility: u8,
    pub severity: u8,
}

impl Priority {
    pub fn from_pri(pri: u32) -> Self {
        Self {
            facility: (pri >> 3) as u8,
            severity: (pri & 0x07) as u8,
        }
    }

    pub fn severity_name(&self) -> Option<&'static str> {
        SEVERITIES.get(self.severity as usize).copied()
    }

    pub fn facility_name(&self) -> Option<&'static str> {
        FACILITIES.get(self.facility as usize).copied()
    }
}

/// Severity code of a decoded record, sourced per grammar.
///
/// ASA and the IOS-family grammars carry the severity digit directly in
/// the message body; the others derive it from PRI. `None` when the
/// relevant field is absent or non-numeric.
pub fn record_severity(kind: GrammarKind, record: &Record) -> Option<u8> {
    match kind {
        GrammarKind::CiscoAsa => record.get("SEVERITY_LEVEL")?.parse().ok(),
        GrammarKind::CiscoIos | GrammarKind::CiscoNxos => record.get("SEVERITY")?.parse().ok(),
        GrammarKind::Rfc3164Cisco | GrammarKind::Rfc5424 => {
            let pri: u32 = record.get("PRI")?.parse().ok()?;
            Some(Priority::from_pri(pri).severity)
        }
    }
}

/// Severity name for a decoded record, if a valid code is present.
pub fn record_severity_name(kind: GrammarKind, record: &Record) -> Option<&'static str> {
    let code = record_severity(kind, record)?;
    SEVERITIES.get(code as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FormatRegistry;

    fn decode_one(line: &str) -> (GrammarKind, Record) {
        let registry = FormatRegistry::new();
        for grammar in registry.all_grammars() {
            if let Some(record) = grammar.decode_line(line) {
                return (grammar.kind(), record);
            }
        }
        panic!("no grammar decoded: {line}");
    }

    #[test]
    fn pri_splits_into_facility_and_severity() {
        // 34 = auth.critical
        let p = Priority::from_pri(34);
        assert_eq!(p.facility, 4);
        assert_eq!(p.severity, 2);
        assert_eq!(p.facility_name(), Some("auth"));
        assert_eq!(p.severity_name(), Some("critical"));

        // 165 = local4.notice
        let p = Priority::from_pri(165);
        assert_eq!(p.facility_name(), Some("local4"));
        assert_eq!(p.severity_name(), Some("notice"));
    }

    #[test]
    fn out_of_range_facility_has_no_name() {
        let p = Priority::from_pri(255);
        assert_eq!(p.facility, 31);
        assert_eq!(p.facility_name(), None);
        // Severity is masked to 3 bits, so it always names.
        assert!(p.severity_name().is_some());
    }

    #[test]
    fn asa_severity_comes_from_the_message_body() {
        let (kind, record) = decode_one("%ASA-4-106023: Deny tcp src outside");
        assert_eq!(record_severity(kind, &record), Some(4));
        assert_eq!(record_severity_name(kind, &record), Some("warning"));
    }

    #[test]
    fn ios_severity_comes_from_the_message_body() {
        let (kind, record) =
            decode_one("<189>: %LINK-3-UPDOWN: Interface Gi0/1, changed state to down");
        assert_eq!(record_severity(kind, &record), Some(3));
        assert_eq!(record_severity_name(kind, &record), Some("error"));
    }

    #[test]
    fn rfc5424_severity_derives_from_pri() {
        let (kind, record) =
            decode_one("<34>1 2023-10-11T22:14:15.003Z mymachine su - ID47 - event");
        // 34 & 7 = 2
        assert_eq!(record_severity(kind, &record), Some(2));
        assert_eq!(record_severity_name(kind, &record), Some("critical"));
    }
}
