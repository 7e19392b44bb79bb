//! Per-grammar timestamp parsing for decoded records.
//!
//! The decoded string field is authoritative; this module only derives
//! a comparable value for reporting. Parse failure is `None`, never an
//! error.

use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};

use crate::model::{GrammarKind, Record};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A record timestamp in a comparable form.
///
/// RFC 3164-family stamps carry no year, so they stay a year-less
/// wall-clock value rather than being pinned to an arbitrary year.
/// All stamps within one batch come from the same grammar, so they are
/// mutually comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stamp {
    /// Year-less "Mon DD HH:MM:SS[.ffffff]" (RFC 3164 / NX-OS lines).
    Wallclock { month: u32, day: u32, time: NaiveTime },
    /// Full RFC 3339 instant (RFC 5424 lines).
    Instant(DateTime<Utc>),
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp::Wallclock { month, day, time } => {
                let name = MONTHS[(*month as usize).saturating_sub(1).min(11)];
                write!(f, "{name} {day:>2} {time}")
            }
            Stamp::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

/// Parse the timestamp field of a decoded record, per grammar.
///
/// IOS and ASA lines carry no timestamp at all and always yield `None`.
pub fn record_timestamp(kind: GrammarKind, record: &Record) -> Option<Stamp> {
    match kind {
        GrammarKind::Rfc3164Cisco => parse_wallclock(record.get("TIMESTAMP")?),
        GrammarKind::CiscoNxos => parse_wallclock(record.get("TIMESTAMP_UTC")?),
        GrammarKind::Rfc5424 => {
            let raw = record.get("TIMESTAMP")?;
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| Stamp::Instant(dt.with_timezone(&Utc)))
        }
        GrammarKind::CiscoIos | GrammarKind::CiscoAsa => None,
    }
}

/// Parse "Mon DD HH:MM:SS" with an optional fractional second.
fn parse_wallclock(text: &str) -> Option<Stamp> {
    let mut parts = text.split_whitespace();
    let month_token = parts.next()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let clock = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let month = MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month_token))? as u32
        + 1;
    if !(1..=31).contains(&day) {
        return None;
    }
    let time = NaiveTime::parse_from_str(clock, "%H:%M:%S%.f").ok()?;

    Some(Stamp::Wallclock { month, day, time })
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
    fn rfc3164_timestamp_parses_yearless() {
        let (kind, record) =
            decode_one("<189>Mar  1 18:46:11 gw-01 %SYS-5-CONFIG_I: Configured from console");
        let stamp = record_timestamp(kind, &record).unwrap();
        match stamp {
            Stamp::Wallclock { month, day, .. } => {
                assert_eq!(month, 3);
                assert_eq!(day, 1);
            }
            Stamp::Instant(_) => panic!("expected wall-clock stamp"),
        }
        assert_eq!(stamp.to_string(), "Mar  1 18:46:11");
    }

    #[test]
    fn nxos_timestamp_keeps_fraction() {
        let (kind, record) = decode_one(
            "<187>:Jun 14 10:07:12.123456 UTC: %ETHPORT-5-IF_DOWN: Interface Ethernet1/5 is down",
        );
        let stamp = record_timestamp(kind, &record).unwrap();
        assert_eq!(stamp.to_string(), "Jun 14 10:07:12.123456");
    }

    #[test]
    fn rfc5424_timestamp_parses_to_utc_instant() {
        let (kind, record) =
            decode_one("<34>1 2023-10-11T22:14:15.003Z mymachine su - ID47 - event");
        match record_timestamp(kind, &record).unwrap() {
            Stamp::Instant(dt) => assert_eq!(dt.to_rfc3339(), "2023-10-11T22:14:15.003+00:00"),
            other => panic!("expected instant, got {other:?}"),
        }
    }

    #[test]
    fn ios_and_asa_have_no_timestamp() {
        let (kind, record) =
            decode_one("<189>: %LINK-3-UPDOWN: Interface Gi0/1, changed state to down");
        assert_eq!(record_timestamp(kind, &record), None);

        let (kind, record) = decode_one("%ASA-4-106023: Deny tcp src outside");
        assert_eq!(record_timestamp(kind, &record), None);
    }

    #[test]
    fn invalid_wallclock_is_none() {
        assert_eq!(parse_wallclock("Xxx 11 22:14:15"), None);
        assert_eq!(parse_wallclock("Oct 42 22:14:15"), None);
        assert_eq!(parse_wallclock("Oct 11 25:99:99"), None);
        assert_eq!(parse_wallclock("Oct 11"), None);
    }

    #[test]
    fn wallclock_stamps_order_within_a_batch() {
        let a = parse_wallclock("Jan  2 10:00:00").unwrap();
        let b = parse_wallclock("Jan  2 10:00:01").unwrap();
        let c = parse_wallclock("Feb  1 00:00:00").unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
