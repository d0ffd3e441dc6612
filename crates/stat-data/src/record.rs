//! Parsing of single release-log lines into [`ReleaseRecord`]s.
//!
//! A line has the shape `<YYYYMMDD>/<file>.mp4[,<YYYYMMDDHHMMSS>]`. Parsing
//! never fails: a malformed date or timestamp only leaves the matching
//! field empty, and the record still counts as released.

use std::sync::OnceLock;

use regex::Regex;
use stat_core::models::{ReleaseRecord, ReleaseTimestamp};
use stat_core::time_utils::{parse_compact_date, split_compact_timestamp};

/// Eight digits followed by `/` at the start of the relative path.
fn date_folder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{8})/").expect("static regex is valid"))
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one trimmed, non-empty log line.
pub fn parse_release_line(line: &str) -> ReleaseRecord {
    let (path, timestamp_field) = match line.split_once(',') {
        Some((path, rest)) => (path, Some(rest)),
        None => (line, None),
    };

    ReleaseRecord {
        relative_path: path.to_string(),
        release_date: extract_release_date(path),
        timestamp: timestamp_field.and_then(extract_timestamp),
    }
}

/// Date of the leading `YYYYMMDD/` folder, if present and a real date.
pub fn extract_release_date(relative_path: &str) -> Option<chrono::NaiveDate> {
    let caps = date_folder_pattern().captures(relative_path)?;
    parse_compact_date(caps.get(1)?.as_str())
}

/// Parse the optional second field of a line.
///
/// Only a field that is exactly fourteen digits after trimming is accepted.
pub fn extract_timestamp(field: &str) -> Option<ReleaseTimestamp> {
    let (date, hour) = split_compact_timestamp(field.trim())?;
    Some(ReleaseTimestamp { date, hour })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Dates ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_path_only_line() {
        let record = parse_release_line("20250302/a.mp4");
        assert_eq!(record.relative_path, "20250302/a.mp4");
        assert_eq!(record.release_date, Some(date(2025, 3, 2)));
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_invalid_calendar_date_is_absent() {
        let record = parse_release_line("20250230/a.mp4");
        assert!(record.release_date.is_none());
        assert_eq!(record.relative_path, "20250230/a.mp4");
    }

    #[test]
    fn test_placeholder_folder_is_absent() {
        // Files back-filled into the log use a fake 30000000 folder.
        assert!(parse_release_line("30000000/a.mp4").release_date.is_none());
    }

    #[test]
    fn test_date_requires_slash_after_eight_digits() {
        assert!(parse_release_line("202503021/a.mp4").release_date.is_none());
        assert!(parse_release_line("20250302_a.mp4").release_date.is_none());
        assert!(parse_release_line("a.mp4").release_date.is_none());
        assert!(parse_release_line("x20250302/a.mp4").release_date.is_none());
    }

    // ── Timestamps ────────────────────────────────────────────────────────────

    #[test]
    fn test_full_line_with_timestamp() {
        let record = parse_release_line("20250302/a.mp4,20250302121530");
        assert_eq!(record.relative_path, "20250302/a.mp4");
        let ts = record.timestamp.unwrap();
        assert_eq!(ts.hour, 12);
        assert_eq!(ts.date, Some(date(2025, 3, 2)));
    }

    #[test]
    fn test_timestamp_is_trimmed() {
        let record = parse_release_line("20250302/a.mp4, 20250302081530 ");
        assert_eq!(record.timestamp.map(|t| t.hour), Some(8));
    }

    #[test]
    fn test_timestamp_of_length_13_is_absent() {
        let record = parse_release_line("20250302/a.mp4,2025030212153");
        assert!(record.timestamp.is_none());
        assert_eq!(record.release_date, Some(date(2025, 3, 2)));
    }

    #[test]
    fn test_non_digit_timestamp_is_absent() {
        assert!(parse_release_line("20250302/a.mp4,2025030212153x")
            .timestamp
            .is_none());
    }

    #[test]
    fn test_only_first_comma_splits() {
        // The remainder "20250302121530,extra" is not 14 characters.
        let record = parse_release_line("20250302/a.mp4,20250302121530,extra");
        assert_eq!(record.relative_path, "20250302/a.mp4");
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_out_of_range_hour_passes_through() {
        let record = parse_release_line("20250302/a.mp4,20250302271530");
        assert_eq!(record.timestamp.map(|t| t.hour), Some(27));
    }

    #[test]
    fn test_timestamp_with_bad_date_keeps_hour_only() {
        let record = parse_release_line("20250302/a.mp4,20251399101530");
        let ts = record.timestamp.unwrap();
        assert_eq!(ts.hour, 10);
        assert!(ts.date.is_none());
        assert!(ts.date_hour().is_none());
    }

    #[test]
    fn test_empty_path_field() {
        let record = parse_release_line(",20250302121530");
        assert_eq!(record.relative_path, "");
        assert!(record.release_date.is_none());
        assert_eq!(record.timestamp.map(|t| t.hour), Some(12));
    }

    #[test]
    fn test_trailing_comma_without_timestamp() {
        let record = parse_release_line("20250302/a.mp4,");
        assert!(record.timestamp.is_none());
        assert_eq!(record.release_date, Some(date(2025, 3, 2)));
    }
}
