use chrono::NaiveDate;

/// Length of a `YYYYMMDD` date.
pub const COMPACT_DATE_LEN: usize = 8;

/// Length of a `YYYYMMDDHHMMSS` timestamp.
pub const COMPACT_TIMESTAMP_LEN: usize = 14;

// ── Compact date / timestamp parsing ─────────────────────────────────────────

/// Parse an 8-digit `YYYYMMDD` string into a calendar date.
///
/// Returns `None` for anything that is not exactly eight ASCII digits or
/// that names an impossible date such as `20250230`.
pub fn parse_compact_date(s: &str) -> Option<NaiveDate> {
    if s.len() != COMPACT_DATE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split a 14-digit `YYYYMMDDHHMMSS` string into its date and hour parts.
///
/// The string must be exactly fourteen ASCII digits. The hour is returned as
/// written, so `99` comes back as `99`. The date is `None` when the first
/// eight digits are not a real calendar date.
pub fn split_compact_timestamp(s: &str) -> Option<(Option<NaiveDate>, u32)> {
    if s.len() != COMPACT_TIMESTAMP_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = s[8..10].parse().ok()?;
    Some((parse_compact_date(&s[..COMPACT_DATE_LEN]), hour))
}

/// Format a date as `YYYY-MM-DD` for tables and chart labels.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short `MM-DD` label used under chart bars.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_date_valid() {
        assert_eq!(
            parse_compact_date("20250302"),
            NaiveDate::from_ymd_opt(2025, 3, 2)
        );
    }

    #[test]
    fn test_parse_compact_date_impossible_dates() {
        assert!(parse_compact_date("20250230").is_none());
        assert!(parse_compact_date("20251301").is_none());
        assert!(parse_compact_date("30000000").is_none());
    }

    #[test]
    fn test_parse_compact_date_rejects_non_digits_and_length() {
        assert!(parse_compact_date("2025-3-2").is_none());
        assert!(parse_compact_date("2025030").is_none());
        assert!(parse_compact_date("+2025030").is_none());
    }

    #[test]
    fn test_split_compact_timestamp() {
        let (date, hour) = split_compact_timestamp("20250302121530").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 2));
        assert_eq!(hour, 12);
    }

    #[test]
    fn test_split_compact_timestamp_hour_not_range_checked() {
        let (_, hour) = split_compact_timestamp("20250302990000").unwrap();
        assert_eq!(hour, 99);
    }

    #[test]
    fn test_split_compact_timestamp_invalid_date_keeps_hour() {
        let (date, hour) = split_compact_timestamp("20251340081500").unwrap();
        assert!(date.is_none());
        assert_eq!(hour, 8);
    }

    #[test]
    fn test_split_compact_timestamp_rejects_bad_input() {
        assert!(split_compact_timestamp("2025030212153").is_none());
        assert!(split_compact_timestamp("202503021215300").is_none());
        assert!(split_compact_timestamp("2025030212153a").is_none());
        assert!(split_compact_timestamp("").is_none());
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(format_date(d), "2025-03-02");
        assert_eq!(format_short_date(d), "03-02");
    }
}
