use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one `(platform, language pair)` cell of the reporting grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeKey {
    /// Publishing destination, e.g. `"douyin"`.
    pub platform: String,
    /// Localisation tag, e.g. `"en-ja"`.
    pub language_pair: String,
}

impl ScopeKey {
    pub fn new(platform: impl Into<String>, language_pair: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            language_pair: language_pair.into(),
        }
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.language_pair)
    }
}

/// Composite key of the date × hour distribution.
///
/// Ordering is by date first, then by hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateHour {
    pub date: NaiveDate,
    pub hour: u32,
}

impl DateHour {
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }
}

impl fmt::Display for DateHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}h", self.date, self.hour)
    }
}

/// The timestamp field of a release record, once it passed the 14-digit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTimestamp {
    /// Calendar date of characters 0–7, `None` when not a real date.
    pub date: Option<NaiveDate>,
    /// Characters 8–9 as a plain integer. Not range checked.
    pub hour: u32,
}

impl ReleaseTimestamp {
    /// The date × hour key, available only when the date part is valid.
    pub fn date_hour(&self) -> Option<DateHour> {
        self.date.map(|d| DateHour::new(d, self.hour))
    }
}

/// One parsed line of a release log.
///
/// A record's presence means the video counts as released, whether or not
/// the date or timestamp could be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// `<YYYYMMDD>/<file>.mp4` as written in the log.
    pub relative_path: String,
    /// Date from the leading 8-digit folder of `relative_path`.
    pub release_date: Option<NaiveDate>,
    /// Parsed second field of the line.
    pub timestamp: Option<ReleaseTimestamp>,
}

impl ReleaseRecord {
    /// Video name without the date folder and the `.mp4` extension.
    ///
    /// Returns `None` when the path has no folder component.
    pub fn video_name(&self) -> Option<String> {
        let (_, file) = self.relative_path.split_once('/')?;
        let file = file.split('/').next().unwrap_or(file);
        Some(file.replace(".mp4", ""))
    }
}

/// Per-scope statistics produced by the distribution aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectoryStats {
    /// Physical videos plus log records, never below `released`.
    pub total_videos: u64,
    /// Non-empty log lines, duplicates included.
    pub released: u64,
    /// `total_videos - released`.
    pub unreleased: u64,
    /// Percentage rounded to two decimals, `0.0` when there are no videos.
    pub release_rate: f64,
    pub date_distribution: BTreeMap<NaiveDate, u64>,
    pub hour_distribution: BTreeMap<u32, u64>,
    #[serde(serialize_with = "serialize_date_hour_map")]
    pub date_hour_distribution: BTreeMap<DateHour, u64>,
    /// Names of released videos, in log order.
    pub video_names: Vec<String>,
}

/// JSON maps need string keys, so the date × hour map goes out as a list.
fn serialize_date_hour_map<S>(map: &BTreeMap<DateHour, u64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(map.iter().map(|(key, count)| (key, count)))
}

/// One line of the summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub platform: String,
    pub language_pair: String,
    pub total_videos: u64,
    pub released: u64,
    pub unreleased: u64,
    pub release_rate: f64,
}

impl SummaryRow {
    pub fn from_stats(key: &ScopeKey, stats: &DirectoryStats) -> Self {
        Self {
            platform: key.platform.clone(),
            language_pair: key.language_pair.clone(),
            total_videos: stats.total_videos,
            released: stats.released,
            unreleased: stats.unreleased,
            release_rate: stats.release_rate,
        }
    }
}

/// Sums over every row of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridTotals {
    pub total_videos: u64,
    pub released: u64,
    pub unreleased: u64,
    pub overall_rate: f64,
}

/// Everything the presentation and export collaborators consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublishReport {
    /// Rows in configured platform / language-pair order.
    pub rows: Vec<SummaryRow>,
    /// Released videos per date, ascending.
    pub daily: Vec<(NaiveDate, u64)>,
    /// Released videos per hour of day, ascending.
    pub hourly: Vec<(u32, u64)>,
    /// Released videos per date and hour, ascending.
    pub date_hour: Vec<(DateHour, u64)>,
    pub totals: GridTotals,
}

impl PublishReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `n` most recent release days, newest first.
    pub fn recent_days(&self, n: usize) -> Vec<(NaiveDate, u64)> {
        self.daily.iter().rev().take(n).copied().collect()
    }

    /// Rows belonging to `platform`, in language-pair order.
    pub fn rows_for_platform<'a>(&'a self, platform: &'a str) -> impl Iterator<Item = &'a SummaryRow> + 'a {
        self.rows.iter().filter(move |r| r.platform == platform)
    }

    /// Distinct platforms present in the rows, in row order.
    pub fn platforms(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.platform.as_str()) {
                seen.push(&row.platform);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(path: &str) -> ReleaseRecord {
        ReleaseRecord {
            relative_path: path.to_string(),
            release_date: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_date_hour_orders_by_date_then_hour() {
        let a = DateHour::new(date(2025, 3, 1), 23);
        let b = DateHour::new(date(2025, 3, 2), 0);
        let c = DateHour::new(date(2025, 3, 2), 5);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_release_timestamp_date_hour_requires_date() {
        let ts = ReleaseTimestamp { date: None, hour: 12 };
        assert!(ts.date_hour().is_none());

        let ts = ReleaseTimestamp {
            date: Some(date(2025, 3, 2)),
            hour: 12,
        };
        assert_eq!(ts.date_hour(), Some(DateHour::new(date(2025, 3, 2), 12)));
    }

    #[test]
    fn test_video_name_strips_folder_and_extension() {
        assert_eq!(
            record("20250302/cat-video.mp4").video_name().as_deref(),
            Some("cat-video")
        );
        assert!(record("cat-video.mp4").video_name().is_none());
    }

    #[test]
    fn test_scope_key_display() {
        assert_eq!(ScopeKey::new("douyin", "en-ja").to_string(), "douyin/en-ja");
    }

    #[test]
    fn test_recent_days_newest_first() {
        let report = PublishReport {
            daily: vec![
                (date(2025, 3, 1), 1),
                (date(2025, 3, 2), 2),
                (date(2025, 3, 3), 3),
            ],
            ..Default::default()
        };
        let recent = report.recent_days(2);
        assert_eq!(recent, vec![(date(2025, 3, 3), 3), (date(2025, 3, 2), 2)]);
    }

    #[test]
    fn test_platforms_keep_row_order() {
        let row = |p: &str, l: &str| SummaryRow {
            platform: p.to_string(),
            language_pair: l.to_string(),
            total_videos: 0,
            released: 0,
            unreleased: 0,
            release_rate: 0.0,
        };
        let report = PublishReport {
            rows: vec![row("weixin", "en-ja"), row("weixin", "en-zh"), row("douyin", "en-ja")],
            ..Default::default()
        };
        assert_eq!(report.platforms(), vec!["weixin", "douyin"]);
        assert_eq!(report.rows_for_platform("weixin").count(), 2);
    }

    #[test]
    fn test_directory_stats_serializes_date_hour_as_list() {
        let mut stats = DirectoryStats::default();
        stats
            .date_hour_distribution
            .insert(DateHour::new(date(2025, 3, 2), 12), 4);
        let json = serde_json::to_value(&stats).unwrap();
        let entries = json["date_hour_distribution"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0][0]["hour"], 12);
        assert_eq!(entries[0][1], 4);
    }
}
