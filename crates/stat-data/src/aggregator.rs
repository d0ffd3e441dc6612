//! Per-directory release statistics.
//!
//! Combines the videos found on disk with the records of the directory's
//! release log into one [`DirectoryStats`].

use stat_core::formatting::release_rate;
use stat_core::models::{DirectoryStats, ReleaseRecord};

// ── DistributionAggregator ────────────────────────────────────────────────────

/// Stateless helper that folds one scope's records into statistics.
pub struct DistributionAggregator;

impl DistributionAggregator {
    /// Build the statistics of one scope.
    ///
    /// Released videos are moved into date folders once published, so the
    /// total is the top-level files plus the log records. When the log holds
    /// more records than that total the log wins, so `unreleased` can never
    /// go negative.
    pub fn aggregate(video_files: &[String], records: &[ReleaseRecord]) -> DirectoryStats {
        let released = records.len() as u64;
        let mut total_videos = video_files.len() as u64 + released;
        if released > total_videos {
            total_videos = released;
        }

        let mut stats = DirectoryStats {
            total_videos,
            released,
            unreleased: total_videos - released,
            release_rate: release_rate(released, total_videos),
            ..Default::default()
        };

        for record in records {
            Self::add_record(&mut stats, record);
        }

        stats
    }

    /// Add one record to the distributions and the name list.
    fn add_record(stats: &mut DirectoryStats, record: &ReleaseRecord) {
        if let Some(date) = record.release_date {
            *stats.date_distribution.entry(date).or_insert(0) += 1;
        }
        if let Some(ts) = record.timestamp {
            *stats.hour_distribution.entry(ts.hour).or_insert(0) += 1;
            if let Some(key) = ts.date_hour() {
                *stats.date_hour_distribution.entry(key).or_insert(0) += 1;
            }
        }
        if let Some(name) = record.video_name() {
            stats.video_names.push(name);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
