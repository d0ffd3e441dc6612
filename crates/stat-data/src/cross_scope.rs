//! Grid-wide summaries built from per-scope statistics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use stat_core::config::ReportConfig;
use stat_core::formatting::release_rate;
use stat_core::models::{DateHour, DirectoryStats, GridTotals, PublishReport, ScopeKey, SummaryRow};

/// Stateless helper that merges scope statistics into a [`PublishReport`].
pub struct CrossScopeAggregator;

impl CrossScopeAggregator {
    /// Merge the statistics of every scope whose directory exists.
    ///
    /// Scopes that were never populated must simply be left out of `scopes`;
    /// they contribute neither a row nor series counts.
    pub fn aggregate(config: &ReportConfig, scopes: &[(ScopeKey, DirectoryStats)]) -> PublishReport {
        let mut ordered: Vec<&(ScopeKey, DirectoryStats)> = scopes.iter().collect();
        ordered.sort_by_key(|(key, _)| config.scope_rank(key));

        let rows: Vec<SummaryRow> = ordered
            .iter()
            .map(|(key, stats)| SummaryRow::from_stats(key, stats))
            .collect();

        let stats: Vec<&DirectoryStats> = ordered.iter().map(|(_, s)| s).collect();

        PublishReport {
            totals: Self::calculate_totals(&rows),
            daily: Self::daily_series(&stats),
            hourly: Self::hourly_series(&stats),
            date_hour: Self::date_hour_series(&stats),
            rows,
        }
    }

    /// Sum the counts of all rows and compute the overall release rate.
    pub fn calculate_totals(rows: &[SummaryRow]) -> GridTotals {
        let total_videos: u64 = rows.iter().map(|r| r.total_videos).sum();
        let released: u64 = rows.iter().map(|r| r.released).sum();
        let unreleased: u64 = rows.iter().map(|r| r.unreleased).sum();
        GridTotals {
            total_videos,
            released,
            unreleased,
            overall_rate: release_rate(released, total_videos),
        }
    }

    /// Released videos per date across all scopes, ascending by date.
    pub fn daily_series(stats: &[&DirectoryStats]) -> Vec<(NaiveDate, u64)> {
        merge(stats.iter().map(|s| &s.date_distribution))
    }

    /// Released videos per hour across all scopes, ascending by hour.
    pub fn hourly_series(stats: &[&DirectoryStats]) -> Vec<(u32, u64)> {
        merge(stats.iter().map(|s| &s.hour_distribution))
    }

    /// Released videos per date and hour across all scopes, ascending.
    pub fn date_hour_series(stats: &[&DirectoryStats]) -> Vec<(DateHour, u64)> {
        merge(stats.iter().map(|s| &s.date_hour_distribution))
    }
}

/// Sum several count maps key by key.
fn merge<'a, K, I>(maps: I) -> Vec<(K, u64)>
where
    K: Ord + Copy + 'a,
    I: Iterator<Item = &'a BTreeMap<K, u64>>,
{
    let mut merged: BTreeMap<K, u64> = BTreeMap::new();
    for map in maps {
        for (key, count) in map {
            *merged.entry(*key).or_insert(0) += count;
        }
    }
    merged.into_iter().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
