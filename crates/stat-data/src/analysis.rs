//! Main analysis pipeline for publish-stat.
//!
//! Walks the configured platform × language-pair grid once, scanning every
//! scope directory and its release log, and returns a [`AnalysisResult`]
//! ready for the table printer, the charts and the exporters.

use chrono::Local;
use stat_core::config::ReportConfig;
use stat_core::models::{DirectoryStats, PublishReport, ScopeKey};
use tracing::{debug, info};

use crate::aggregator::DistributionAggregator;
use crate::cross_scope::CrossScopeAggregator;
use crate::scanner::scan_directory;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of scopes in the configured grid.
    pub scopes_configured: usize,
    /// Number of scopes whose directory existed.
    pub scopes_found: usize,
    /// Total release-log records read.
    pub records_read: usize,
    /// Wall-clock seconds spent scanning and aggregating.
    pub scan_time_seconds: f64,
}

/// The complete output of [`analyze_publishing`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Statistics of every existing scope, in configured order.
    pub scopes: Vec<(ScopeKey, DirectoryStats)>,
    /// Rows, series and totals merged across scopes.
    pub report: PublishReport,
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Statistics of one scope, if its directory existed.
    pub fn stats_for(&self, key: &ScopeKey) -> Option<&DirectoryStats> {
        self.scopes.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full analysis pipeline over `config`.
///
/// 1. For every configured scope, skip it if its directory is missing.
/// 2. Scan the directory and read its release log.
/// 3. Aggregate the per-scope statistics.
/// 4. Merge all scopes into the report.
pub fn analyze_publishing(config: &ReportConfig) -> AnalysisResult {
    let start = std::time::Instant::now();

    let grid = config.scopes();
    let mut scopes: Vec<(ScopeKey, DirectoryStats)> = Vec::new();
    let mut records_read = 0usize;

    for key in &grid {
        if let Some((stats, n_records)) = analyze_scope(config, key) {
            records_read += n_records;
            scopes.push((key.clone(), stats));
        }
    }

    let report = CrossScopeAggregator::aggregate(config, &scopes);

    let metadata = AnalysisMetadata {
        generated_at: Local::now().to_rfc3339(),
        scopes_configured: grid.len(),
        scopes_found: scopes.len(),
        records_read,
        scan_time_seconds: start.elapsed().as_secs_f64(),
    };

    info!(
        "Scanned {} of {} scopes under {}, {} release records",
        metadata.scopes_found,
        metadata.scopes_configured,
        config.base_dir.display(),
        metadata.records_read
    );

    AnalysisResult {
        scopes,
        report,
        metadata,
    }
}

/// Statistics of a single scope, or `None` when its directory is missing.
///
/// Also returns the number of records read from the scope's log.
pub fn analyze_scope(config: &ReportConfig, key: &ScopeKey) -> Option<(DirectoryStats, usize)> {
    let dir = config.scope_dir(key);
    let scan = scan_directory(&dir);
    if !scan.exists {
        info!("Skipping {}: {} not found", key, dir.display());
        return None;
    }

    let records = scan.release_log.records();
    let stats = DistributionAggregator::aggregate(&scan.video_files, &records);

    debug!(
        "{}: {} total, {} released, {} unreleased ({:.2}%)",
        key, stats.total_videos, stats.released, stats.unreleased, stats.release_rate
    );

    Some((stats, records.len()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
