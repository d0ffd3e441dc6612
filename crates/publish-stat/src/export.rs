//! CSV and JSON export of an analysis result.
//!
//! `--output <dir>` produces:
//!
//! | file                  | content                                        |
//! |-----------------------|------------------------------------------------|
//! | `summary.csv`         | one row per scope                              |
//! | `daily.csv`           | released videos per date                       |
//! | `hourly.csv`          | released videos per hour of day                |
//! | `date_hour.csv`       | released videos per date and hour              |
//! | `<platform>.csv`      | the summary rows of one platform               |
//! | `released_videos.csv` | every released video name with its scope       |
//! | `report.json`         | metadata, per-scope statistics and the report  |

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use stat_core::models::{DirectoryStats, PublishReport, ScopeKey};
use stat_core::time_utils::format_date;
use stat_core::{Result, StatError};
use stat_data::analysis::{AnalysisMetadata, AnalysisResult};

// ── JSON document ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ScopeEntry<'a> {
    #[serde(flatten)]
    scope: &'a ScopeKey,
    stats: &'a DirectoryStats,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    metadata: &'a AnalysisMetadata,
    scopes: Vec<ScopeEntry<'a>>,
    report: &'a PublishReport,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Write every export file into `dir`, creating it if needed.
///
/// Returns the paths written, in writing order.
pub fn export_report(result: &AnalysisResult, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| export_error(dir, e))?;

    let report = &result.report;
    let mut written = Vec::new();

    let path = dir.join("summary.csv");
    write_csv(&path, |w| {
        for row in &report.rows {
            w.serialize(row)?;
        }
        Ok(())
    })?;
    written.push(path);

    let path = dir.join("daily.csv");
    write_csv(&path, |w| {
        w.write_record(["date", "released"])?;
        for (date, count) in &report.daily {
            w.write_record([format_date(*date), count.to_string()])?;
        }
        Ok(())
    })?;
    written.push(path);

    let path = dir.join("hourly.csv");
    write_csv(&path, |w| {
        w.write_record(["hour", "released"])?;
        for (hour, count) in &report.hourly {
            w.write_record([hour.to_string(), count.to_string()])?;
        }
        Ok(())
    })?;
    written.push(path);

    let path = dir.join("date_hour.csv");
    write_csv(&path, |w| {
        w.write_record(["date", "hour", "released"])?;
        for (key, count) in &report.date_hour {
            w.write_record([format_date(key.date), key.hour.to_string(), count.to_string()])?;
        }
        Ok(())
    })?;
    written.push(path);

    for platform in report.platforms() {
        let path = dir.join(format!("{platform}.csv"));
        write_csv(&path, |w| {
            w.write_record(["language_pair", "total_videos", "released", "unreleased", "release_rate"])?;
            for row in report.rows_for_platform(platform) {
                w.write_record([
                    row.language_pair.clone(),
                    row.total_videos.to_string(),
                    row.released.to_string(),
                    row.unreleased.to_string(),
                    format!("{:.2}", row.release_rate),
                ])?;
            }
            Ok(())
        })?;
        written.push(path);
    }

    let path = dir.join("released_videos.csv");
    write_csv(&path, |w| {
        w.write_record(["platform", "language_pair", "video_name"])?;
        for (key, stats) in &result.scopes {
            for name in &stats.video_names {
                w.write_record([key.platform.as_str(), key.language_pair.as_str(), name.as_str()])?;
            }
        }
        Ok(())
    })?;
    written.push(path);

    let path = dir.join("report.json");
    let document = ExportDocument {
        metadata: &result.metadata,
        scopes: result
            .scopes
            .iter()
            .map(|(scope, stats)| ScopeEntry { scope, stats })
            .collect(),
        report,
    };
    let json = serde_json::to_string_pretty(&document).map_err(|e| export_error(&path, e))?;
    fs::write(&path, json).map_err(|e| export_error(&path, e))?;
    written.push(path);

    Ok(written)
}

/// Export into `dir`, retrying once under the current directory on failure.
///
/// Returns the directory that received the files, or `None` when both
/// attempts failed; failures are logged, never propagated.
pub fn export_with_fallback(result: &AnalysisResult, dir: &Path) -> Option<PathBuf> {
    match std::env::current_dir() {
        Ok(cwd) => export_with_fallback_in(result, dir, &cwd),
        Err(e) => {
            warn!("Cannot resolve the current directory: {}", e);
            export_once(result, dir).then(|| dir.to_path_buf())
        }
    }
}

/// Export into `dir`; on failure retry once in `fallback_root/<last component of dir>`.
pub fn export_with_fallback_in(
    result: &AnalysisResult,
    dir: &Path,
    fallback_root: &Path,
) -> Option<PathBuf> {
    if export_once(result, dir) {
        return Some(dir.to_path_buf());
    }

    let Some(fallback) = fallback_dir(dir, fallback_root) else {
        error!("No fallback directory for {}", dir.display());
        return None;
    };

    export_once(result, &fallback).then_some(fallback)
}

/// `<root>/<last component of dir>`, or `None` when `dir` has no final
/// component.
pub fn fallback_dir(dir: &Path, root: &Path) -> Option<PathBuf> {
    Some(root.join(dir.file_name()?))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One export attempt; the outcome is logged.
fn export_once(result: &AnalysisResult, dir: &Path) -> bool {
    match export_report(result, dir) {
        Ok(files) => {
            info!("Exported {} files to {}", files.len(), dir.display());
            true
        }
        Err(e) => {
            error!("Export to {} failed: {}", dir.display(), e);
            false
        }
    }
}

fn write_csv<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut csv::Writer<fs::File>) -> std::result::Result<(), csv::Error>,
{
    let mut writer = csv::Writer::from_path(path).map_err(|e| export_error(path, e))?;
    body(&mut writer).map_err(|e| export_error(path, e))?;
    writer.flush().map_err(|e| export_error(path, e))?;
    Ok(())
}

fn export_error(path: &Path, reason: impl Display) -> StatError {
    StatError::Export {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
