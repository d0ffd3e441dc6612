//! Release-log loading.
//!
//! A release log is a plain text file, one record per line, appended to by
//! the uploaders every time a video goes out. [`ReleaseLog`] re-reads the
//! file on every call so repeated report runs never share state.

use std::path::{Path, PathBuf};

use stat_core::error::{Result, StatError};
use stat_core::models::ReleaseRecord;
use tracing::{debug, warn};

use crate::record::parse_release_line;

/// Handle to one release log on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLog {
    path: PathBuf,
}

impl ReleaseLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the non-empty, trimmed lines of the log.
    ///
    /// The file is opened, read fully and closed within this call. Invalid
    /// UTF-8 is replaced rather than rejected.
    pub fn try_lines(&self) -> Result<Vec<String>> {
        let bytes = std::fs::read(&self.path).map_err(|source| StatError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Like [`try_lines`](Self::try_lines), but a missing or unreadable log
    /// contributes nothing.
    pub fn lines(&self) -> Vec<String> {
        if !self.path.exists() {
            debug!("No release log at {}", self.path.display());
            return Vec::new();
        }
        match self.try_lines() {
            Ok(lines) => lines,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Parse every line of the log into a [`ReleaseRecord`], in file order.
    ///
    /// Duplicate lines are kept; each one counts as a separate release.
    pub fn records(&self) -> Vec<ReleaseRecord> {
        let records: Vec<ReleaseRecord> =
            self.lines().iter().map(|l| parse_release_line(l)).collect();
        debug!(
            "Release log {}: {} records",
            self.path.display(),
            records.len()
        );
        records
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
