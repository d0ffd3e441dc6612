//! Discovery of the videos sitting directly inside a scope directory.

use std::path::{Path, PathBuf};

use stat_core::config::RELEASE_LOG_NAME;
use tracing::debug;

use crate::reader::ReleaseLog;

/// Video extension matched by the scanner, case-sensitive.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Result of scanning one scope directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDirectory {
    /// Whether the directory existed at scan time.
    pub exists: bool,
    /// File names of the `*.mp4` children, sorted.
    pub video_files: Vec<String>,
    /// The directory's release log. It may not exist.
    pub release_log: ReleaseLog,
}

/// Path of the release log kept inside `dir`.
pub fn release_log_path(dir: &Path) -> PathBuf {
    dir.join(RELEASE_LOG_NAME)
}

/// List the `*.mp4` files directly inside `dir`.
///
/// Date sub-folders are not descended into and hidden files are skipped. A
/// missing directory yields an empty scan with `exists == false`.
///
/// Only regular files count, after following symlinks: a directory named
/// `*.mp4` or a symlink whose target is gone is not a video.
pub fn scan_directory(dir: &Path) -> ScannedDirectory {
    let release_log = ReleaseLog::new(release_log_path(dir));

    if !dir.is_dir() {
        debug!("Scope directory does not exist: {}", dir.display());
        return ScannedDirectory {
            exists: false,
            video_files: Vec::new(),
            release_log,
        };
    }

    let mut video_files: Vec<String> = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_video_file_name(name))
        .collect();

    video_files.sort();

    debug!("{}: {} videos on disk", dir.display(), video_files.len());

    ScannedDirectory {
        exists: true,
        video_files,
        release_log,
    }
}

/// `true` for visible file names ending in `.mp4`.
fn is_video_file_name(name: &str) -> bool {
    !name.starts_with('.')
        && Path::new(name)
            .extension()
            .map(|ext| ext == VIDEO_EXTENSION)
            .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
