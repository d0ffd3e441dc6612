use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the publish statistics tool.
#[derive(Error, Debug)]
pub enum StatError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The base directory cannot be interpreted as a directory tree root.
    #[error("Invalid base path: {0}")]
    InvalidBasePath(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be written by an exporter.
    #[error("Failed to export report to {path}: {reason}")]
    Export { path: PathBuf, reason: String },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the stat crates.
pub type Result<T> = std::result::Result<T, StatError>;
