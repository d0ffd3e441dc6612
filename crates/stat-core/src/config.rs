//! Closed reporting configuration: the base directory plus the platform and
//! language-pair enumerations that define the reporting grid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, StatError};
use crate::models::ScopeKey;

/// Platforms reported on when no configuration file overrides them.
pub const DEFAULT_PLATFORMS: &[&str] = &["weixin", "weixin_188", "douyin", "kuaishou", "rednote"];

/// Language pairs reported on when no configuration file overrides them.
pub const DEFAULT_LANGUAGE_PAIRS: &[&str] = &["en-ja", "en-zh", "ko-en", "zh-zh", "hk-en", "hk-hk"];

/// File name of the per-directory release log.
pub const RELEASE_LOG_NAME: &str = "0-released.csv";

/// Prefix of every language-pair directory under a platform directory.
pub const LANGUAGE_DIR_PREFIX: &str = "fixed-";

/// Immutable description of the reporting grid.
///
/// The order of `platforms` and `language_pairs` is the canonical sort and
/// display order of every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    #[serde(default = "default_language_pairs")]
    pub language_pairs: Vec<String>,
}

fn default_base_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join("aivideo").join("dist").join("videos")
}

fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|s| s.to_string()).collect()
}

fn default_language_pairs() -> Vec<String> {
    DEFAULT_LANGUAGE_PAIRS.iter().map(|s| s.to_string()).collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            platforms: default_platforms(),
            language_pairs: default_language_pairs(),
        }
    }
}

impl ReportConfig {
    /// Default enumerations rooted at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StatError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot describe a grid.
    pub fn validate(&self) -> Result<()> {
        if self.platforms.is_empty() {
            return Err(StatError::Config("no platforms configured".to_string()));
        }
        if self.language_pairs.is_empty() {
            return Err(StatError::Config("no language pairs configured".to_string()));
        }
        if let Some(dup) = first_duplicate(&self.platforms) {
            return Err(StatError::Config(format!("duplicate platform: {}", dup)));
        }
        if let Some(dup) = first_duplicate(&self.language_pairs) {
            return Err(StatError::Config(format!("duplicate language pair: {}", dup)));
        }
        Ok(())
    }

    /// Check the base directory can serve as a tree root.
    ///
    /// An absent directory is fine (every scope is simply missing); an empty
    /// path or a path naming a regular file is not.
    pub fn check_base_dir(&self) -> Result<()> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(StatError::InvalidBasePath(self.base_dir.clone()));
        }
        if self.base_dir.exists() && !self.base_dir.is_dir() {
            return Err(StatError::InvalidBasePath(self.base_dir.clone()));
        }
        Ok(())
    }

    /// Restrict the grid to a single platform.
    ///
    /// Unknown names are ignored with a warning and the full grid is kept.
    pub fn restricted_to(&self, platform: Option<&str>) -> Self {
        match platform {
            Some(name) if self.platforms.iter().any(|p| p == name) => Self {
                platforms: vec![name.to_string()],
                ..self.clone()
            },
            Some(name) => {
                warn!(
                    "Unknown platform \"{}\", reporting on all configured platforms",
                    name
                );
                self.clone()
            }
            None => self.clone(),
        }
    }

    /// Every scope of the grid, in canonical order.
    pub fn scopes(&self) -> Vec<ScopeKey> {
        self.platforms
            .iter()
            .flat_map(|p| {
                self.language_pairs
                    .iter()
                    .map(move |l| ScopeKey::new(p.clone(), l.clone()))
            })
            .collect()
    }

    /// `<base>/<platform>`.
    pub fn platform_dir(&self, platform: &str) -> PathBuf {
        self.base_dir.join(platform)
    }

    /// `<base>/<platform>/fixed-<language pair>`.
    pub fn scope_dir(&self, key: &ScopeKey) -> PathBuf {
        self.platform_dir(&key.platform)
            .join(format!("{}{}", LANGUAGE_DIR_PREFIX, key.language_pair))
    }

    /// Sort rank of `key`; keys outside the grid sort last.
    pub fn scope_rank(&self, key: &ScopeKey) -> (usize, usize) {
        let p = self
            .platforms
            .iter()
            .position(|p| *p == key.platform)
            .unwrap_or(usize::MAX);
        let l = self
            .language_pairs
            .iter()
            .position(|l| *l == key.language_pair)
            .unwrap_or(usize::MAX);
        (p, l)
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items[..*i].contains(item))
        .map(|(_, item)| item.as_str())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_enumerations() {
        let config = ReportConfig::with_base_dir("/videos");
        assert_eq!(config.platforms.len(), 5);
        assert_eq!(config.language_pairs.len(), 6);
        assert_eq!(config.platforms[0], "weixin");
        assert_eq!(config.language_pairs[5], "hk-hk");
    }

    #[test]
    fn test_scope_dir_layout() {
        let config = ReportConfig::with_base_dir("/videos");
        let dir = config.scope_dir(&ScopeKey::new("douyin", "en-ja"));
        assert_eq!(dir, PathBuf::from("/videos/douyin/fixed-en-ja"));
    }

    #[test]
    fn test_scopes_in_canonical_order() {
        let config = ReportConfig {
            base_dir: PathBuf::from("/videos"),
            platforms: vec!["b".to_string(), "a".to_string()],
            language_pairs: vec!["y".to_string(), "x".to_string()],
        };
        let scopes: Vec<String> = config.scopes().iter().map(|k| k.to_string()).collect();
        assert_eq!(scopes, vec!["b/y", "b/x", "a/y", "a/x"]);
    }

    #[test]
    fn test_scope_rank_follows_enumeration_not_lexicographic() {
        let config = ReportConfig::with_base_dir("/videos");
        let weixin = config.scope_rank(&ScopeKey::new("weixin", "zh-zh"));
        let douyin = config.scope_rank(&ScopeKey::new("douyin", "en-ja"));
        assert!(weixin < douyin);
        let unknown = config.scope_rank(&ScopeKey::new("youtube", "en-ja"));
        assert_eq!(unknown.0, usize::MAX);
    }

    #[test]
    fn test_restricted_to_known_platform() {
        let config = ReportConfig::with_base_dir("/videos");
        let only = config.restricted_to(Some("kuaishou"));
        assert_eq!(only.platforms, vec!["kuaishou".to_string()]);
        assert_eq!(only.language_pairs, config.language_pairs);
    }

    #[test]
    fn test_restricted_to_unknown_platform_keeps_all() {
        let config = ReportConfig::with_base_dir("/videos");
        assert_eq!(config.restricted_to(Some("youtube")), config);
        assert_eq!(config.restricted_to(None), config);
    }

    #[test]
    fn test_load_from_partial_json_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"base_dir": "/data/videos", "platforms": ["douyin"]}"#).unwrap();

        let config = ReportConfig::load_from(&path).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/data/videos"));
        assert_eq!(config.platforms, vec!["douyin".to_string()]);
        assert_eq!(config.language_pairs.len(), 6);
    }

    #[test]
    fn test_load_from_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = ReportConfig::load_from(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StatError::FileRead { .. }));
    }

    #[test]
    fn test_load_from_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = ReportConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, StatError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicate_enumerations() {
        let mut config = ReportConfig::with_base_dir("/videos");
        config.platforms.clear();
        assert!(config.validate().is_err());

        let mut config = ReportConfig::with_base_dir("/videos");
        config.language_pairs.push("en-ja".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate language pair: en-ja"));
    }

    #[test]
    fn test_check_base_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(ReportConfig::with_base_dir(tmp.path()).check_base_dir().is_ok());
        assert!(ReportConfig::with_base_dir(tmp.path().join("absent"))
            .check_base_dir()
            .is_ok());

        let file = tmp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let err = ReportConfig::with_base_dir(&file).check_base_dir().unwrap_err();
        assert!(matches!(err, StatError::InvalidBasePath(_)));

        let err = ReportConfig::with_base_dir("").check_base_dir().unwrap_err();
        assert!(matches!(err, StatError::InvalidBasePath(_)));
    }
}
