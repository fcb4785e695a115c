//! Configuration loading from gravmap.toml.
//!
//! Follows conventions from ruff, black, mypy for familiarity: a
//! standalone `gravmap.toml` in the vault root, found by walking up from
//! the scanned directory.
//!
//! ## Example
//!
//! ```toml
//! extend-exclude = ["Archive", "Daily"]
//! top-n = 30
//! iterations = 50
//! damping = 0.85
//! tolerance = 1e-8
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::PageRankConfig;

/// Folders that never contain notes. Vault plumbing (.obsidian, .trash)
/// and the usual repository noise.
pub const DEFAULT_SKIP_FOLDERS: &[&str] = &[
    ".obsidian",
    ".git",
    ".trash",
    "node_modules",
    "__pycache__",
    ".DS_Store",
];

/// Vault analysis configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    /// Additional folder names to skip (extends the defaults).
    pub extend_exclude: Vec<String>,

    /// How many notes the report lists.
    pub top_n: Option<usize>,

    /// PageRank iteration count override.
    pub iterations: Option<usize>,

    /// PageRank damping override.
    pub damping: Option<f64>,

    /// Optional PageRank early-exit tolerance.
    pub tolerance: Option<f64>,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    extend_exclude: Option<Vec<String>>,
    top_n: Option<usize>,
    iterations: Option<usize>,
    damping: Option<f64>,
    tolerance: Option<f64>,
}

impl Config {
    /// Load configuration for the given vault directory.
    ///
    /// Search order:
    /// 1. gravmap.toml in the directory
    /// 2. Walk up parents looking for gravmap.toml
    /// 3. Default config if nothing found
    pub fn load(directory: &Path) -> Self {
        let candidate = directory.join("gravmap.toml");
        if candidate.exists() {
            if let Some(config) = Self::load_toml(&candidate) {
                return config;
            }
        }

        let mut current = directory.to_path_buf();
        while let Some(parent) = current.parent() {
            let candidate = parent.join("gravmap.toml");
            if candidate.exists() {
                if let Some(config) = Self::load_toml(&candidate) {
                    return config;
                }
            }
            current = parent.to_path_buf();
        }

        Self::default()
    }

    fn load_toml(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        Self {
            source: Some(source),
            extend_exclude: raw.extend_exclude.unwrap_or_default(),
            top_n: raw.top_n,
            iterations: raw.iterations,
            damping: raw.damping,
            tolerance: raw.tolerance,
        }
    }

    /// Effective skip-folder list: defaults plus extend-exclude.
    pub fn skip_folders(&self) -> Vec<String> {
        let mut folders: Vec<String> = DEFAULT_SKIP_FOLDERS.iter().map(|s| s.to_string()).collect();
        folders.extend(self.extend_exclude.clone());
        folders
    }

    /// PageRank settings with config overrides applied over the defaults.
    pub fn pagerank_config(&self) -> PageRankConfig {
        let defaults = PageRankConfig::default();
        PageRankConfig {
            damping: self.damping.unwrap_or(defaults.damping),
            iterations: self.iterations.unwrap_or(defaults.iterations),
            tolerance: self.tolerance.or(defaults.tolerance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skip_folders() {
        let config = Config::default();
        let folders = config.skip_folders();
        assert!(folders.contains(&".obsidian".to_string()));
        assert!(folders.contains(&".git".to_string()));
        assert!(folders.contains(&"node_modules".to_string()));
    }

    #[test]
    fn test_extend_exclude_appends() {
        let config = Config {
            extend_exclude: vec!["Archive".to_string()],
            ..Default::default()
        };
        let folders = config.skip_folders();
        assert!(folders.contains(&".obsidian".to_string()));
        assert!(folders.contains(&"Archive".to_string()));
    }

    #[test]
    fn test_raw_config_parsing() {
        let raw: RawConfig = toml::from_str(
            r#"
            extend-exclude = ["Archive"]
            top-n = 25
            iterations = 80
            damping = 0.9
            "#,
        )
        .expect("valid toml");
        let config = Config::from_raw(raw, PathBuf::from("gravmap.toml"));

        assert_eq!(config.extend_exclude, vec!["Archive".to_string()]);
        assert_eq!(config.top_n, Some(25));
        assert_eq!(config.iterations, Some(80));
        assert_eq!(config.damping, Some(0.9));
        assert_eq!(config.tolerance, None);
    }

    #[test]
    fn test_pagerank_overrides() {
        let config = Config {
            iterations: Some(80),
            ..Default::default()
        };
        let pr = config.pagerank_config();
        assert_eq!(pr.iterations, 80);
        assert_eq!(pr.damping, 0.85);
        assert_eq!(pr.tolerance, None);
    }

    #[test]
    fn test_defaults_when_no_file() {
        let config = Config::load(Path::new("/nonexistent/vault/xyz"));
        assert!(config.source.is_none());
        assert_eq!(config.pagerank_config().iterations, 50);
    }
}
