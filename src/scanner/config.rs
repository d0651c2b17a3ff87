use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FILE_SIZE, DEFAULT_SKIP_DIRS};

/// Configuration for a project scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Files larger than this (in bytes) are skipped
    pub max_file_size: u64,
    /// Maximum directory depth below the root (unlimited when unset)
    pub max_depth: Option<usize>,
    /// Include dotfiles and dot-directories
    pub include_hidden: bool,
    /// Honour .gitignore, .ignore and git exclude files
    pub respect_gitignore: bool,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Directory names that are never descended into
    pub skip_dirs: Vec<String>,
    /// Extra glob patterns to exclude, relative to the root
    pub exclude_patterns: Vec<String>,
    /// Extract files on the rayon pool
    pub parallel: bool,
    /// Worker count for a dedicated pool (rayon's global pool when unset)
    pub threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: None,
            include_hidden: true,
            respect_gitignore: true,
            follow_links: false,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            exclude_patterns: vec![],
            parallel: true,
            threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ScanConfig = toml::from_str("max_depth = 2\nparallel = false\n").unwrap();

        assert_eq!(config.max_depth, Some(2));
        assert!(!config.parallel);
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert!(config.skip_dirs.iter().any(|d| d == "node_modules"));
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let original = ScanConfig::default();
        let text = toml::to_string_pretty(&original).unwrap();
        let parsed: ScanConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
