use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::constants::{APP_NAME, CONFIG_FILE_NAME, ENV_PREFIX, LOCAL_CONFIG_DIR};
use crate::scanner::ScanConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Walker and extraction settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

/// Load configuration from multiple sources
///
/// Later sources win: defaults, global config, `.symscan/config.toml`,
/// an explicit `--config` file, then `SYMSCAN_` environment variables
/// (`SYMSCAN_SCAN__MAX_DEPTH=3` sets `scan.max_depth`).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut files = Vec::new();

    if let Some(config_dir) = get_config_dir() {
        files.push(config_dir.join(CONFIG_FILE_NAME));
    }
    files.push(PathBuf::from(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME));

    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        files.push(path.to_path_buf());
    }

    extract_config(&files)
}

fn extract_config(files: &[PathBuf]) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    for file in files.iter().filter(|f| f.is_file()) {
        figment = figment.merge(Toml::file(file));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .context("Failed to load configuration")
}

/// Get the global configuration directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
        return Some(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to home directory
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
}

/// Save configuration to file
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default global configuration file if it doesn't exist
///
/// Returns the file path and whether it was newly written.
pub fn init_config() -> Result<(PathBuf, bool)> {
    let config_dir = get_config_dir().context("Could not determine config directory")?;
    let config_file = config_dir.join(CONFIG_FILE_NAME);

    if config_file.exists() {
        return Ok((config_file, false));
    }

    save_config(&Config::default(), &config_file)?;
    Ok((config_file, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let config = extract_config(&[]).unwrap();
        assert_eq!(config.scan, ScanConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_later_files_override_earlier() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let local = temp_dir.path().join("local.toml");
        std::fs::write(&global, "[scan]\nmax_depth = 4\nparallel = false\n").unwrap();
        std::fs::write(&local, "[scan]\nmax_depth = 1\n\n[output]\nformat = \"json\"\n").unwrap();

        let config = extract_config(&[global, local, temp_dir.path().join("absent.toml")]).unwrap();

        assert_eq!(config.scan.max_depth, Some(1));
        assert!(!config.scan.parallel);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let mut config = Config::default();
        config.scan.exclude_patterns = vec!["*.generated.ts".to_string()];
        config.output.pretty = false;
        save_config(&config, &path).unwrap();

        assert_eq!(extract_config(&[path]).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
