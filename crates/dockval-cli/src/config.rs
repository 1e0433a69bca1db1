//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`DOCKVAL__OUTPUT__FORMAT=json`)
//! 3. The file passed with `--config`
//! 4. `.dockval.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// File name used by `dockval init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".dockval.toml";

const ENV_PREFIX: &str = "DOCKVAL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Validation settings.
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fixed evaluation instant for docking times. Unset means the clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now: Option<DateTime<Utc>>,
}

impl AppConfig {
    /// Load configuration by layering every source over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`. It must
    /// exist; the default and local files are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path(), Path::new(LOCAL_CONFIG_FILE), config_file)
    }

    fn load_from(
        user_file: &Path,
        local_file: &Path,
        config_file: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(toml_file(user_file).required(false))
            .add_source(toml_file(local_file).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(toml_file(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dockval.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dockval", "dockval")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key, as printed by `dockval config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.to_string()),
            "validation.now" => Some(
                self.validation
                    .now
                    .map(|at| at.to_rfc3339())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert_eq!(cfg.validation.now, None);
    }

    #[test]
    fn missing_optional_files_give_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(
            &dir.path().join("nope.toml"),
            &dir.path().join("also-nope.toml"),
            None,
        )
        .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn explicit_file_overrides_local_file() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("local.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&local, "[output]\nformat = \"plain\"\nno_color = true\n").unwrap();
        fs::write(
            &explicit,
            "[output]\nformat = \"json\"\n\n[validation]\nnow = \"2030-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&dir.path().join("user.toml"), &local, Some(&explicit))
            .unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.no_color);
        assert_eq!(
            cfg.get("validation.now").as_deref(),
            Some("2030-01-01T00:00:00+00:00")
        );
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = AppConfig::load_from(
            &dir.path().join("user.toml"),
            &dir.path().join("local.toml"),
            Some(&missing),
        );
        assert!(result.is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("output.format").as_deref(), Some("auto"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("validation.now").as_deref(), Some(""));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
