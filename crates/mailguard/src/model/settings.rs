//! Settings model.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output format.
    pub format: OutputFormat,
    /// Rows shown by `preview`.
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            preview_rows: 5,
        }
    }
}

impl Settings {
    /// Location of the settings file in the user's config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailguard")
            .join("settings.json")
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;

        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings in {}", path.display()))?;

        tracing::debug!("Settings loaded from {:?}", path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"format": "json"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.preview_rows, 5);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_default_path_file_name() {
        let path = Settings::default_path();
        assert!(path.ends_with("mailguard/settings.json"));
    }
}
