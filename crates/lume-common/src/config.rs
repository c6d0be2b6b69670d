//! Global configuration model for Lume.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{LumeError, Result};

/// Root configuration, read from `config.json` in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumeConfig {
    /// Window in milliseconds within which repeated presses raise the click count.
    pub double_click_ms: u64,
    /// Whether the terminal backend enables mouse reporting.
    pub mouse: bool,
    /// Palette presentation settings.
    pub palette: PaletteConfig,
}

/// Settings for the interactive fuzzy palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Prompt rendered in front of the query.
    pub prompt: String,
    /// Maximum number of ranked rows kept and drawn.
    pub max_results: usize,
}

impl Default for LumeConfig {
    fn default() -> Self {
        Self {
            double_click_ms: constants::DEFAULT_DOUBLE_CLICK_MS,
            mouse: true,
            palette: PaletteConfig::default(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            prompt: constants::DEFAULT_PALETTE_PROMPT.to_string(),
            max_results: constants::DEFAULT_PALETTE_MAX_RESULTS,
        }
    }
}

impl LumeConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be read, `Serialization`
    /// if it is not valid JSON, and `Config` if a value is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| LumeError::io(path, e))?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.palette.max_results == 0 {
            return Err(LumeError::Config {
                message: "palette.max_results must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = LumeConfig::load(&dir.path().join("absent.json")).expect("load");
        assert_eq!(config, LumeConfig::default());
        assert_eq!(config.double_click_ms, 500);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "mouse": false, "palette": { "prompt": ": " } }"#)
            .expect("write");

        let config = LumeConfig::load(&path).expect("load");
        assert!(!config.mouse);
        assert_eq!(config.palette.prompt, ": ");
        assert_eq!(config.palette.max_results, 50);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write");

        let err = LumeConfig::load(&path).unwrap_err();
        assert!(matches!(err, LumeError::Serialization { .. }));
    }

    #[test]
    fn zero_max_results_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "palette": { "max_results": 0 } }"#).expect("write");

        let err = LumeConfig::load(&path).unwrap_err();
        assert!(matches!(err, LumeError::Config { .. }));
    }
}
