use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user defaults from `~/.config/termspin/config.toml`.
///
/// Every key is optional; unset keys fall back to the preset's own values.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mode: Option<String>,
    pub grid: Option<usize>,
    pub glyph: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub time: Option<f32>, // Seconds per frame
    pub status: Option<bool>,
}

impl Settings {
    /// Load settings, warning on stderr and using defaults if the file is bad.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("warning: {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse a settings file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termspin")
            .join("config.toml")
    }
}
