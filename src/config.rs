//! Painter configuration
//!
//! Loaded from a TOML file, every field optional.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::canvas::{BLANK, BRUSH, DEFAULT_MAX_CELLS};
use crate::errors::{PainterError, Result};

/// Painter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    /// Value of untouched cells
    pub background: char,

    /// Glyph used by lines and rectangles
    pub brush: char,

    /// Top and bottom frame glyph
    pub horizontal_border: char,

    /// Left and right frame glyph
    pub vertical_border: char,

    /// Check shape endpoints before writing any cell
    pub validate_before_draw: bool,

    /// Abort the run at the first failing line
    pub stop_on_error: bool,

    /// Largest accepted canvas, in cells
    pub max_cells: usize,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            background: BLANK,
            brush: BRUSH,
            horizontal_border: '-',
            vertical_border: '|',
            validate_before_draw: true,
            stop_on_error: false,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl PainterConfig {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "ascii-painter", "ascii-painter")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| PainterError::config(format!("Invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PainterError::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PainterError::config(format!("Failed to serialize config: {e}")))
    }

    /// Reject settings the painter cannot honour.
    ///
    /// Run again after applying command-line overrides.
    pub fn validate(&self) -> Result<()> {
        if self.max_cells == 0 {
            return Err(PainterError::config("max_cells must be positive"));
        }
        for (name, ch) in [
            ("background", self.background),
            ("brush", self.brush),
            ("horizontal_border", self.horizontal_border),
            ("vertical_border", self.vertical_border),
        ] {
            if ch.is_control() {
                return Err(PainterError::config(format!("{name} must be a printable character")));
            }
        }
        Ok(())
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// when present, otherwise defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<PainterConfig> {
    if let Some(path) = path {
        return PainterConfig::from_file(path);
    }

    match PainterConfig::config_path() {
        Some(default_path) if default_path.exists() => {
            tracing::debug!("Loading config from {}", default_path.display());
            PainterConfig::from_file(&default_path)
        }
        _ => Ok(PainterConfig::default()),
    }
}
