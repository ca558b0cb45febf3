//! Configuration module for repo-lens

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::context::ExplanationContext;
use crate::error::{Error, Result};
use crate::search::DEFAULT_MAX_RESULTS;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of quick-open results
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum picker height in lines
    #[serde(default = "default_height")]
    pub height: u16,

    /// Show border
    #[serde(default = "default_border")]
    pub border: bool,

    /// How much of a file accompanies an explanation request
    #[serde(default)]
    pub explanation_context: ExplanationContext,

    /// Path components skipped when walking a local checkout
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    /// Colors
    #[serde(default)]
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    #[serde(default = "default_fg")]
    pub fg: String,

    #[serde(default = "default_bg")]
    pub bg: String,

    #[serde(default = "default_highlight")]
    pub highlight: String,

    #[serde(default = "default_border_color")]
    pub border: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            height: default_height(),
            border: default_border(),
            explanation_context: ExplanationContext::default(),
            ignore_patterns: default_ignore_patterns(),
            colors: Colors::default(),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            fg: default_fg(),
            bg: default_bg(),
            highlight: default_highlight(),
            border: default_border_color(),
        }
    }
}

/// Smallest usable picker: input box plus one bordered result line
pub const MIN_HEIGHT: u16 = 6;

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_height() -> u16 {
    40
}

fn default_border() -> bool {
    true
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        ".git".to_string(),
        "node_modules".to_string(),
        "target".to_string(),
        "__pycache__".to_string(),
    ]
}

fn default_fg() -> String {
    "#eceff4".to_string()
}

fn default_bg() -> String {
    "#2e3440".to_string()
}

fn default_highlight() -> String {
    "#88c0d0".to_string()
}

fn default_border_color() -> String {
    "#4c566a".to_string()
}

/// `$XDG_CONFIG_HOME/repo-lens/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("repo-lens/config.toml"))
}

impl Config {
    /// Load configuration from an explicit file, the XDG location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            if p.exists() {
                return Self::from_file(p);
            }
            debug!("config {} not found, falling back", p.display());
        }

        if let Some(config_file) = default_config_path() {
            if config_file.exists() {
                return Self::from_file(&config_file);
            }
        }

        Ok(Self::default())
    }

    /// Lines the picker may occupy out of `available` terminal rows
    pub fn picker_height(&self, available: u16) -> u16 {
        self.height.max(MIN_HEIGHT).min(available)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = toml::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_results, 20);
        assert_eq!(config.explanation_context, ExplanationContext::Full);
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let config: Config = toml::from_str(
            r##"
            max_results = 5
            explanation_context = "partial"
            height = 12

            [colors]
            highlight = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.max_results, 5);
        assert_eq!(config.explanation_context, ExplanationContext::Partial);
        assert_eq!(config.height, 12);
        assert_eq!(config.colors.highlight, "#ff0000");
        assert_eq!(config.colors.fg, default_fg());
        assert_eq!(config.ignore_patterns, default_ignore_patterns());
    }

    #[test]
    fn test_picker_height_is_clamped() {
        let mut config = Config::default();
        assert_eq!(config.picker_height(100), 40);
        assert_eq!(config.picker_height(24), 24);

        config.height = 2;
        assert_eq!(config.picker_height(100), MIN_HEIGHT);
        assert_eq!(config.picker_height(3), 3);
    }

    #[test]
    fn test_unknown_context_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(r#"explanation_context = "some""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_then_load_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let mut config = Config::default();
        config.height = 12;
        config.colors.bg = "#000000".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "height = \"tall\"").unwrap();

        assert!(matches!(Config::load(Some(&path)), Err(Error::Toml(_))));
    }
}
