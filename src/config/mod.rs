//! Configuration file support for pagemarker.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/pagemarker/config.toml`.
//! Settings include drawing defaults, the toggle hotkey, and toolbar/page
//! preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod hotkey;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ToolbarPosition};
pub use hotkey::KeyBinding;
pub use types::{DrawingConfig, HotkeysConfig, UiConfig};

use crate::input::state::{MAX_STROKE_SIZE, MIN_STROKE_SIZE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "red"
/// default_size = 2.0
///
/// [hotkeys]
/// toggle = "F12"
///
/// [ui]
/// toolbar_position = "top-right"
/// blur_radius = 5.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing tool defaults (tool, color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Hotkey bindings
    #[serde(default)]
    pub hotkeys: HotkeysConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// User-provided values outside the valid ranges are clamped to the
    /// nearest valid value with a warning, never rejected.
    ///
    /// Validated ranges:
    /// - `default_size`: 1.0 - 50.0
    /// - `blur_radius`: 0.0 - 50.0
    fn validate_and_clamp(&mut self) {
        if !self.drawing.default_size.is_finite() {
            warn!(
                "Invalid default_size {}, using {}",
                self.drawing.default_size, 2.0
            );
            self.drawing.default_size = 2.0;
        }
        if !(MIN_STROKE_SIZE..=MAX_STROKE_SIZE).contains(&self.drawing.default_size) {
            warn!(
                "Invalid default_size {:.1}, clamping to {MIN_STROKE_SIZE}-{MAX_STROKE_SIZE} range",
                self.drawing.default_size
            );
            self.drawing.default_size = self
                .drawing
                .default_size
                .clamp(MIN_STROKE_SIZE, MAX_STROKE_SIZE);
        }

        if !self.ui.blur_radius.is_finite() {
            warn!("Invalid blur_radius {}, using {}", self.ui.blur_radius, 5.0);
            self.ui.blur_radius = 5.0;
        }
        if !(0.0..=50.0).contains(&self.ui.blur_radius) {
            warn!(
                "Invalid blur_radius {:.1}, clamping to 0.0-50.0 range",
                self.ui.blur_radius
            );
            self.ui.blur_radius = self.ui.blur_radius.clamp(0.0, 50.0);
        }
    }

    /// Default configuration file location, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pagemarker").join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// A missing file (or missing config directory) yields the defaults; a
    /// present but unreadable or malformed file is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parsed toggle binding, falling back to F12 when the configured string
    /// is invalid.
    pub fn toggle_binding(&self) -> KeyBinding {
        match KeyBinding::parse(&self.hotkeys.toggle) {
            Ok(binding) => binding,
            Err(err) => {
                warn!(
                    "Invalid toggle hotkey '{}' ({err}), falling back to F12",
                    self.hotkeys.toggle
                );
                KeyBinding::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color;
    use crate::input::{Key, Tool};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.drawing.default_size, 2.0);
        assert_eq!(config.hotkeys.toggle, "F12");
        assert_eq!(config.ui.toolbar_position, ToolbarPosition::TopRight);
        assert_eq!(config.ui.blur_radius, 5.0);
    }

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
[drawing]
default_tool = "blur"
default_color = "#00ff00"
default_size = 8.0

[hotkeys]
toggle = "Ctrl+Shift+D"

[ui]
toolbar_position = "bottom-left"
show_instructions = false
blur_radius = 12.0
"##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Blur);
        assert_eq!(config.drawing.default_color.to_color(), color::GREEN);
        assert_eq!(config.drawing.default_size, 8.0);
        assert_eq!(config.toggle_binding().key, Key::Char('d'));
        assert!(config.toggle_binding().ctrl);
        assert_eq!(config.ui.toolbar_position, ToolbarPosition::BottomLeft);
        assert!(!config.ui.show_instructions);
        assert_eq!(config.ui.blur_radius, 12.0);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\ndefault_size = 10.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_size, 10.0);
        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.hotkeys.toggle, "F12");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[drawing]\ndefault_size = 900.0\n\n[ui]\nblur_radius = -3.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_size, MAX_STROKE_SIZE);
        assert_eq!(config.ui.blur_radius, 0.0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing\ndefault_size = oops").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn invalid_toggle_hotkey_falls_back_to_f12() {
        let config = Config {
            hotkeys: HotkeysConfig {
                toggle: "Hyper+Q".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(config.toggle_binding(), KeyBinding::default());
    }
}
