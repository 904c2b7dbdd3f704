//! Configuration type definitions.

use super::enums::{ColorSpec, ToolbarPosition};
use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool selection the overlay starts with. Users change these
/// values at runtime from the toolbar.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Tool selected when the overlay loads (pen, circle, rect, blur)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Default stroke color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a `#rrggbb` hex string, or an RGB array
    /// like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1 - 50)
    #[serde(default = "default_size")]
    pub default_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_size: default_size(),
        }
    }
}

/// Hotkey bindings.
#[derive(Debug, Serialize, Deserialize)]
pub struct HotkeysConfig {
    /// Key that toggles drawing mode, e.g. "F12" or "Ctrl+Shift+D".
    /// The host suppresses the key's default action while the overlay is
    /// listening.
    #[serde(default = "default_toggle")]
    pub toggle: String,
}

impl Default for HotkeysConfig {
    fn default() -> Self {
        Self {
            toggle: default_toggle(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Corner of the page the floating toolbar is anchored to
    #[serde(default = "default_toolbar_position")]
    pub toolbar_position: ToolbarPosition,

    /// Whether the registered page shows the instructions panel
    #[serde(default = "default_show_instructions")]
    pub show_instructions: bool,

    /// Blur strength in pixels applied by committed redaction regions
    /// (valid range: 0 - 50)
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toolbar_position: default_toolbar_position(),
            show_instructions: default_show_instructions(),
            blur_radius: default_blur_radius(),
        }
    }
}

fn default_tool() -> Tool {
    Tool::Pen
}

fn default_color() -> ColorSpec {
    ColorSpec::Named("red".to_string())
}

fn default_size() -> f64 {
    2.0
}

fn default_toggle() -> String {
    "F12".to_string()
}

fn default_toolbar_position() -> ToolbarPosition {
    ToolbarPosition::TopRight
}

fn default_show_instructions() -> bool {
    true
}

fn default_blur_radius() -> f64 {
    5.0
}
