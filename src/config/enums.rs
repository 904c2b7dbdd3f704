//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Toolbar anchor position on the page.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner (default, matching the floating toolbar placement)
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Picker-style hex string
/// default_color = "#a0213e"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black)
    /// or a `#rrggbb` hex string
    Named(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Named colors are resolved first, then hex strings; anything unknown
    /// falls back to red with a warning. RGB arrays are converted from the
    /// 0-255 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(spec) => color::name_to_color(spec)
                .or_else(|| Color::from_hex(spec))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{spec}', using red");
                    color::RED
                }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}
