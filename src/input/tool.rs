//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what the drag preview shows and what kind of
/// artifact a finished stroke commits. Tools are selected from the toolbar;
/// the config file sets the startup default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Pen,
    /// Circle outline - centered on the drag start, radius to the pointer
    Circle,
    /// Rectangle outline - from corner to corner
    Rect,
    /// Blur redaction - marks a region that blurs underlying content
    Blur,
}

impl Tool {
    /// Human-readable tool name for the toolbar and demo output.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Circle => "Circle",
            Tool::Rect => "Rectangle",
            Tool::Blur => "Blur",
        }
    }

    /// Whether strokes with this tool carry a visible stroke color.
    ///
    /// The blur tool has none, so the toolbar disables its color control
    /// while blur is selected.
    pub fn uses_color(&self) -> bool {
        !matches!(self, Tool::Blur)
    }
}
