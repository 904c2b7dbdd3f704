//! Toolbar model and instructions-page copy.
//!
//! The toolbar itself is host-rendered chrome; this module owns its state
//! (which controls are enabled, where it anchors) and dispatches its control
//! events into the overlay. Nothing here draws.

use crate::config::{Config, ToolbarPosition};
use crate::draw::Color;
use crate::host::{PageContent, PageLink};
use crate::input::{OverlayState, Tool};
use log::debug;
use url::Url;

/// Community chat link shown on the instructions page.
const COMMUNITY_URL: &str = "https://pagemarker.dev/discord";
/// Author link shown on the instructions page.
const AUTHOR_URL: &str = "https://x.com/pagemarker";

/// Control events emitted by the host-rendered toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarEvent {
    /// A tool was picked from the selector
    SelectTool(Tool),
    /// The color picker produced a new color
    PickColor(Color),
    /// The numeric size input changed
    SetSize(f64),
    /// The Clear button: remove every committed artifact
    ClearAll,
    /// The Close button: leave drawing mode
    Close,
}

/// Floating toolbar state.
///
/// Visibility follows the overlay mode; the toolbar has no independent
/// show/hide state of its own.
pub struct Toolbar {
    position: ToolbarPosition,
    color_enabled: bool,
}

impl Toolbar {
    /// The four fixed options of the tool selector, in display order.
    pub const TOOLS: [Tool; 4] = [Tool::Pen, Tool::Circle, Tool::Rect, Tool::Blur];

    pub fn new(config: &Config) -> Self {
        Self {
            position: config.ui.toolbar_position,
            color_enabled: config.drawing.default_tool.uses_color(),
        }
    }

    /// Corner of the page the toolbar anchors to.
    pub fn position(&self) -> ToolbarPosition {
        self.position
    }

    /// Whether the color picker control is currently enabled.
    ///
    /// Disabled while the blur tool is selected, since redactions have no
    /// stroke color.
    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// Whether the toolbar should be shown at all.
    pub fn visible(&self, overlay: &OverlayState) -> bool {
        overlay.is_active()
    }

    /// Dispatches a toolbar control event into the overlay.
    pub fn apply(&mut self, event: ToolbarEvent, overlay: &mut OverlayState) {
        match event {
            ToolbarEvent::SelectTool(tool) => {
                overlay.tool_config.tool = tool;
                self.color_enabled = tool.uses_color();
                debug!("Toolbar switched tool to {}", tool.label());
            }
            ToolbarEvent::PickColor(color) => {
                if self.color_enabled {
                    overlay.tool_config.color = color;
                } else {
                    // A late event from a control that is already disabled;
                    // the stored color must survive untouched.
                    debug!("Ignoring color pick while the picker is disabled");
                }
            }
            ToolbarEvent::SetSize(size) => overlay.tool_config.set_size(size),
            ToolbarEvent::ClearAll => overlay.clear_all(),
            ToolbarEvent::Close => {
                if overlay.is_active() {
                    overlay.toggle_mode();
                }
            }
        }
    }
}

/// Builds the instructions page registered with the host.
///
/// Names the configured toggle hotkey so the copy stays accurate when the
/// user rebinds it.
pub fn instructions_page(config: &Config) -> PageContent {
    let body = if config.ui.show_instructions {
        vec![
            "This plugin lets you draw on top of the page.".to_string(),
            format!(
                "Press {} to toggle drawing mode on and off.",
                config.hotkeys.toggle
            ),
            "Use the toolbar to pick a tool, color, and stroke size; the blur \
             tool redacts a region instead of drawing."
                .to_string(),
            format!(
                "Press {} again or click Close to go back to the page.",
                config.hotkeys.toggle
            ),
        ]
    } else {
        Vec::new()
    };

    PageContent {
        title: "Screen Drawing".to_string(),
        body,
        links: page_links(),
    }
}

fn page_links() -> Vec<PageLink> {
    [
        ("Join the community", COMMUNITY_URL),
        ("Follow the author", AUTHOR_URL),
    ]
    .into_iter()
    .filter_map(|(label, target)| {
        Url::parse(target).ok().map(|target| PageLink {
            label: label.to_string(),
            target,
        })
    })
    .collect()
}
