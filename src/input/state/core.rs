//! Overlay session state and mode controller.

use super::commit::Artifact;
use crate::draw::{Color, DrawSurface, StrokeStyle};
use crate::input::tool::Tool;

/// Minimum stroke width accepted from the toolbar or config.
pub const MIN_STROKE_SIZE: f64 = 1.0;
/// Maximum stroke width accepted from the toolbar or config.
pub const MAX_STROKE_SIZE: f64 = 50.0;

/// Outline style for the blur-redaction drag preview.
///
/// Redactions have no stroke color of their own, so the preview is always a
/// thin translucent outline regardless of the configured color and size.
const REDACTION_PREVIEW: StrokeStyle = StrokeStyle {
    color: Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.5,
    },
    width: 1.0,
};

/// Whether the overlay currently intercepts pointer input.
///
/// While `Inactive` the drawing layer passes pointer events through to the
/// page beneath, and every pointer handler is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Drawing disabled - the page beneath stays usable (initial state)
    Inactive,
    /// Drawing enabled - pointer input is captured by the overlay
    Active,
}

/// Pointer cursor affordance the host should show for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Normal page cursor
    Default,
    /// Drawing crosshair
    Crosshair,
}

/// Current tool configuration, written by the toolbar and read by the stroke
/// tracker at stroke start.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Active drawing tool
    pub tool: Tool,
    /// Stroke color for the pen and shape tools
    pub color: Color,
    /// Stroke width in pixels, clamped to 1-50
    size: f64,
}

impl ToolConfig {
    pub fn new(tool: Tool, color: Color, size: f64) -> Self {
        let mut config = Self {
            tool,
            color,
            size: MIN_STROKE_SIZE,
        };
        config.set_size(size);
        config
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Sets the stroke width, clamping out-of-range values instead of
    /// rejecting them.
    pub fn set_size(&mut self, size: f64) {
        if !size.is_finite() {
            log::warn!("Ignoring non-finite stroke size {size}");
            return;
        }
        let clamped = size.clamp(MIN_STROKE_SIZE, MAX_STROKE_SIZE);
        if clamped != size {
            log::warn!(
                "Stroke size {size} out of range, clamping to {MIN_STROKE_SIZE}-{MAX_STROKE_SIZE}"
            );
        }
        self.size = clamped;
    }

    /// Style snapshot for a stroke starting now with the active tool.
    pub(crate) fn preview_style(&self) -> StrokeStyle {
        match self.tool {
            Tool::Blur => REDACTION_PREVIEW,
            _ => StrokeStyle {
                color: self.color,
                width: self.size,
            },
        }
    }
}

/// Stroke tracking state machine.
///
/// `Idle -> Tracking` on pointer-press (mode permitting), `Tracking -> Idle`
/// on release, leave, or mode deactivation. At most one stroke is tracked at
/// a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Not tracking - waiting for a pointer press
    Idle,
    /// A pointer button is held and a stroke is in progress
    Tracking {
        /// Tool pinned at press time (toolbar changes mid-stroke wait for
        /// the next stroke)
        tool: Tool,
        /// Style snapshot taken at press time
        style: StrokeStyle,
        /// Where the pointer went down
        start_x: i32,
        start_y: i32,
        /// Latest pointer position
        current_x: i32,
        current_y: i32,
    },
}

/// The overlay session: mode controller, stroke tracker, and the committed
/// artifact collection, owning the transient preview surface.
///
/// This consolidates everything the overlay mutates into one explicitly
/// owned struct; the host wires its pointer/key/resize events straight into
/// the `on_*` handlers.
pub struct OverlayState {
    /// Current tool/color/size selection (written by the toolbar)
    pub tool_config: ToolConfig,
    pub(super) mode: Mode,
    pub(super) stroke: StrokeState,
    pub(super) surface: Box<dyn DrawSurface>,
    pub(super) artifacts: Vec<Artifact>,
    pub(super) blur_radius: f64,
}

impl OverlayState {
    /// Creates an inactive overlay drawing to the given transient surface.
    ///
    /// # Arguments
    /// * `surface` - Full-viewport preview surface (cairo raster in production)
    /// * `tool_config` - Startup tool/color/size selection
    /// * `blur_radius` - Blur strength applied by committed redaction regions
    pub fn new(surface: Box<dyn DrawSurface>, tool_config: ToolConfig, blur_radius: f64) -> Self {
        Self {
            tool_config,
            mode: Mode::Inactive,
            stroke: StrokeState::Idle,
            surface,
            artifacts: Vec::new(),
            blur_radius,
        }
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true while drawing interaction is enabled.
    pub fn is_active(&self) -> bool {
        self.mode == Mode::Active
    }

    /// Current stroke tracking state.
    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    /// Cursor affordance for the current mode.
    pub fn cursor(&self) -> Cursor {
        match self.mode {
            Mode::Active => Cursor::Crosshair,
            Mode::Inactive => Cursor::Default,
        }
    }

    /// Whether the transient surface should intercept pointer events.
    ///
    /// Mirrors the mode: when inactive the surface passes events through so
    /// the page beneath remains usable.
    pub fn intercepts_pointer(&self) -> bool {
        self.is_active()
    }

    /// Flips the interaction mode.
    ///
    /// Deactivating mid-stroke abandons the in-progress preview without
    /// committing, so a later press after re-activation starts fresh.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Active => Mode::Inactive,
            Mode::Inactive => Mode::Active,
        };

        if self.mode == Mode::Inactive && self.stroke != StrokeState::Idle {
            self.stroke = StrokeState::Idle;
            self.surface.clear();
        }

        log::debug!("Overlay mode toggled to {:?}", self.mode);
    }

    /// Current transient surface dimensions.
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface.size()
    }
}
