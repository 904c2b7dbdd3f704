use super::{OverlayState, StrokeState};
use crate::input::{events::PointerButton, tool::Tool};
use crate::util::{self, Rect};
use log::debug;

impl OverlayState {
    /// Processes a pointer button press.
    ///
    /// Left press while the mode is active and no stroke is tracked starts a
    /// stroke with a snapshot of the current tool configuration. Everything
    /// else is silently ignored, which keeps host event wiring tolerant of
    /// duplicate or late events.
    pub fn on_pointer_press(&mut self, button: PointerButton, x: i32, y: i32) {
        if !self.is_active() || button != PointerButton::Left {
            return;
        }
        if self.stroke != StrokeState::Idle {
            return;
        }

        let tool = self.tool_config.tool;
        let style = self.tool_config.preview_style();

        // The pen accumulates into a surface path; shape tools redraw from
        // the stored corners instead.
        if tool == Tool::Pen {
            self.surface.begin_path(x, y, style);
        }

        self.stroke = StrokeState::Tracking {
            tool,
            style,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
        };
        debug!("Stroke started with {:?} at ({x}, {y})", tool);
    }

    /// Processes pointer motion while a button is held.
    ///
    /// Redraws the live preview: the pen extends its path incrementally,
    /// shape tools clear the surface and re-stroke from scratch using the
    /// stored start corner. No-op unless a stroke is being tracked.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        let StrokeState::Tracking {
            tool,
            style,
            start_x,
            start_y,
            current_x,
            current_y,
        } = &mut self.stroke
        else {
            return;
        };
        *current_x = x;
        *current_y = y;
        let (tool, style, start_x, start_y) = (*tool, *style, *start_x, *start_y);

        match tool {
            Tool::Pen => self.surface.extend_path(x, y),
            Tool::Circle => {
                self.surface.clear();
                let radius = util::circle_radius(start_x, start_y, x, y);
                self.surface.stroke_circle(start_x, start_y, radius, style);
            }
            // Blur previews as an outline only; its style snapshot already
            // carries the thin translucent stroke.
            Tool::Rect | Tool::Blur => {
                self.surface.clear();
                self.surface
                    .stroke_rect(Rect::from_drag(start_x, start_y, x, y), style);
            }
        }
    }

    /// Processes a pointer button release, committing the tracked stroke.
    pub fn on_pointer_release(&mut self, button: PointerButton, x: i32, y: i32) {
        if button != PointerButton::Left {
            return;
        }
        let StrokeState::Tracking {
            current_x,
            current_y,
            ..
        } = &mut self.stroke
        else {
            return;
        };
        *current_x = x;
        *current_y = y;
        self.finish_stroke();
    }

    /// Processes the pointer leaving the surface mid-stroke.
    ///
    /// Treated identically to a release: the stroke commits from the last
    /// known position rather than being discarded, so a drag that slips off
    /// the viewport edge cannot leave a stuck tracking state.
    pub fn on_pointer_leave(&mut self) {
        if let StrokeState::Tracking { .. } = self.stroke {
            self.finish_stroke();
        }
    }

    /// Resizes the transient surface to the new viewport dimensions.
    ///
    /// Resizing discards surface contents, so an in-progress preview does
    /// not survive; the stroke itself stays tracked and commits whatever the
    /// surface holds at release.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.surface.resize(width, height) {
            log::warn!("Failed to resize preview surface to {width}x{height}: {err}");
        }
    }
}
