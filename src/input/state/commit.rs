//! Stroke finalization and the committed artifact collection.

use super::{OverlayState, StrokeState};
use crate::draw::ImageData;
use crate::input::tool::Tool;
use crate::util::Rect;
use log::{debug, warn};

/// Flattened raster snapshot of a finished stroke, pinned at the viewport
/// origin (the surface is full-viewport and fixed, so committed images do not
/// move on scroll). No vector data survives the commit; the shape cannot be
/// edited afterwards.
#[derive(Debug, Clone)]
pub struct ImageArtifact {
    pub image: ImageData,
}

/// A fixed, non-interactive region that blurs whatever sits beneath it.
///
/// No pixel data is captured: the blur is a live filter the host applies, so
/// it keeps blurring content that scrolls or changes underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct RedactionArtifact {
    /// Normalized region in viewport coordinates
    pub region: Rect,
    /// Blur strength in pixels
    pub blur_radius: f64,
}

/// A finalized, non-interactive visual element owned by the overlay page.
///
/// Created at stroke commit, destroyed only by [`OverlayState::clear_all`].
#[derive(Debug, Clone)]
pub enum Artifact {
    Image(ImageArtifact),
    Redaction(RedactionArtifact),
}

impl Artifact {
    /// Short artifact kind name for logs and demo output.
    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::Image(_) => "image",
            Artifact::Redaction(_) => "redaction",
        }
    }
}

impl OverlayState {
    /// Commits the tracked stroke as one artifact and returns to idle.
    ///
    /// Pen and shape strokes flatten the preview surface into an image;
    /// blur strokes record a redaction region instead. The surface is
    /// cleared afterwards either way, ready for the next stroke.
    pub(super) fn finish_stroke(&mut self) {
        let StrokeState::Tracking {
            tool,
            start_x,
            start_y,
            current_x,
            current_y,
            ..
        } = self.stroke
        else {
            return;
        };

        match tool {
            Tool::Blur => {
                let region = Rect::from_drag(start_x, start_y, current_x, current_y);
                debug!(
                    "Committing redaction at ({}, {}) {}x{}",
                    region.x, region.y, region.width, region.height
                );
                self.artifacts.push(Artifact::Redaction(RedactionArtifact {
                    region,
                    blur_radius: self.blur_radius,
                }));
            }
            Tool::Pen | Tool::Circle | Tool::Rect => match self.surface.snapshot() {
                Ok(image) => {
                    debug!("Committing {:?} stroke as {}x{} image", tool, image.width, image.height);
                    self.artifacts.push(Artifact::Image(ImageArtifact { image }));
                }
                Err(err) => {
                    warn!("Dropping {:?} stroke, snapshot failed: {err}", tool);
                }
            },
        }

        self.surface.clear();
        self.stroke = StrokeState::Idle;
    }

    /// Removes every committed artifact and clears the preview surface.
    ///
    /// Idempotent: calling with nothing committed is a no-op.
    pub fn clear_all(&mut self) {
        if !self.artifacts.is_empty() {
            debug!("Clearing {} committed artifacts", self.artifacts.len());
        }
        self.artifacts.clear();
        self.surface.clear();
    }

    /// Committed artifacts in commit order (first = bottom layer).
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}
