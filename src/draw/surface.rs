//! Transient drawing surface abstraction.
//!
//! The stroke tracker never talks to cairo directly; it drives a
//! [`DrawSurface`], which keeps the state machine testable without any
//! windowing environment. The production implementation is the cairo-backed
//! [`RasterSurface`](super::raster::RasterSurface).

use super::color::Color;
use crate::util::Rect;
use thiserror::Error;

/// Stroke appearance captured when a stroke begins.
///
/// The tracker snapshots this from the tool configuration on pointer-press so
/// that toolbar changes mid-stroke cannot alter the stroke being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
}

/// Raster snapshot of surface contents.
///
/// Pixel data is ARGB32 (pre-multiplied, native endian) with `stride` bytes
/// per row, matching the cairo image format the raster surface uses.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// Bytes per pixel row (may exceed `width * 4` for alignment)
    pub stride: usize,
    pub data: Vec<u8>,
}

impl ImageData {
    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|byte| *byte == 0)
    }
}

/// Errors from the raster surface backend.
///
/// Nothing in the overlay treats these as fatal; a failed snapshot is logged
/// and the affected artifact dropped.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cairo surface error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("surface pixels unavailable: {0}")]
    Pixels(#[from] cairo::BorrowError),
    #[error("png encode failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Full-viewport transient drawing surface for live stroke preview.
///
/// Contents are always discardable: shape tools clear and redraw the whole
/// surface on every pointer motion, and the surface is cleared after every
/// commit. Resizing discards contents as well.
///
/// Freehand strokes are the one exception to clear-and-redraw: they extend an
/// accumulating path segment by segment via [`begin_path`](Self::begin_path) /
/// [`extend_path`](Self::extend_path) without clearing.
pub trait DrawSurface {
    /// Current surface dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Resizes the surface to the new viewport, discarding any contents.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Clears the entire surface back to transparent.
    fn clear(&mut self);

    /// Starts a freehand path at the given point with the given style.
    ///
    /// Nothing is drawn until the first [`extend_path`](Self::extend_path).
    fn begin_path(&mut self, x: i32, y: i32, style: StrokeStyle);

    /// Extends the active freehand path to the given point, drawing the new
    /// segment. A no-op when no path is active (e.g. after a resize dropped
    /// it mid-stroke).
    fn extend_path(&mut self, x: i32, y: i32);

    /// Strokes a circle outline centered at (`cx`, `cy`).
    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: f64, style: StrokeStyle);

    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle);

    /// Rasterizes the current contents to an immutable image.
    fn snapshot(&mut self) -> Result<ImageData, SurfaceError>;
}
