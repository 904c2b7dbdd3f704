//! Cairo image-surface implementation of [`DrawSurface`].
//!
//! Renders to an in-memory ARGB32 raster, so the overlay works headless; the
//! host composites the raster (and any committed snapshots) over its page.

use super::render;
use super::surface::{DrawSurface, ImageData, StrokeStyle, SurfaceError};
use crate::util::Rect;
use std::io::Write;

/// Active freehand path: the last point drawn and the style snapshot taken
/// when the path began.
#[derive(Debug, Clone, Copy)]
struct PathCursor {
    x: i32,
    y: i32,
    style: StrokeStyle,
}

/// In-memory cairo raster surface sized to the viewport.
pub struct RasterSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: u32,
    height: u32,
    path: Option<PathCursor>,
}

impl RasterSurface {
    /// Creates a transparent surface of the given viewport size.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let (surface, ctx) = create_backing(width, height)?;
        Ok(Self {
            surface,
            ctx,
            width,
            height,
            path: None,
        })
    }
}

fn create_backing(
    width: u32,
    height: u32,
) -> Result<(cairo::ImageSurface, cairo::Context), SurfaceError> {
    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        width.min(i32::MAX as u32) as i32,
        height.min(i32::MAX as u32) as i32,
    )?;
    let ctx = cairo::Context::new(&surface)?;
    Ok((surface, ctx))
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let (surface, ctx) = create_backing(width, height)?;
        self.surface = surface;
        self.ctx = ctx;
        self.width = width;
        self.height = height;
        // The old backing is gone, and with it any in-flight freehand path.
        self.path = None;
        Ok(())
    }

    fn clear(&mut self) {
        render::clear_context(&self.ctx);
    }

    fn begin_path(&mut self, x: i32, y: i32, style: StrokeStyle) {
        // Nothing is stroked yet; the first extend draws the first segment.
        self.path = Some(PathCursor { x, y, style });
    }

    fn extend_path(&mut self, x: i32, y: i32) {
        let Some(path) = self.path.as_mut() else {
            return;
        };
        render::render_segment(&self.ctx, path.x, path.y, x, y, path.style);
        path.x = x;
        path.y = y;
    }

    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: f64, style: StrokeStyle) {
        render::render_circle(&self.ctx, cx, cy, radius, style);
    }

    fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle) {
        render::render_rect(&self.ctx, rect, style);
    }

    fn snapshot(&mut self) -> Result<ImageData, SurfaceError> {
        self.surface.flush();

        // Paint onto a fresh surface and read that instead: cairo only hands
        // out pixel data when it holds the sole reference, and our context
        // keeps the live surface shared.
        let mut copy = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.width.min(i32::MAX as u32) as i32,
            self.height.min(i32::MAX as u32) as i32,
        )?;
        {
            let cr = cairo::Context::new(&copy)?;
            cr.set_source_surface(&self.surface, 0.0, 0.0)?;
            cr.paint()?;
        }
        copy.flush();

        let stride = copy.stride() as usize;
        let data = copy.data()?.to_vec();
        Ok(ImageData {
            width: self.width,
            height: self.height,
            stride,
            data,
        })
    }
}

/// Encodes a committed snapshot as PNG.
///
/// Used by the demo binary to export artifacts for inspection; the overlay
/// itself never persists anything.
pub fn write_png<W: Write>(image: &ImageData, out: &mut W) -> Result<(), SurfaceError> {
    let surface = cairo::ImageSurface::create_for_data(
        image.data.clone(),
        cairo::Format::ARgb32,
        image.width.min(i32::MAX as u32) as i32,
        image.height.min(i32::MAX as u32) as i32,
        image.stride.min(i32::MAX as usize) as i32,
    )?;
    surface.write_to_png(out)?;
    Ok(())
}
