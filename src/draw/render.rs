//! Cairo stroke routines for live preview shapes.
//!
//! Shared by the raster surface; render errors are swallowed because a failed
//! preview stroke only costs one frame of feedback.

use super::surface::StrokeStyle;
use crate::util::Rect;

/// Applies a stroke style to the context: color, width, round caps.
///
/// Round line caps keep fast freehand strokes from showing gaps between
/// segments, matching how the pen accumulates point-by-point.
pub fn apply_style(ctx: &cairo::Context, style: StrokeStyle) {
    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Strokes one freehand segment from (`x1`, `y1`) to (`x2`, `y2`).
pub fn render_segment(ctx: &cairo::Context, x1: i32, y1: i32, x2: i32, y2: i32, style: StrokeStyle) {
    apply_style(ctx, style);
    ctx.new_path();
    ctx.move_to(x1 as f64, y1 as f64);
    ctx.line_to(x2 as f64, y2 as f64);
    let _ = ctx.stroke();
}

/// Strokes a circle outline centered at (`cx`, `cy`).
pub fn render_circle(ctx: &cairo::Context, cx: i32, cy: i32, radius: f64, style: StrokeStyle) {
    apply_style(ctx, style);
    ctx.new_path();
    ctx.arc(cx as f64, cy as f64, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.stroke();
}

/// Strokes a rectangle outline.
pub fn render_rect(ctx: &cairo::Context, rect: Rect, style: StrokeStyle) {
    apply_style(ctx, style);
    ctx.new_path();
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.stroke();
}

/// Clears the whole context back to transparent.
pub fn clear_context(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}
