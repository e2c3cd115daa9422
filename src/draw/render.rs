//! Cairo-based rendering primitives.
//!
//! The renderer surface is deliberately small: everything on screen is built
//! from filled rectangles (toolbar background, swatches, buttons) and
//! polylines (strokes).

use super::color::Color;
use super::stroke::Stroke;

/// Draws a filled axis-aligned rectangle.
pub fn fill_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();
}

/// Renders all strokes of a canvas in draw order (first = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke as a polyline with round caps and joins.
///
/// Strokes with fewer than two points have no visible extent and are
/// skipped; they are legal data, not an error.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    if stroke.points.len() < 2 {
        return;
    }

    let color = stroke.color.color();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke.thickness);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x0, y0) = stroke.points[0];
    ctx.move_to(x0, y0);
    for &(x, y) in &stroke.points[1..] {
        ctx.line_to(x, y);
    }

    let _ = ctx.stroke();
}
