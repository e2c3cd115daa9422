//! Stroke definition for freehand drawing.

use super::color::PaletteColor;

/// A point in physical-pixel (framebuffer) coordinates.
pub type Point = (f64, f64);

/// One continuous freehand line: a polyline through the points the pointer
/// visited while the primary button was held, sharing one color and
/// thickness.
///
/// Points are append-only while the stroke is open and never change after the
/// button is released. A stroke with zero or one point is legal; it simply
/// has nothing visible to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Sequence of points traced by the pointer, in visit order.
    pub points: Vec<Point>,
    /// Pen color, fixed at pointer-down.
    pub color: PaletteColor,
    /// Line thickness in pixels, fixed at pointer-down. Always >= 1.0.
    pub thickness: f64,
}

impl Stroke {
    /// Starts a new stroke at `origin` with the given pen settings.
    pub fn begin(origin: Point, color: PaletteColor, thickness: f64) -> Self {
        Self {
            points: vec![origin],
            color,
            thickness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_seeds_the_stroke_with_its_origin() {
        let stroke = Stroke::begin((500.0, 300.0), PaletteColor::Blue, 3.0);
        assert_eq!(stroke.points, vec![(500.0, 300.0)]);
        assert_eq!(stroke.color, PaletteColor::Blue);
        assert_eq!(stroke.thickness, 3.0);
    }
}
