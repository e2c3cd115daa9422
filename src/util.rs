//! Geometry helpers shared by the toolbar layout and hit-testing.

/// Axis-aligned rectangle in physical pixels.
///
/// Containment is inclusive on all four edges, so rectangles that share a
/// boundary pixel both report a hit there; callers resolve the tie by
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be non-negative.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside the rectangle, edges included.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}
