//! Canvas container: the ordered collection of strokes.

use super::stroke::{Point, Stroke};

/// The drawing document: every stroke of the current session, in the order it
/// was drawn (first = bottom layer, last = top layer).
///
/// The canvas lives for the whole process; there is no persistence across
/// runs. Growth is unbounded by design, acceptable for an interactive tool
/// with a bounded session length.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    strokes: Vec<Stroke>,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new stroke on top of the existing ones.
    pub fn begin_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Appends a point to the most recent stroke.
    ///
    /// Silent no-op when the canvas holds no strokes. This happens when the
    /// canvas is cleared (or fully undone) mid-drag; the remaining motion
    /// events of that drag are dropped until the button is released.
    pub fn add_point(&mut self, point: Point) {
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.points.push(point);
        }
    }

    /// Removes and returns the most recently drawn stroke; `None` (and no
    /// change) when the canvas is empty.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes all strokes. Idempotent.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// All strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes currently on the canvas.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns true when no strokes are present.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
