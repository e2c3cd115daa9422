//! Current pen settings.

use crate::draw::PaletteColor;

/// Thinnest allowed pen. Thickness decreases clamp here; increases are
/// unbounded.
pub const MIN_THICKNESS: f64 = 1.0;

/// The active pen: the color and thickness applied to the next stroke.
///
/// Changing either setting never touches strokes already on the canvas; a
/// stroke copies both values at pointer-down and keeps them.
#[derive(Debug, Clone, Copy)]
pub struct ToolState {
    color: PaletteColor,
    thickness: f64,
}

impl ToolState {
    /// Creates a pen with the given starting settings. Thickness below the
    /// minimum is raised to it.
    pub fn new(color: PaletteColor, thickness: f64) -> Self {
        Self {
            color,
            thickness: thickness.max(MIN_THICKNESS),
        }
    }

    /// The active pen color.
    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// The active pen thickness in pixels.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Selects a specific palette color.
    pub fn select_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    /// Advances to the next palette color, wrapping after the last.
    pub fn cycle_color(&mut self) {
        self.color = self.color.next();
    }

    /// Thickens the pen by one pixel. No upper bound.
    pub fn increase_thickness(&mut self) {
        self.thickness += 1.0;
    }

    /// Thins the pen by one pixel, clamped at [`MIN_THICKNESS`].
    pub fn decrease_thickness(&mut self) {
        self.thickness = (self.thickness - 1.0).max(MIN_THICKNESS);
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(PaletteColor::Red, 2.0)
    }
}
