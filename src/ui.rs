//! Toolbar layout, hit-testing, and toolbar rendering.
//!
//! The toolbar is described once, as a declarative table of control
//! rectangles. Hit-testing and rendering both consume that table, so the
//! clickable regions can never drift away from what is drawn.

use crate::draw::{Color, PaletteColor, fill_rect};
use crate::input::ToolState;
use crate::util::Rect;

/// Height of the toolbar band in physical pixels. Pointer activity below
/// this line is canvas drawing, never a toolbar interaction.
pub const TOOLBAR_HEIGHT: f64 = 70.0;

/// Identity of one toolbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Select the given pen color.
    Swatch(PaletteColor),
    /// Increase stroke thickness by one pixel.
    ThickenStroke,
    /// Decrease stroke thickness by one pixel (floor 1.0).
    ThinStroke,
    /// Remove the most recent stroke.
    Undo,
    /// Remove every stroke.
    Clear,
}

/// One toolbar control and its clickable rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ControlRect {
    pub control: Control,
    pub rect: Rect,
}

/// The toolbar, in declaration order. Hit-testing returns the first match,
/// so earlier entries win on shared boundary pixels: swatches before the
/// thickness buttons before undo before clear.
pub const TOOLBAR_LAYOUT: [ControlRect; 8] = [
    ControlRect {
        control: Control::Swatch(PaletteColor::Red),
        rect: Rect::new(20.0, 20.0, 40.0, 40.0),
    },
    ControlRect {
        control: Control::Swatch(PaletteColor::Green),
        rect: Rect::new(70.0, 20.0, 40.0, 40.0),
    },
    ControlRect {
        control: Control::Swatch(PaletteColor::Blue),
        rect: Rect::new(120.0, 20.0, 40.0, 40.0),
    },
    ControlRect {
        control: Control::Swatch(PaletteColor::Black),
        rect: Rect::new(170.0, 20.0, 40.0, 40.0),
    },
    ControlRect {
        control: Control::ThickenStroke,
        rect: Rect::new(230.0, 20.0, 70.0, 40.0),
    },
    ControlRect {
        control: Control::ThinStroke,
        rect: Rect::new(310.0, 20.0, 70.0, 40.0),
    },
    ControlRect {
        control: Control::Undo,
        rect: Rect::new(390.0, 20.0, 80.0, 40.0),
    },
    ControlRect {
        control: Control::Clear,
        rect: Rect::new(480.0, 20.0, 80.0, 40.0),
    },
];

/// Returns true when the point lies inside the toolbar band.
pub fn in_toolbar_band(y: f64) -> bool {
    y < TOOLBAR_HEIGHT
}

/// Resolves which control a physical-pixel point targets, if any.
///
/// Pure classification: the caller performs the resulting mutation. Points
/// outside the toolbar band never hit a control, regardless of x.
pub fn hit_test(x: f64, y: f64) -> Option<Control> {
    if !in_toolbar_band(y) {
        return None;
    }
    first_hit(&TOOLBAR_LAYOUT, x, y)
}

/// First entry whose rect contains the point, in table order. With
/// overlapping rects the earlier entry wins.
fn first_hit(layout: &[ControlRect], x: f64, y: f64) -> Option<Control> {
    layout
        .iter()
        .find(|entry| entry.rect.contains(x, y))
        .map(|entry| entry.control)
}

// ============================================================================
// Toolbar rendering
// ============================================================================

/// Toolbar band background.
const TOOLBAR_BG: Color = Color::rgb(0.93, 0.93, 0.93);
/// Thickness button fill.
const BUTTON_BG: Color = Color::rgb(0.8, 0.8, 0.8);
/// Undo button fill.
const UNDO_BG: Color = Color::rgb(0.9, 0.7, 0.7);
/// Clear button fill.
const CLEAR_BG: Color = Color::rgb(0.7, 0.9, 0.7);
/// Outline drawn around the currently selected swatch.
const SELECTED_OUTLINE: Color = Color::rgb(0.3, 0.3, 0.3);

/// Renders the toolbar band and all controls from [`TOOLBAR_LAYOUT`].
///
/// `width` is the full surface width in physical pixels; the band always
/// spans it. The selected swatch gets a dark outline.
pub fn render_toolbar(ctx: &cairo::Context, tools: &ToolState, width: f64) {
    fill_rect(ctx, 0.0, 0.0, width, TOOLBAR_HEIGHT, TOOLBAR_BG);

    for entry in &TOOLBAR_LAYOUT {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = entry.rect;

        match entry.control {
            Control::Swatch(palette_color) => {
                fill_rect(ctx, x, y, w, h, palette_color.color());
                if palette_color == tools.color() {
                    ctx.set_source_rgba(
                        SELECTED_OUTLINE.r,
                        SELECTED_OUTLINE.g,
                        SELECTED_OUTLINE.b,
                        SELECTED_OUTLINE.a,
                    );
                    ctx.set_line_width(3.0);
                    ctx.rectangle(x, y, w, h);
                    let _ = ctx.stroke();
                }
            }
            Control::ThickenStroke | Control::ThinStroke => {
                fill_rect(ctx, x, y, w, h, BUTTON_BG);
            }
            Control::Undo => {
                fill_rect(ctx, x, y, w, h, UNDO_BG);
            }
            Control::Clear => {
                fill_rect(ctx, x, y, w, h, CLEAR_BG);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PALETTE;

    #[test]
    fn swatch_layout_follows_palette_order() {
        let swatches: Vec<PaletteColor> = TOOLBAR_LAYOUT
            .iter()
            .filter_map(|entry| match entry.control {
                Control::Swatch(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(swatches, PALETTE.to_vec());
    }

    #[test]
    fn hit_test_resolves_each_control_at_its_center() {
        for entry in &TOOLBAR_LAYOUT {
            let cx = entry.rect.x + entry.rect.width / 2.0;
            let cy = entry.rect.y + entry.rect.height / 2.0;
            assert_eq!(hit_test(cx, cy), Some(entry.control));
        }
    }

    #[test]
    fn hit_test_edges_are_inclusive() {
        // Exact corners and edges of the red swatch.
        assert_eq!(
            hit_test(20.0, 20.0),
            Some(Control::Swatch(PaletteColor::Red))
        );
        assert_eq!(
            hit_test(60.0, 60.0),
            Some(Control::Swatch(PaletteColor::Red))
        );
        assert_eq!(
            hit_test(60.0, 40.0),
            Some(Control::Swatch(PaletteColor::Red))
        );
    }

    #[test]
    fn overlapping_rects_resolve_to_the_earlier_entry() {
        let layout = [
            ControlRect {
                control: Control::Undo,
                rect: Rect::new(0.0, 0.0, 50.0, 50.0),
            },
            ControlRect {
                control: Control::Clear,
                rect: Rect::new(25.0, 0.0, 50.0, 50.0),
            },
        ];

        // Inside both rects.
        assert_eq!(first_hit(&layout, 30.0, 10.0), Some(Control::Undo));
        // Only inside the second.
        assert_eq!(first_hit(&layout, 60.0, 10.0), Some(Control::Clear));
    }

    #[test]
    fn hit_test_misses_between_controls() {
        assert_eq!(hit_test(65.0, 40.0), None);
        assert_eq!(hit_test(5.0, 5.0), None);
    }

    #[test]
    fn points_below_the_band_never_hit() {
        // Same x as the red swatch, but on the canvas.
        assert_eq!(hit_test(25.0, TOOLBAR_HEIGHT), None);
        assert_eq!(hit_test(25.0, 300.0), None);
    }

    #[test]
    fn band_boundary_is_exclusive() {
        assert!(in_toolbar_band(69.9));
        assert!(!in_toolbar_band(70.0));
    }
}
