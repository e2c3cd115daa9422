//! Stroke data model and Cairo rendering primitives.
//!
//! This module defines the drawing document and its building blocks:
//! - [`Color`]: RGBA color representation
//! - [`PaletteColor`]: the fixed four-entry pen palette
//! - [`Stroke`]: one freehand polyline with its color and thickness
//! - [`Canvas`]: the ordered collection of strokes (the document)
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::{Color, PALETTE, PaletteColor};
pub use render::{fill_rect, render_stroke, render_strokes};
pub use stroke::{Point, Stroke};
