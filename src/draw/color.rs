//! RGBA color type and the fixed pen palette.

use std::fmt;
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new fully opaque color from RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// One entry of the fixed pen palette.
///
/// The palette is a tagged set rather than bare indices so that an invalid
/// palette index is unrepresentable in the rest of the application. The
/// declaration order here is the palette order: it drives the toolbar swatch
/// layout, the explicit index mapping, and the cyclic advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Black,
}

/// All palette entries in palette order (swatch 0 first).
pub const PALETTE: [PaletteColor; 4] = [
    PaletteColor::Red,
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Black,
];

impl PaletteColor {
    /// Resolves the palette entry to its RGBA value.
    pub fn color(self) -> Color {
        match self {
            PaletteColor::Red => Color::rgb(1.0, 0.0, 0.0),
            PaletteColor::Green => Color::rgb(0.0, 1.0, 0.0),
            PaletteColor::Blue => Color::rgb(0.0, 0.0, 1.0),
            PaletteColor::Black => Color::rgb(0.0, 0.0, 0.0),
        }
    }

    /// Position of this entry within the palette.
    pub fn index(self) -> usize {
        match self {
            PaletteColor::Red => 0,
            PaletteColor::Green => 1,
            PaletteColor::Blue => 2,
            PaletteColor::Black => 3,
        }
    }

    /// Looks up a palette entry by index; `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        PALETTE.get(index).copied()
    }

    /// The next palette entry in palette order, wrapping after the last.
    pub fn next(self) -> Self {
        PALETTE[(self.index() + 1) % PALETTE.len()]
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Black => "black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PaletteColor {
    type Err = String;

    /// Parses a palette color name (case-insensitive). Used by the
    /// configuration system for the `default_color` setting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(PaletteColor::Red),
            "green" => Ok(PaletteColor::Green),
            "blue" => Ok(PaletteColor::Blue),
            "black" => Ok(PaletteColor::Black),
            other => Err(format!("unknown palette color '{other}'")),
        }
    }
}
