//! Mapping pointer coordinates from logical window space to the physical
//! pixel space the canvas and toolbar live in.

/// Converts logical (window) coordinates into physical (framebuffer)
/// coordinates.
///
/// On scaled outputs the compositor reports pointer positions in logical
/// units while the buffer is rendered at physical resolution; the two axes
/// are scaled independently. Built fresh from the current sizes whenever a
/// pointer event arrives, so a resize between events can never use stale
/// factors.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    scale_x: f64,
    scale_y: f64,
}

impl CoordinateMapper {
    /// Creates a mapper from the current logical and physical sizes.
    ///
    /// Both logical dimensions must be non-zero; the backend only delivers
    /// pointer events to a configured (hence non-empty) surface.
    pub fn new(logical: (u32, u32), physical: (u32, u32)) -> Self {
        Self {
            scale_x: physical.0 as f64 / logical.0 as f64,
            scale_y: physical.1 as f64 / logical.1 as f64,
        }
    }

    /// Maps a logical-space point to physical pixels.
    pub fn to_physical(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale_x, y * self.scale_y)
    }
}
