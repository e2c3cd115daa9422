//! Manages window state and shared memory buffers for the Wayland backend.

use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

use super::error::RenderError;

/// Tracks the active window, buffer pool, and associated sizing state.
///
/// Dimensions are kept in logical (compositor) units; buffers are allocated
/// at `logical * scale` so output stays crisp on scaled displays.
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    scale: i32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state with the given initial
    /// logical size. The compositor may override it on first configure.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window: None,
            pool: None,
            width,
            height,
            scale: 1,
            configured: false,
            frame_callback_pending: false,
        }
    }

    /// Assigns the window produced during startup.
    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    /// Returns the current window, if initialized.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Updates the logical dimensions, returning `true` if the size changed.
    ///
    /// When the size changes, any existing buffer pool becomes invalid and
    /// is dropped.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    /// Updates the buffer scale factor, returning `true` if it changed.
    pub fn update_scale(&mut self, scale: i32) -> bool {
        let changed = self.scale != scale;
        if changed {
            self.scale = scale.max(1);
            self.pool = None;
        }
        changed
    }

    /// Current logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current logical height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current buffer scale factor.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Buffer width in physical pixels.
    pub fn physical_width(&self) -> u32 {
        self.width * self.scale as u32
    }

    /// Buffer height in physical pixels.
    pub fn physical_height(&self) -> u32 {
        self.height * self.scale as u32
    }

    /// Marks the surface as configured by the compositor.
    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Returns whether the window has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Sets the frame callback pending flag.
    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    /// Returns whether a frame callback is currently outstanding.
    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool of the appropriate size exists.
    pub fn ensure_pool(
        &mut self,
        shm: &Shm,
        buffer_count: usize,
    ) -> Result<&mut SlotPool, RenderError> {
        match &mut self.pool {
            Some(pool) => Ok(pool),
            slot => {
                let buffer_size = (self.width * self.height * 4) as usize
                    * (self.scale * self.scale) as usize;
                let pool_size = buffer_size * buffer_count;
                info!(
                    "Creating new SlotPool ({}x{} @ {}x, {} bytes, {} buffers)",
                    self.width, self.height, self.scale, pool_size, buffer_count
                );
                let pool = SlotPool::new(pool_size, shm)?;
                Ok(slot.insert(pool))
            }
        }
    }
}
