// Holds the live Wayland protocol state shared by the backend loop and the
// handler submodules; provides the rendering path used by both.
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::{self, Color},
    input::{CoordinateMapper, InputState},
};

use super::error::RenderError;
use super::surface::SurfaceState;

/// Canvas background.
const CANVAS_BG: Color = Color::rgb(1.0, 1.0, 1.0);

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Input state
    pub(super) input_state: InputState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        let surface = SurfaceState::new(config.window.width, config.window.height);
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            surface,
            config,
            input_state,
        }
    }

    /// Maps a pointer position from logical surface coordinates into the
    /// physical pixel space the canvas lives in.
    ///
    /// Rebuilt per event from the current sizes so resizes between events
    /// never leave a stale mapping behind.
    pub(super) fn map_pointer(&self, x: f64, y: f64) -> (f64, f64) {
        let mapper = CoordinateMapper::new(
            (self.surface.width(), self.surface.height()),
            (self.surface.physical_width(), self.surface.physical_height()),
        );
        mapper.to_physical(x, y)
    }

    /// Renders one full frame into a fresh shm buffer and commits it.
    ///
    /// Paint order: background, toolbar, strokes. Strokes go on top so a
    /// drag that wanders into the toolbar band stays visible, matching how
    /// the stroke data records it.
    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<(), RenderError> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count;
        let width = self.surface.physical_width();
        let height = self.surface.physical_height();

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )?
        };

        // SAFETY: `canvas` is a valid mutable slice from SlotPool with
        // exactly width * height * 4 bytes, the ARgb32 format matches that
        // allocation, and the stride is width * 4. The cairo surface and
        // context are dropped before the buffer is attached, so Cairo never
        // touches the memory after ownership moves to the compositor.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )?
        };

        let ctx = cairo::Context::new(&cairo_surface)?;

        debug!("Painting background");
        ctx.set_source_rgba(CANVAS_BG.r, CANVAS_BG.g, CANVAS_BG.b, CANVAS_BG.a);
        ctx.paint()?;

        crate::ui::render_toolbar(&ctx, &self.input_state.tools, width as f64);

        debug!(
            "Rendering {} strokes",
            self.input_state.canvas.len()
        );
        draw::render_strokes(&ctx, self.input_state.canvas.strokes());

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        debug!("Attaching buffer and committing surface");
        let window = self.surface.window().ok_or(RenderError::WindowNotReady)?;
        let wl_surface = window.wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
