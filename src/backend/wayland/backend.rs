// Coordinates backend startup/shutdown and drives the event loop while
// delegating rendering and protocol state to `WaylandState` and its handler
// modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::WaylandSurface,
    shell::xdg::{XdgShell, window::WindowDecorations},
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{config::Config, input::InputState};

/// Wayland backend driver.
pub struct WaylandBackend {
    config: Config,
}

impl WaylandBackend {
    pub fn new() -> Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        });
        Ok(Self { config })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let config = std::mem::take(&mut self.config);

        info!("Configuration loaded");
        debug!("  Color: {}", config.drawing.default_color);
        debug!("  Thickness: {:.1}px", config.drawing.default_thickness);
        debug!("  Window: {}x{}", config.window.width, config.window.height);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|e| anyhow::anyhow!("Invalid keybindings: {e}"))?;

        let input_state = InputState::with_defaults(
            config.default_color(),
            config.drawing.default_thickness,
            action_map,
        );

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
        );

        info!("Creating window");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window =
            state
                .xdg_shell
                .create_window(wl_surface, WindowDecorations::RequestServer, &qh);

        window.set_title(state.config.window.title.clone());
        window.set_app_id("waydraw");
        // Keep the window at least wide enough for the full toolbar.
        window.set_min_size(Some((600, 200)));
        window.commit();

        state.surface.set_window(window);
        info!("Window created");

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;
        const MAX_RENDER_FAILURES: u32 = 10;

        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            match event_queue.blocking_dispatch(&mut state) {
                Ok(_) => {
                    if state.input_state.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            // Render when dirty, throttled to compositor frame callbacks
            // when vsync is enabled.
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.input_state.needs_redraw = false;
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear the flag to avoid an error loop
                        state.input_state.needs_redraw = false;
                    }
                }
            } else if state.input_state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: skipping render, frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
