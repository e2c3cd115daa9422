// Responds to xdg window configure/close events, keeping dimensions in sync
// with the compositor.
use log::info;
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // The compositor leaves either dimension unset when it has no
        // opinion; keep the current size in that case.
        let width = configure
            .new_size
            .0
            .map(|w| w.get())
            .unwrap_or(self.surface.width());
        let height = configure
            .new_size
            .1
            .map(|h| h.get())
            .unwrap_or(self.surface.height());

        info!("Window configured: {width}x{height}");

        if self.surface.update_dimensions(width, height) {
            info!("Window size changed - recreating SlotPool");
        }

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
