use anyhow::Result;

pub mod wayland;

/// Run the Wayland backend with the full event loop.
pub fn run_wayland() -> Result<()> {
    let mut backend = wayland::WaylandBackend::new()?;
    backend.run()
}
