//! Wayland backend: an xdg-toplevel window with software-rendered buffers.

mod backend;
mod error;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
