//! Library exports for reusing waydraw subsystems.
//!
//! Exposes the stroke data model, the input state machine, and the
//! configuration types so integration tests (and potential external tools)
//! can drive the core without a live Wayland connection.

pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
