//! Input state machine: pointer and keyboard events in, canvas and pen
//! mutations out.

mod actions;
mod core;
mod mouse;

#[cfg(test)]
mod tests;

pub use core::{DrawingState, InputState};
