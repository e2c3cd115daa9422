//! Input handling: event types, coordinate mapping, pen settings, and the
//! drawing state machine.

pub mod coords;
pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

pub use coords::CoordinateMapper;
pub use events::{Key, MouseButton};
pub use state::{DrawingState, InputState};
pub use tool::ToolState;
