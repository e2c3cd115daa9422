//! Backend-independent input event types.
//!
//! The windowing backend translates its native keysyms and button codes into
//! these types before they reach the input state machine, so the state
//! machine never depends on a particular display protocol.

/// A keyboard key, reduced to what the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character key, lowercased.
    Char(char),
    Escape,
    Up,
    Down,
    /// Plus on the main row or the keypad (also produced by `=`).
    Plus,
    /// Minus on the main row or the keypad (also produced by `_`).
    Minus,
    Shift,
    Ctrl,
    Alt,
    /// Any key the application has no use for.
    Unknown,
}

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
