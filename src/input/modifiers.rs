//! Keyboard modifier tracking.

/// Currently held keyboard modifiers, updated from key press and release
/// events so keybinding matching can require them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}
