//! Drawing state machine and input state management.

use crate::config::{Action, KeyBinding};
use crate::draw::{Canvas, PaletteColor};
use crate::input::{modifiers::Modifiers, tool::ToolState};
use std::collections::HashMap;

/// Current drawing mode state machine.
///
/// The session is either waiting for input or accumulating points into the
/// open stroke while the primary button is held. Only pointer events change
/// the variant; keyboard actions run in either state without leaving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Primary button held on the canvas; motion extends the open stroke
    Drawing,
}

/// Main input state containing all drawing session state.
///
/// Holds the canvas (all drawn strokes), the active pen, modifier keys, the
/// drawing mode, and UI flags. Every keyboard and pointer event flows through
/// here; the backend only reads the resulting flags and canvas.
pub struct InputState {
    /// All strokes drawn this session
    pub canvas: Canvas,
    /// Active pen color and thickness
    pub tools: ToolState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether user requested to quit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Keybinding action map for lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with the given pen defaults.
    ///
    /// # Arguments
    /// * `color` - Initial pen color
    /// * `thickness` - Initial pen thickness in pixels
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        color: PaletteColor,
        thickness: f64,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: Canvas::new(),
            tools: ToolState::new(color, thickness),
            modifiers: Modifiers::default(),
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            action_map,
        }
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }
}
