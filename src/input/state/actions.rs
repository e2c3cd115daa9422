use crate::config::Action;
use crate::input::events::Key;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier state; everything else is resolved
    /// through the keybinding map. Keyboard actions run regardless of the
    /// drawing state and never change it: cycling the color or clearing the
    /// canvas mid-drag is allowed, and the drag continues (or quietly runs
    /// dry if its stroke was removed).
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let key_str = match key {
            Key::Char(c) => c.to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Up => "Up".to_string(),
            Key::Down => "Down".to_string(),
            Key::Plus => "+".to_string(),
            Key::Minus => "-".to_string(),
            _ => return,
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::CycleColor => {
                self.tools.cycle_color();
                log::debug!("Pen color is now {}", self.tools.color());
                self.needs_redraw = true;
            }
            Action::IncreaseThickness => {
                self.tools.increase_thickness();
                self.needs_redraw = true;
            }
            Action::DecreaseThickness => {
                self.tools.decrease_thickness();
                self.needs_redraw = true;
            }
            Action::Undo => {
                if self.canvas.undo().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::ClearCanvas => {
                self.canvas.clear();
                self.needs_redraw = true;
            }
            Action::Exit => {
                self.should_exit = true;
            }
        }
    }

    /// Processes a key release event.
    ///
    /// Only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
