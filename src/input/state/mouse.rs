use crate::draw::Stroke;
use crate::input::events::MouseButton;
use crate::ui::{self, Control};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press.
    ///
    /// Only the primary button does anything. A press inside the toolbar band
    /// is routed to the control under the pointer (or swallowed if it misses
    /// every control); a press on the canvas opens a new stroke seeded with
    /// the press position.
    ///
    /// Coordinates are physical pixels; the backend applies the coordinate
    /// mapping before calling in.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        if !matches!(self.state, DrawingState::Idle) {
            return;
        }

        if ui::in_toolbar_band(y) {
            // Presses in the band never start a stroke, hit or miss.
            if let Some(control) = ui::hit_test(x, y) {
                self.apply_control(control);
            }
            return;
        }

        self.canvas.begin_stroke(Stroke::begin(
            (x, y),
            self.tools.color(),
            self.tools.thickness(),
        ));
        self.state = DrawingState::Drawing;
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// While drawing, every position is appended to the open stroke, toolbar
    /// band included. Motion while idle is ignored.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        if matches!(self.state, DrawingState::Drawing) {
            self.canvas.add_point((x, y));
            self.needs_redraw = true;
        }
    }

    /// Processes a mouse button release.
    ///
    /// Releasing the primary button closes the open stroke; whatever points
    /// it accumulated stay on the canvas as drawn.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        if matches!(self.state, DrawingState::Drawing) {
            self.state = DrawingState::Idle;
        }
    }

    /// Applies the effect of a clicked toolbar control.
    fn apply_control(&mut self, control: Control) {
        match control {
            Control::Swatch(color) => {
                self.tools.select_color(color);
                log::debug!("Selected {color} from the toolbar");
            }
            Control::ThickenStroke => self.tools.increase_thickness(),
            Control::ThinStroke => self.tools.decrease_thickness(),
            Control::Undo => {
                self.canvas.undo();
            }
            Control::Clear => self.canvas.clear(),
        }
        self.needs_redraw = true;
    }
}
