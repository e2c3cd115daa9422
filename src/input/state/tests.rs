use super::*;
use crate::config::KeybindingsConfig;
use crate::draw::PaletteColor;
use crate::input::events::{Key, MouseButton};

fn test_state() -> InputState {
    let action_map = KeybindingsConfig::default()
        .build_action_map()
        .expect("default keybindings are valid");
    InputState::with_defaults(PaletteColor::Red, 2.0, action_map)
}

fn drag(state: &mut InputState, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().expect("drag needs a start point");
    state.on_mouse_press(MouseButton::Left, first.0, first.1);
    for &(x, y) in rest {
        state.on_mouse_motion(x, y);
    }
    state.on_mouse_release(MouseButton::Left);
}

#[test]
fn press_move_release_produces_one_stroke_with_all_points() {
    let mut state = test_state();
    drag(&mut state, &[(500.0, 300.0), (510.0, 310.0)]);

    assert_eq!(state.canvas.len(), 1);
    assert_eq!(
        state.canvas.strokes()[0].points,
        vec![(500.0, 300.0), (510.0, 310.0)]
    );
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn stroke_captures_pen_settings_at_press_time() {
    let mut state = test_state();
    state.on_key_press(Key::Char('c'));
    state.on_key_press(Key::Up);

    drag(&mut state, &[(100.0, 200.0), (110.0, 210.0)]);

    // Changing the pen afterwards must not touch the finished stroke.
    state.on_key_press(Key::Char('c'));
    state.on_key_press(Key::Up);

    let stroke = &state.canvas.strokes()[0];
    assert_eq!(stroke.color, PaletteColor::Green);
    assert_eq!(stroke.thickness, 3.0);
}

#[test]
fn repeated_drags_keep_draw_order() {
    let mut state = test_state();
    for i in 0..3 {
        let x = 100.0 + i as f64 * 50.0;
        drag(&mut state, &[(x, 200.0), (x + 10.0, 210.0)]);
    }

    assert_eq!(state.canvas.len(), 3);
    let xs: Vec<f64> = state
        .canvas
        .strokes()
        .iter()
        .map(|s| s.points[0].0)
        .collect();
    assert_eq!(xs, vec![100.0, 150.0, 200.0]);
}

#[test]
fn motion_while_idle_draws_nothing() {
    let mut state = test_state();
    state.on_mouse_motion(400.0, 400.0);
    state.on_mouse_motion(410.0, 410.0);
    assert!(state.canvas.is_empty());
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut state = test_state();
    state.on_mouse_press(MouseButton::Right, 500.0, 300.0);
    state.on_mouse_press(MouseButton::Middle, 500.0, 300.0);
    assert!(state.canvas.is_empty());
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn toolbar_press_selects_swatch_without_drawing() {
    let mut state = test_state();
    state.on_key_press(Key::Char('c')); // move off red first
    assert_eq!(state.tools.color(), PaletteColor::Green);

    // Inside the red swatch.
    state.on_mouse_press(MouseButton::Left, 25.0, 25.0);

    assert_eq!(state.tools.color(), PaletteColor::Red);
    assert!(state.canvas.is_empty());
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn toolbar_band_miss_swallows_the_press() {
    let mut state = test_state();
    // Inside the band but between controls.
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    state.on_mouse_motion(5.0, 100.0);
    state.on_mouse_release(MouseButton::Left);

    assert!(state.canvas.is_empty());
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn toolbar_thickness_buttons_adjust_the_pen() {
    let mut state = test_state();
    // Thicken (265, 40), thin (345, 40).
    state.on_mouse_press(MouseButton::Left, 265.0, 40.0);
    state.on_mouse_release(MouseButton::Left);
    assert_eq!(state.tools.thickness(), 3.0);

    state.on_mouse_press(MouseButton::Left, 345.0, 40.0);
    state.on_mouse_release(MouseButton::Left);
    assert_eq!(state.tools.thickness(), 2.0);
}

#[test]
fn toolbar_undo_removes_only_the_latest_stroke() {
    let mut state = test_state();
    drag(&mut state, &[(100.0, 200.0), (110.0, 210.0)]);
    drag(&mut state, &[(300.0, 200.0), (310.0, 210.0)]);

    // Undo button center.
    state.on_mouse_press(MouseButton::Left, 430.0, 40.0);
    state.on_mouse_release(MouseButton::Left);

    assert_eq!(state.canvas.len(), 1);
    assert_eq!(state.canvas.strokes()[0].points[0], (100.0, 200.0));
}

#[test]
fn toolbar_clear_empties_the_canvas() {
    let mut state = test_state();
    drag(&mut state, &[(100.0, 200.0), (110.0, 210.0)]);
    drag(&mut state, &[(300.0, 200.0), (310.0, 210.0)]);

    // Clear button center.
    state.on_mouse_press(MouseButton::Left, 520.0, 40.0);
    state.on_mouse_release(MouseButton::Left);

    assert!(state.canvas.is_empty());
}

#[test]
fn undo_key_removes_the_most_recent_stroke() {
    let mut state = test_state();
    for i in 0..3 {
        let x = 100.0 + i as f64 * 100.0;
        drag(&mut state, &[(x, 200.0), (x + 10.0, 210.0)]);
    }

    state.on_key_press(Key::Char('u'));

    assert_eq!(state.canvas.len(), 2);
    let xs: Vec<f64> = state
        .canvas
        .strokes()
        .iter()
        .map(|s| s.points[0].0)
        .collect();
    assert_eq!(xs, vec![100.0, 200.0]);
}

#[test]
fn undo_on_empty_canvas_is_harmless() {
    let mut state = test_state();
    state.on_key_press(Key::Char('u'));
    assert!(state.canvas.is_empty());
    assert!(!state.should_exit);
}

#[test]
fn ctrl_z_also_undoes() {
    let mut state = test_state();
    drag(&mut state, &[(100.0, 200.0), (110.0, 210.0)]);

    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('z'));
    state.on_key_release(Key::Ctrl);

    assert!(state.canvas.is_empty());
}

#[test]
fn clear_key_is_idempotent() {
    let mut state = test_state();
    drag(&mut state, &[(100.0, 200.0), (110.0, 210.0)]);

    state.on_key_press(Key::Char('r'));
    assert!(state.canvas.is_empty());
    state.on_key_press(Key::Char('r'));
    assert!(state.canvas.is_empty());
}

#[test]
fn clear_mid_drag_drops_the_rest_of_the_drag() {
    let mut state = test_state();
    state.on_mouse_press(MouseButton::Left, 500.0, 300.0);
    state.on_mouse_motion(510.0, 310.0);

    state.on_key_press(Key::Char('r'));
    assert!(matches!(state.state, DrawingState::Drawing));

    // The drag is still held, but its stroke is gone; further motion must
    // not resurrect it or extend anything else.
    state.on_mouse_motion(520.0, 320.0);
    state.on_mouse_motion(530.0, 330.0);
    state.on_mouse_release(MouseButton::Left);

    assert!(state.canvas.is_empty());
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn thickness_keys_respect_the_floor() {
    let mut state = test_state();
    for _ in 0..5 {
        state.on_key_press(Key::Down);
    }
    assert_eq!(state.tools.thickness(), 1.0);

    state.on_key_press(Key::Up);
    assert_eq!(state.tools.thickness(), 2.0);
}

#[test]
fn plus_and_minus_keys_adjust_thickness() {
    let mut state = test_state();
    state.on_key_press(Key::Plus);
    assert_eq!(state.tools.thickness(), 3.0);
    state.on_key_press(Key::Minus);
    assert_eq!(state.tools.thickness(), 2.0);
}

#[test]
fn cycle_key_wraps_after_the_last_color() {
    let mut state = test_state();
    for _ in 0..crate::draw::PALETTE.len() {
        state.on_key_press(Key::Char('c'));
    }
    assert_eq!(state.tools.color(), PaletteColor::Red);
}

#[test]
fn escape_requests_exit() {
    let mut state = test_state();
    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn ctrl_q_requests_exit() {
    let mut state = test_state();
    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('q'));
    assert!(state.should_exit);
}

#[test]
fn unknown_keys_do_nothing() {
    let mut state = test_state();
    state.on_key_press(Key::Char('x'));
    state.on_key_press(Key::Unknown);

    assert!(state.canvas.is_empty());
    assert!(!state.should_exit);
    assert_eq!(state.tools.color(), PaletteColor::Red);
    assert_eq!(state.tools.thickness(), 2.0);
}
