use macroquad::prelude::*;

use crate::application::Simulation;

/// Handle cell editing with the mouse. One toggle per press; the pixel
/// position maps to a grid coordinate through the cell size, and the
/// toroidal grid canonicalizes anything that lands past the last cell.
pub fn handle_mouse(sim: &mut Simulation, cell_size: f32) {
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        sim.toggle_cell((y / cell_size) as i32, (x / cell_size) as i32);
    }
}

/// Process keyboard input functionally
pub fn handle_keyboard(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 2] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::R, Simulation::reset),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Quit signal for the frame loop
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
