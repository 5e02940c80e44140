use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;

/// Binary palette: dead cells are the background color, live cells
/// are drawn on top of it.
pub const BACKGROUND: Color = WHITE;
const ALIVE_COLOR: Color = BLACK;
const HUD_COLOR: Color = BLACK;
const HUD_FONT_SIZE: f32 = 24.0;

/// Draw every live cell as a filled square
pub fn draw_cells(grid: &Grid, cell_size: f32) {
    for (row, col, cell) in grid.iter_cells() {
        if cell.is_alive() {
            draw_rectangle(
                col as f32 * cell_size,
                row as f32 * cell_size,
                cell_size,
                cell_size,
                ALIVE_COLOR,
            );
        }
    }
}

/// Draw the generation counter and run status in the bottom-left corner
pub fn draw_hud(sim: &Simulation) {
    let status = if sim.is_running { "Running" } else { "Paused" };

    draw_text(
        &format!("Generations: {}", sim.generation),
        10.0,
        screen_height() - 30.0,
        HUD_FONT_SIZE,
        HUD_COLOR,
    );
    draw_text(
        &format!("{} | Population: {}", status, sim.grid.population()),
        10.0,
        screen_height() - 10.0,
        HUD_FONT_SIZE,
        HUD_COLOR,
    );
}
