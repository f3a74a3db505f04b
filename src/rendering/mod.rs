use macroquad::prelude::*;

use crate::application::{Simulation, Viewport};
use crate::domain::{Grid, rules};
use crate::ui::{Button, panel_y, PANEL_HEIGHT};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell stretched over the viewport. Read-only on the grid.
pub fn draw_grid(grid: &Grid, viewport: &Viewport) {
    let (rows, columns) = grid.dimensions();
    let (cell_w, cell_h) = viewport.cell_size(rows, columns);
    let draw_lines = cell_w >= 4.0 && cell_h >= 4.0;

    for (row, col, alive) in grid.iter_cells() {
        let (x, y, w, h) = viewport.cell_rect(row, col, rows, columns);
        draw_rectangle(x, y, w, h, if alive { ALIVE_COLOR } else { DEAD_COLOR });

        if draw_lines {
            draw_rectangle_lines(x, y, w, h, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Draw the bottom panel: status line and buttons
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    let y = panel_y();
    draw_rectangle(0.0, y, screen_width(), PANEL_HEIGHT, Color::from_rgba(30, 30, 30, 255));

    let (rows, columns) = sim.grid().dimensions();
    let status = format!(
        "Generation: {}   {}   {}x{} {}   live {}",
        sim.displayed_generation(),
        if sim.is_running() { "Running" } else { "Stopped" },
        rows,
        columns,
        rules::RULE_NAME,
        sim.grid().live_count(),
    );
    draw_text(&status, 8.0, y + 15.0, 16.0, WHITE);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
}
