use macroquad::prelude::*;
use tracing::{debug, warn};

use crate::application::{Simulation, Viewport};
use crate::domain::{RandomSource, presets};
use crate::ui::{Button, ButtonAction};

/// Apply a panel command to the simulation
pub fn apply_action<S: RandomSource + ?Sized>(sim: &mut Simulation, action: ButtonAction, rng: &mut S) {
    debug!(?action, "button pressed");
    match action {
        ButtonAction::Clear => sim.clear(),
        ButtonAction::Randomize => {
            sim.randomize(rng);
        }
        ButtonAction::Step => {
            sim.step();
        }
        ButtonAction::Start => sim.start(),
        ButtonAction::Stop => sim.stop(),
    }
}

/// Process button clicks
pub fn process_button_clicks<S: RandomSource + ?Sized>(
    sim: &mut Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    rng: &mut S,
) {
    if let Some(btn) = buttons.iter().find(|btn| btn.is_clicked(mouse_pos)) {
        apply_action(sim, btn.action(), rng);
    }
}

/// Toggle the cell under the pointer when the left button is released over the grid
pub fn handle_cell_toggle(sim: &mut Simulation, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if !is_mouse_button_released(MouseButton::Left) || mouse_pos.1 >= viewport.height {
        return;
    }

    let (rows, columns) = sim.grid().dimensions();
    let Some((row, col)) = viewport.cell_at(mouse_pos.0, mouse_pos.1, rows, columns) else {
        return;
    };
    match sim.toggle_cell(row, col) {
        Ok(alive) => debug!(row, col, alive, "cell toggled"),
        Err(err) => warn!("pointer mapped outside the grid: {err}"),
    }
}

/// Keyboard shortcuts: Space run/stop, N step, C clear, R random,
/// 1-7 stamp a preset pattern in the middle of the grid
pub fn process_keyboard_input<S: RandomSource + ?Sized>(sim: &mut Simulation, rng: &mut S) {
    let actions = [
        (KeyCode::N, ButtonAction::Step),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Randomize),
    ];

    if is_key_pressed(KeyCode::Space) {
        sim.toggle_running();
    }
    for (key, action) in actions {
        if is_key_pressed(key) {
            apply_action(sim, action, rng);
        }
    }

    let digit_keys = [
        KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4,
        KeyCode::Key5, KeyCode::Key6, KeyCode::Key7,
    ];
    let patterns = presets::all_patterns();
    for (key, pattern) in digit_keys.into_iter().zip(&patterns) {
        if is_key_pressed(key) && !sim.is_running() {
            let (rows, columns) = sim.grid().dimensions();
            let row = rows.saturating_sub(pattern.height()) / 2;
            let col = columns.saturating_sub(pattern.width()) / 2;
            if let Err(err) = sim.place_pattern(pattern, row, col) {
                warn!(pattern = pattern.name, "pattern does not fit: {err}");
            }
        }
    }
}
