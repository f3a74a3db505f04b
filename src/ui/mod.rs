mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_width, screen_height};

use crate::application::Viewport;

pub const PANEL_HEIGHT: f32 = 60.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const STATUS_HEIGHT: f32 = 20.0;

/// Height of the area the grid is stretched over
pub fn grid_area_height() -> f32 {
    (screen_height() - PANEL_HEIGHT).max(0.0)
}

/// Viewport covering the grid area at the current window size
pub fn grid_viewport() -> Viewport {
    Viewport::new(screen_width(), grid_area_height())
}

/// Y position where the bottom panel starts
pub fn panel_y() -> f32 {
    grid_area_height()
}

/// One row of equally wide buttons along the bottom panel
pub fn create_buttons() -> Vec<Button> {
    let actions = ButtonAction::all();
    let width = screen_width() / actions.len() as f32;
    let y = panel_y() + STATUS_HEIGHT;

    actions
        .iter()
        .enumerate()
        .map(|(i, &action)| Button::new(i as f32 * width, y, width, BUTTON_HEIGHT, action))
        .collect()
}
