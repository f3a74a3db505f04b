use std::time::Duration;

use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_engine::{
    Settings, Simulation, load_settings,
    ui, rendering, input,
};

/// Settings with invalid values replaced by defaults
fn effective_settings() -> Settings {
    let settings = load_settings();
    match settings.validate() {
        Ok(()) => settings,
        Err(err) => {
            error!("invalid settings, using defaults: {err}");
            Settings::default()
        }
    }
}

fn window_conf() -> Conf {
    // Runs before the subscriber exists, so this load is silent
    let settings = effective_settings();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = effective_settings();
    let mut sim = match Simulation::with_dimensions(settings.rows, settings.columns, settings.tick_interval()) {
        Ok(sim) => sim,
        Err(err) => {
            error!("cannot create grid: {err}");
            return;
        }
    };
    info!(
        rows = settings.rows,
        columns = settings.columns,
        tick_ms = settings.tick_ms,
        "grid ready"
    );

    let mut rng = ::rand::rng();

    loop {
        let mouse_pos = mouse_position();
        let viewport = ui::grid_viewport();
        let buttons = ui::create_buttons();

        input::process_button_clicks(&mut sim, &buttons, mouse_pos, &mut rng);
        input::handle_cell_toggle(&mut sim, &viewport, mouse_pos);
        input::process_keyboard_input(&mut sim, &mut rng);

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(sim.grid(), &viewport);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
