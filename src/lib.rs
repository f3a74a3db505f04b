// Domain layer - the automaton engine
pub mod domain;

// Application layer - timer-driven simulation and pointer mapping
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Grid, GridError, Pattern, RandomSource, presets};
pub use application::{Simulation, Viewport};
pub use config::{Settings, load_settings};
