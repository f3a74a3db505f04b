mod simulation;
mod viewport;

pub use simulation::{Simulation, DEFAULT_TICK};
pub use viewport::Viewport;
