mod error;
mod grid;
mod patterns;
mod random;
pub mod rules;

pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use random::RandomSource;
