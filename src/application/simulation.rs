use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{Grid, GridError, Pattern, RandomSource};

/// Default pause between automatic generations
pub const DEFAULT_TICK: Duration = Duration::from_millis(300);

/// Simulation drives the grid on a timer.
///
/// The grid itself has no notion of running or stopped; that state lives
/// here. Stopping is simply not advancing on the next tick.
pub struct Simulation {
    grid: Grid,
    is_running: bool,
    tick_interval: Duration,
    elapsed: Duration,
    /// Generation last reported to the display
    displayed_generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid, tick_interval: Duration) -> Self {
        Self {
            grid,
            is_running: false,
            tick_interval,
            elapsed: Duration::ZERO,
            displayed_generation: 0,
        }
    }

    /// Create a simulation over an empty grid
    pub fn with_dimensions(rows: usize, columns: usize, tick_interval: Duration) -> Result<Self, GridError> {
        Ok(Self::new(Grid::new(rows, columns)?, tick_interval))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub const fn displayed_generation(&self) -> u64 {
        self.displayed_generation
    }

    /// Begin advancing on ticks. No effect if already running.
    pub fn start(&mut self) {
        if !self.is_running {
            self.is_running = true;
            self.elapsed = Duration::ZERO;
            info!(generation = self.grid.generation(), "simulation started");
        }
    }

    pub fn stop(&mut self) {
        if self.is_running {
            self.is_running = false;
            info!(generation = self.grid.generation(), "simulation stopped");
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance a single generation by hand. Ignored while running.
    pub fn step(&mut self) -> Option<u64> {
        if self.is_running {
            return None;
        }
        Some(self.advance())
    }

    /// Stop, kill every cell, and reset the generation display
    pub fn clear(&mut self) {
        self.stop();
        self.grid.clear();
        self.displayed_generation = 0;
    }

    /// Fill the grid from `source`. Ignored while running.
    pub fn randomize<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> bool {
        if self.is_running {
            return false;
        }
        self.grid.randomize(source);
        self.displayed_generation = 0;
        true
    }

    /// Flip one cell, e.g. from a pointer click
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.grid.toggle(row, col)
    }

    /// Stamp a pattern with its top-left corner at (row, col)
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), GridError> {
        pattern.place_on(&mut self.grid, row, col)
    }

    /// Feed elapsed frame time. Advances at most once per call, when a full
    /// interval has accumulated, and returns the new generation if it did.
    pub fn tick(&mut self, delta: Duration) -> Option<u64> {
        if !self.is_running {
            return None;
        }

        self.elapsed += delta;
        if self.elapsed < self.tick_interval {
            return None;
        }

        self.elapsed = Duration::ZERO;
        Some(self.advance())
    }

    fn advance(&mut self) -> u64 {
        let generation = self.grid.advance();
        self.displayed_generation = generation;
        debug!(generation, live = self.grid.live_count(), "generation advanced");
        generation
    }
}
