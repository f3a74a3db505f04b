/// Source of random cell states for `Grid::randomize`.
///
/// Any `rand::Rng` qualifies, so callers can pass `rand::rng()` at runtime
/// and a seeded `StdRng` (or a hand-written source) in tests.
pub trait RandomSource {
    /// Next uniformly distributed boolean
    fn next_bool(&mut self) -> bool;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_bool(&mut self) -> bool {
        self.random::<bool>()
    }
}
