use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};

use super::{GridError, RandomSource, rules};

/// Relative positions of the eight neighbors, row-major
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid owns the cell matrix and the generation counter.
///
/// Cells are stored row-major in a flat buffer of `rows * columns` booleans.
/// The edges are fixed: positions past the boundary count as permanently dead.
/// `advance` always reads the current buffer and writes a fresh one, so no
/// cell ever sees a neighbor that has already been updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Create a grid with every cell dead and the generation at 0
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
            generation: 0,
        })
    }

    /// Build a grid from text rows: `#` or `O` is alive, `.` is dead.
    /// Every row must have the same, non-zero width.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let columns = lines.first().map_or(0, |line| line.as_ref().chars().count());
        let mut grid = Self::new(lines.len(), columns)?;

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != columns {
                return Err(GridError::InvalidDimension { rows: lines.len(), columns: width });
            }
            for (col, ch) in line.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' => true,
                    '.' => false,
                    _ => return Err(GridError::InvalidCell { row, col, ch }),
                };
                let idx = grid.index(row, col);
                grid.cells[idx] = alive;
            }
        }

        Ok(grid)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of completed advances since the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.columns {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Cell state at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite a single cell. Leaves the generation untouched.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip a single cell and return its new state. Leaves the generation untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Kill every cell and reset the generation to 0
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
        debug!(rows = self.rows, columns = self.columns, "grid cleared");
    }

    /// Draw every cell independently from `source` and reset the generation to 0
    pub fn randomize<S: RandomSource + ?Sized>(&mut self, source: &mut S) {
        self.cells.iter_mut().for_each(|cell| *cell = source.next_bool());
        self.generation = 0;
        debug!(live = self.live_count(), "grid randomized");
    }

    /// Reset the generation counter without touching the cells
    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Count live neighbors; positions past the edge contribute nothing
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < self.rows && c < self.columns).then(|| self.cells[self.index(r, c)])
            })
            .filter(|&alive| alive)
            .count() as u8
    }

    /// Live neighbor count at (row, col)
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.checked_index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    fn next_state(&self, row: usize, col: usize) -> bool {
        rules::conway(self.cells[self.index(row, col)], self.count_live_neighbors(row, col))
    }

    /// Replace the cells with the next generation and return the new generation number
    pub fn advance(&mut self) -> u64 {
        let next: Vec<bool> = (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col))
            .collect();
        self.commit(next)
    }

    /// Same result as `advance`, with rows computed on the rayon pool.
    /// Worth it for grids past a few hundred cells per side.
    pub fn advance_parallel(&mut self) -> u64 {
        let mut next = vec![false; self.cells.len()];
        next.par_chunks_mut(self.columns)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = self.next_state(row, col);
                }
            });
        self.commit(next)
    }

    fn commit(&mut self, next: Vec<bool>) -> u64 {
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
        self.generation += 1;
        trace!(generation = self.generation, live = self.live_count(), "advanced");
        self.generation
    }

    /// Total alive cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &alive)| (idx / self.columns, idx % self.columns, alive))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.columns).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &alive in line {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Yields true, false, true, ... for predictable randomize tests
    struct Alternating(bool);

    impl RandomSource for Alternating {
        fn next_bool(&mut self) -> bool {
            self.0 = !self.0;
            self.0
        }
    }

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(20, 30).unwrap();
        assert_eq!(grid.dimensions(), (20, 30));
        assert_eq!(grid.generation(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.iter_cells().count(), 600);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { rows: 0, columns: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimension { rows: 5, columns: 0 })
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut grid = Grid::new(3, 4).unwrap();
        let expected = Err(GridError::OutOfRange { row: 3, col: 0, rows: 3, columns: 4 });

        assert_eq!(grid.get(3, 0), expected);
        assert_eq!(grid.toggle(3, 0).map(|_| false), expected);
        assert!(grid.get(0, 4).is_err());
        assert!(grid.set(0, 4, true).is_err());
        assert!(grid.live_neighbors(10, 10).is_err());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.advance();

        assert_eq!(grid.toggle(2, 3), Ok(true));
        assert_eq!(grid.get(2, 3), Ok(true));
        assert_eq!(grid.toggle(2, 3), Ok(false));
        assert_eq!(grid.get(2, 3), Ok(false));
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn test_rectangular_indexing() {
        let mut grid = Grid::new(2, 5).unwrap();
        grid.set(1, 4, true).unwrap();

        assert_eq!(grid.get(1, 4), Ok(true));
        assert_eq!(grid.get(0, 4), Ok(false));
        assert_eq!(alive_set(&grid), vec![(1, 4)]);
    }

    #[test]
    fn test_neighbor_count_does_not_wrap() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(4, 4, true).unwrap();
        grid.set(0, 4, true).unwrap();

        assert_eq!(grid.live_neighbors(0, 0), Ok(0));
        assert_eq!(grid.live_neighbors(4, 4), Ok(0));
        assert_eq!(grid.live_neighbors(1, 1), Ok(1));
    }

    #[test]
    fn test_neighbor_count_full_ring() {
        let mut grid = Grid::from_rows(&["###", "#.#", "###"]).unwrap();
        assert_eq!(grid.live_neighbors(1, 1), Ok(8));
        assert_eq!(grid.live_neighbors(0, 0), Ok(2));

        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.live_neighbors(1, 1), Ok(8));
    }

    #[test]
    fn test_clear_resets_cells_and_generation() {
        let mut grid = Grid::from_rows(&[".....", ".###.", "....."]).unwrap();
        grid.advance();
        grid.advance();

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.generation(), 0);

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_randomize_uses_supplied_source() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.advance();

        grid.randomize(&mut Alternating(false));
        assert_eq!(grid.to_string(), "#.#\n.#.");
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_randomize_seeded_is_repeatable() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();

        a.randomize(&mut StdRng::seed_from_u64(99));
        b.randomize(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }

        assert_eq!(grid.advance(), 1);
        assert_eq!(alive_set(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        assert_eq!(grid.advance(), 2);
        assert_eq!(alive_set(&grid), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_block_still_life() {
        let mut grid = Grid::from_rows(&["....", ".##.", ".##.", "...."]).unwrap();
        let before = grid.to_string();

        for expected in 1..=10 {
            assert_eq!(grid.advance(), expected);
            assert_eq!(grid.to_string(), before);
        }
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true).unwrap();

        grid.advance();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_update_is_simultaneous() {
        // Updating in place would let the row ends see the newly born (0, 1)
        // and survive.
        let mut grid = Grid::from_rows(&["...", "###", "..."]).unwrap();
        grid.advance();
        assert_eq!(grid.to_string(), ".#.\n.#.\n.#.");
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = Grid::new(50, 37).unwrap();
        serial.randomize(&mut StdRng::seed_from_u64(3));
        let mut parallel = serial.clone();

        for _ in 0..20 {
            assert_eq!(serial.advance(), parallel.advance_parallel());
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Grid::from_rows(&empty),
            Err(GridError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::from_rows(&["##", "#"]),
            Err(GridError::InvalidDimension { rows: 2, columns: 1 })
        ));
        assert_eq!(
            Grid::from_rows(&["#.", ".x"]),
            Err(GridError::InvalidCell { row: 1, col: 1, ch: 'x' })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let text = ".#.\nO..";
        let grid = Grid::from_rows(&text.lines().collect::<Vec<_>>()).unwrap();
        assert_eq!(grid.to_string(), ".#.\n#..");
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_reset_generation_keeps_cells() {
        let mut grid = Grid::from_rows(&["##", "##"]).unwrap();
        grid.advance();
        grid.reset_generation();
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.live_count(), 4);
    }
}
