/// Viewport maps between pixel positions on the drawing surface and grid cells.
/// The whole grid is stretched over the surface, one rectangle per cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel size of one cell as (width, height)
    pub fn cell_size(&self, rows: usize, columns: usize) -> (f32, f32) {
        (self.width / columns as f32, self.height / rows as f32)
    }

    /// Convert a pointer position to (row, col).
    ///
    /// Positions on or past the right/bottom edge clamp to the last cell.
    /// Returns `None` for negative positions or an empty surface.
    pub fn cell_at(&self, px: f32, py: f32, rows: usize, columns: usize) -> Option<(usize, usize)> {
        if rows == 0 || columns == 0 || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        if px < 0.0 || py < 0.0 || px.is_nan() || py.is_nan() {
            return None;
        }

        let col = ((px * columns as f32 / self.width).floor() as usize).min(columns - 1);
        let row = ((py * rows as f32 / self.height).floor() as usize).min(rows - 1);
        Some((row, col))
    }

    /// Top-left corner and size of a cell as (x, y, w, h)
    pub fn cell_rect(&self, row: usize, col: usize, rows: usize, columns: usize) -> (f32, f32, f32, f32) {
        let (w, h) = self.cell_size(rows, columns);
        (col as f32 * w, row as f32 * h, w, h)
    }
}
