use thiserror::Error;

/// Errors raised by grid operations.
/// Every variant is reported before the grid is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one row and one column
    #[error("invalid grid dimensions {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    /// Coordinate outside `[0, rows) x [0, columns)`
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    /// Unrecognised character in a text row
    #[error("unexpected character {ch:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = GridError::OutOfRange { row: 7, col: 2, rows: 5, columns: 5 };
        assert_eq!(err.to_string(), "cell (7, 2) is outside the 5x5 grid");

        let err = GridError::InvalidDimension { rows: 0, columns: 3 };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x3");
    }
}
