use thiserror::Error;

/// A square coordinate fell outside `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square coordinates out of range: row {row}, col {col} (expected 0..8)")]
pub struct RangeError {
    pub row: i8,
    pub col: i8,
}

/// A grid handed to [`crate::Board::from_grid`] was not 8x8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("board must have 8 rows, found {found}")]
    Rows { found: usize },
    #[error("board row {row} must have 8 columns, found {found}")]
    Columns { row: usize, found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
