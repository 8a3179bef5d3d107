// error.rs - Errors raised while building grids

use thiserror::Error;

/// Errors that can occur when constructing a grid or a simulation.
///
/// All of them are construction-time failures; stepping never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("grid dimensions {columns}x{rows} must be positive and fit in memory")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("seed cell ({column}, {row}) lies outside the {columns}x{rows} grid")]
    InvalidSeed {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    #[error("grid text contains no rows")]
    EmptyText,

    #[error("grid text row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {found:?} at column {column} of grid text row {row}")]
    UnexpectedChar {
        row: usize,
        column: usize,
        found: char,
    },
}
