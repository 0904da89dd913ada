use thiserror::Error;

/// Errors surfaced by the board to whoever drives it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("board dimensions must be positive, got {height}x{width}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("a {height}x{width} board has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    /// A generation computed for a board of another shape.
    #[error("generation is {found_height}x{found_width}, board is {height}x{width}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("probability {0} is not within 0.0..=1.0")]
    InvalidProbability(f64),

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected {found:?} at ({row}, {col}), rows may only contain '#' or '.'")]
    InvalidCell { row: usize, col: usize, found: char },
}

pub type Result<T> = std::result::Result<T, GridError>;
