//! Wordle feedback grid
//!
//! The grid is caller-owned UI state: letters typed into cells, each cell
//! coloured by the feedback the game gave. [`derive_constraints`] turns it into
//! the [`WordleConstraints`](crate::matcher::WordleConstraints) the matcher needs.

mod board;
mod cell;
mod derive;

pub use board::{Cursor, Grid};
pub use cell::{Cell, TileState};
pub use derive::derive_constraints;

/// Errors raised while editing a grid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid needs at least one row and one column, got {rows}x{columns}")]
    EmptyDimensions { rows: usize, columns: usize },

    #[error("Cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Row {row} is outside the grid ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Expected {expected} letters, got a {guess}-letter guess and {feedback} feedback marks")]
    LengthMismatch {
        expected: usize,
        guess: usize,
        feedback: usize,
    },

    #[error("Unknown feedback mark '{character}' at position {}; use G, Y or -", .position + 1)]
    InvalidFeedback { character: char, position: usize },

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("Expected GUESS:FEEDBACK, got '{0}'")]
    MalformedRow(String),
}
