//! The editable feedback grid

use super::GridError;
use super::cell::{Cell, TileState};
use super::derive::derive_constraints;
use crate::matcher::WordleConstraints;
use std::fmt;

/// Position of the active cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// A `rows x columns` grid of feedback cells with an active cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    cursor: Cursor,
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS)
    }
}

impl Grid {
    pub const DEFAULT_ROWS: usize = 6;
    pub const DEFAULT_COLUMNS: usize = 5;

    /// An empty grid of the given size
    ///
    /// # Errors
    ///
    /// Returns `GridError::EmptyDimensions` if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimensions { rows, columns });
        }
        Ok(Self::blank(rows, columns))
    }

    fn blank(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::default(); rows * columns],
            cursor: Cursor::default(),
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, which is also the word length searched for
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The cell at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::CellOutOfRange` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.index(row, col).map(|index| self.cells[index])
    }

    /// The cells of one row, or `None` past the last row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.columns..(row + 1) * self.columns])
    }

    /// Iterate over the rows top to bottom
    #[must_use]
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.columns)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.columns {
            return Err(GridError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + col)
    }

    fn active_index(&self) -> usize {
        self.cursor.row * self.columns + self.cursor.col
    }

    /// Type a letter into the active cell and advance the cursor
    ///
    /// The cursor moves to the next column, wraps to the start of the next row
    /// and stays put on the last cell of the grid.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidLetter` for anything but an ASCII letter.
    pub fn type_letter(&mut self, letter: char) -> Result<(), GridError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::InvalidLetter(letter));
        }
        let index = self.active_index();
        self.cells[index].set_letter(letter as u8);

        if self.cursor.col + 1 < self.columns {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.rows {
            self.cursor = Cursor {
                row: self.cursor.row + 1,
                col: 0,
            };
        }
        Ok(())
    }

    /// Clear the active cell, or step back and clear the previous one in the row
    pub fn backspace(&mut self) {
        let index = self.active_index();
        if self.cells[index].is_filled() {
            self.cells[index].clear();
        } else if self.cursor.col > 0 {
            self.cursor.col -= 1;
            self.cells[index - 1].clear();
        }
    }

    /// Tap a cell: move the cursor there and, if it holds a letter, advance its colour
    ///
    /// # Errors
    ///
    /// Returns `GridError::CellOutOfRange` outside the grid.
    pub fn cycle(&mut self, row: usize, col: usize) -> Result<TileState, GridError> {
        let index = self.index(row, col)?;
        self.cursor = Cursor { row, col };
        self.cells[index].cycle();
        Ok(self.cells[index].state())
    }

    /// Move the cursor to the start of the next row, wrapping to the top
    pub fn next_row(&mut self) {
        self.cursor = Cursor {
            row: (self.cursor.row + 1) % self.rows,
            col: 0,
        };
    }

    /// Fill a whole row from a guess and its feedback
    ///
    /// Feedback holds one character per letter, see [`TileState::from_feedback`].
    /// The cursor moves to the start of the following row.
    ///
    /// # Errors
    ///
    /// Returns `GridError` if the row is out of range, a length differs from the
    /// column count, the guess holds a non-letter or the feedback an unknown mark.
    /// The grid is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordhelp::grid::Grid;
    ///
    /// let mut grid = Grid::default();
    /// grid.set_row(0, "crane", "--Y-G").unwrap();
    ///
    /// let constraints = grid.constraints();
    /// assert_eq!(constraints.required().to_string(), "AE");
    /// assert_eq!(constraints.excluded().to_string(), "CNR");
    /// ```
    pub fn set_row(&mut self, row: usize, guess: &str, feedback: &str) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }

        let letters: Vec<char> = guess.trim().chars().collect();
        let marks: Vec<char> = feedback.trim().chars().collect();
        if letters.len() != self.columns || marks.len() != self.columns {
            return Err(GridError::LengthMismatch {
                expected: self.columns,
                guess: letters.len(),
                feedback: marks.len(),
            });
        }

        let mut filled = Vec::with_capacity(self.columns);
        for (position, (&letter, &mark)) in letters.iter().zip(&marks).enumerate() {
            if !letter.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter(letter));
            }
            let state = TileState::from_feedback(mark).ok_or(GridError::InvalidFeedback {
                character: mark,
                position,
            })?;
            filled.push(Cell::new(letter as u8, state));
        }

        let start = row * self.columns;
        self.cells[start..start + self.columns].copy_from_slice(&filled);
        self.cursor = Cursor {
            row: (row + 1).min(self.rows - 1),
            col: 0,
        };
        Ok(())
    }

    /// Clear every cell of one row
    ///
    /// # Errors
    ///
    /// Returns `GridError::RowOutOfRange` past the last row.
    pub fn clear_row(&mut self, row: usize) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        let start = row * self.columns;
        self.cells[start..start + self.columns]
            .iter_mut()
            .for_each(Cell::clear);
        self.cursor = Cursor { row, col: 0 };
        Ok(())
    }

    /// First row without any letter
    #[must_use]
    pub fn first_empty_row(&self) -> Option<usize> {
        self.iter_rows()
            .position(|row| row.iter().all(|cell| !cell.is_filled()))
    }

    /// Last row holding at least one letter
    #[must_use]
    pub fn last_filled_row(&self) -> Option<usize> {
        self.iter_rows()
            .rposition(|row| row.iter().any(|cell| cell.is_filled()))
    }

    /// True when any cell holds a letter; a search runs only then
    #[must_use]
    pub fn has_letters(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_filled())
    }

    /// Clear every cell and move the cursor home
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        self.cursor = Cursor::default();
    }

    /// Derive the matcher constraints from the current cells
    #[must_use]
    pub fn constraints(&self) -> WordleConstraints {
        derive_constraints(self.iter_rows())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            write!(f, " ")?;
            for cell in row {
                write!(f, "{}", cell.state().symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(grid: &Grid, row: usize) -> String {
        grid.row(row)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn default_is_six_by_five() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.columns(), 5);
        assert!(!grid.has_letters());
        assert_eq!(grid.cursor(), Cursor::default());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GridError::EmptyDimensions { rows: 0, columns: 5 })
        ));
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn typing_fills_and_wraps() {
        let mut grid = Grid::new(2, 3).unwrap();
        for letter in "catdo".chars() {
            grid.type_letter(letter).unwrap();
        }
        assert_eq!(row_text(&grid, 0), "CAT");
        assert_eq!(row_text(&grid, 1), "DO_");
        assert_eq!(grid.cursor(), Cursor { row: 1, col: 2 });
        assert_eq!(grid.cell(0, 0).unwrap().state(), TileState::Green);
    }

    #[test]
    fn typing_stops_at_last_cell() {
        let mut grid = Grid::new(1, 2).unwrap();
        for letter in "abc".chars() {
            grid.type_letter(letter).unwrap();
        }
        assert_eq!(row_text(&grid, 0), "AC");
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 1 });
    }

    #[test]
    fn typing_rejects_non_letters() {
        let mut grid = Grid::default();
        assert!(matches!(
            grid.type_letter('3'),
            Err(GridError::InvalidLetter('3'))
        ));
        assert!(!grid.has_letters());
    }

    #[test]
    fn backspace_clears_current_then_previous() {
        let mut grid = Grid::default();
        grid.type_letter('A').unwrap();
        grid.type_letter('B').unwrap();
        // Cursor sits on the empty third cell
        grid.backspace();
        assert_eq!(row_text(&grid, 0), "A____");
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 1 });

        grid.cycle(0, 0).unwrap();
        grid.backspace();
        assert!(!grid.has_letters());
        assert_eq!(grid.cursor(), Cursor::default());

        // Nothing before column 0
        grid.backspace();
        assert_eq!(grid.cursor(), Cursor::default());
    }

    #[test]
    fn cycle_advances_filled_cells_only() {
        let mut grid = Grid::default();
        grid.type_letter('A').unwrap();

        assert_eq!(grid.cycle(0, 0).unwrap(), TileState::Yellow);
        assert_eq!(grid.cycle(0, 0).unwrap(), TileState::Gray);
        assert_eq!(grid.cycle(0, 0).unwrap(), TileState::Empty);
        assert_eq!(grid.cycle(0, 0).unwrap(), TileState::Green);

        assert_eq!(grid.cycle(2, 3).unwrap(), TileState::Empty);
        assert_eq!(grid.cursor(), Cursor { row: 2, col: 3 });
        assert!(grid.cycle(6, 0).is_err());
        assert!(grid.cycle(0, 5).is_err());
    }

    #[test]
    fn next_row_wraps() {
        let mut grid = Grid::new(2, 5).unwrap();
        grid.next_row();
        assert_eq!(grid.cursor(), Cursor { row: 1, col: 0 });
        grid.next_row();
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 0 });
    }

    #[test]
    fn set_row_fills_states() {
        let mut grid = Grid::default();
        grid.set_row(1, "slate", "gy-X_").unwrap();

        let states: Vec<TileState> = grid.row(1).unwrap().iter().map(|c| c.state()).collect();
        assert_eq!(
            states,
            vec![
                TileState::Green,
                TileState::Yellow,
                TileState::Gray,
                TileState::Gray,
                TileState::Gray
            ]
        );
        assert_eq!(row_text(&grid, 1), "SLATE");
        assert_eq!(grid.cursor(), Cursor { row: 2, col: 0 });
        assert_eq!(grid.first_empty_row(), Some(0));
        assert_eq!(grid.last_filled_row(), Some(1));
    }

    #[test]
    fn set_row_errors_leave_grid_untouched() {
        let mut grid = Grid::default();
        assert!(matches!(
            grid.set_row(0, "cat", "GGG"),
            Err(GridError::LengthMismatch { expected: 5, .. })
        ));
        assert!(matches!(
            grid.set_row(0, "crane", "GGZGG"),
            Err(GridError::InvalidFeedback {
                character: 'Z',
                position: 2
            })
        ));
        assert!(matches!(
            grid.set_row(0, "cr4ne", "GGGGG"),
            Err(GridError::InvalidLetter('4'))
        ));
        assert!(matches!(
            grid.set_row(9, "crane", "GGGGG"),
            Err(GridError::RowOutOfRange { row: 9, rows: 6 })
        ));
        assert!(!grid.has_letters());
    }

    #[test]
    fn clear_row_and_reset() {
        let mut grid = Grid::default();
        grid.set_row(0, "crane", "-----").unwrap();
        grid.set_row(1, "pious", "--Y--").unwrap();

        grid.clear_row(1).unwrap();
        assert_eq!(grid.last_filled_row(), Some(0));
        assert_eq!(grid.cursor(), Cursor { row: 1, col: 0 });

        grid.reset();
        assert!(!grid.has_letters());
        assert_eq!(grid.first_empty_row(), Some(0));
        assert_eq!(grid.last_filled_row(), None);
    }

    #[test]
    fn full_grid_has_no_empty_row() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.set_row(0, "CAT", "GGG").unwrap();
        assert_eq!(grid.first_empty_row(), None);
    }

    #[test]
    fn display_shows_letters_and_marks() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_row(0, "cat", "gy-").unwrap();
        assert_eq!(grid.to_string(), "CAT GY-\n___    \n");
    }
}
