//! Wordle command
//!
//! Fills a grid from guesses and their feedback, then lists the words still possible.

use super::SearchReport;
use crate::dictionary::Dictionary;
use crate::grid::{Grid, GridError};
use crate::matcher::match_constraints;

/// A guess and the feedback it received, e.g. `CRANE:--Y-G`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub guess: String,
    pub feedback: String,
}

impl std::str::FromStr for GuessRow {
    type Err = GridError;

    /// Accepts `GUESS:FEEDBACK`, `GUESS=FEEDBACK` or `GUESS FEEDBACK`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (guess, feedback) = trimmed
            .split_once([':', '='])
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(|| GridError::MalformedRow(s.to_string()))?;

        let (guess, feedback) = (guess.trim(), feedback.trim());
        if guess.is_empty() || feedback.is_empty() {
            return Err(GridError::MalformedRow(s.to_string()));
        }
        Ok(Self {
            guess: guess.to_string(),
            feedback: feedback.to_string(),
        })
    }
}

/// Configuration for a Wordle search
pub struct WordleConfig {
    pub length: usize,
    pub rows: Vec<GuessRow>,
}

impl WordleConfig {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn row(mut self, row: GuessRow) -> Self {
        self.rows.push(row);
        self
    }
}

/// Build the feedback grid for a configuration
///
/// # Errors
///
/// Returns `GridError` if a row does not fit the word length or holds an
/// unknown character.
pub fn build_grid(config: &WordleConfig) -> Result<Grid, GridError> {
    let mut grid = Grid::new(config.rows.len().max(1), config.length)?;
    for (index, row) in config.rows.iter().enumerate() {
        grid.set_row(index, &row.guess, &row.feedback)?;
    }
    Ok(grid)
}

/// Run a Wordle search
///
/// With no rows at all the report is "not searched".
///
/// # Errors
///
/// Returns `GridError` if the rows cannot be placed in the grid.
pub fn run_wordle(
    dictionary: &Dictionary,
    config: &WordleConfig,
) -> Result<SearchReport, GridError> {
    let grid = build_grid(config)?;
    Ok(match_constraints(dictionary, &grid.constraints(), grid.columns()).into())
}
