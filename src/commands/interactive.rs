//! Interactive Wordle helper
//!
//! Line-based loop: enter each guess with the feedback it got and the remaining
//! candidates are listed straight away.

use super::SearchReport;
use crate::dictionary::Dictionary;
use crate::grid::{Grid, GridError};
use crate::matcher::match_constraints;
use crate::output::print_report;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A row was accepted; the grid changed
    RowAdded(usize),
    /// The last row was removed; the grid changed
    Undone(usize),
    NothingToUndo,
    /// Every row already holds a guess
    GridFull,
    Reset,
    Help,
    Quit,
    /// Blank line
    Skip,
}

impl Step {
    /// True when the grid changed and the candidates need recomputing
    #[must_use]
    pub const fn changes_grid(&self) -> bool {
        matches!(self, Self::RowAdded(_) | Self::Undone(_) | Self::Reset)
    }
}

/// Grid state behind the interactive loop
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    grid: Grid,
}

impl<'d> Session<'d> {
    /// Start a session with a standard six-row grid
    ///
    /// # Errors
    ///
    /// Returns `GridError::EmptyDimensions` for a zero word length.
    pub fn new(dictionary: &'d Dictionary, word_length: usize) -> Result<Self, GridError> {
        Ok(Self {
            dictionary,
            grid: Grid::new(Grid::DEFAULT_ROWS, word_length)?,
        })
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Apply one line of user input
    ///
    /// # Errors
    ///
    /// Returns `GridError` for a guess row that does not fit the grid. The grid
    /// is unchanged in that case.
    pub fn apply(&mut self, line: &str) -> Result<Step, GridError> {
        let command = line.trim();
        match command.to_ascii_lowercase().as_str() {
            "" => return Ok(Step::Skip),
            "quit" | "q" | "exit" => return Ok(Step::Quit),
            "help" | "h" | "?" => return Ok(Step::Help),
            "new" | "n" | "reset" => {
                self.grid.reset();
                return Ok(Step::Reset);
            }
            "undo" | "u" => {
                return match self.grid.last_filled_row() {
                    Some(row) => {
                        self.grid.clear_row(row)?;
                        Ok(Step::Undone(row))
                    }
                    None => Ok(Step::NothingToUndo),
                };
            }
            _ => {}
        }

        let Some(row) = self.grid.first_empty_row() else {
            return Ok(Step::GridFull);
        };
        let parsed: super::GuessRow = command.parse()?;
        self.grid.set_row(row, &parsed.guess, &parsed.feedback)?;
        Ok(Step::RowAdded(row))
    }

    /// Candidates for the current grid
    #[must_use]
    pub fn search(&self) -> SearchReport {
        match_constraints(
            self.dictionary,
            &self.grid.constraints(),
            self.grid.columns(),
        )
        .into()
    }
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_interactive(dictionary: &Dictionary, word_length: usize, limit: usize) -> Result<()> {
    let mut session = Session::new(dictionary, word_length)?;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLE HELPER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_help(word_length);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let turn = session.grid().first_empty_row().map_or(0, |row| row + 1);
        print!("{} ", format!("Row {turn}>").bright_black());
        io::stdout().flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("Failed to read input")?;

        match session.apply(&line) {
            Ok(Step::Quit) => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Ok(Step::Help) => print_help(word_length),
            Ok(Step::NothingToUndo) => println!("Nothing to undo!\n"),
            Ok(Step::GridFull) => {
                println!("Grid is full. Type 'undo' or 'new'.\n");
            }
            Ok(step) if step.changes_grid() => {
                match step {
                    Step::Undone(row) => println!("✓ Removed row {}", row + 1),
                    Step::Reset => println!("🔄 Grid cleared"),
                    _ => {}
                }
                print!("{}", session.grid());
                print_report(&session.search(), limit);
            }
            Ok(_) => {}
            Err(e) => println!("{} {e}\n", "❌".red()),
        }
    }
}

fn print_help(word_length: usize) {
    println!("\nEnter each guess followed by its feedback, e.g. CRANE -Y--G");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("Words have {word_length} letters.");
    println!("Commands: 'undo' removes the last row, 'new' clears the grid, 'quit' exits\n");
}
