//! Crossword command
//!
//! Finds words fitting a pattern of known letters and blanks.

use super::SearchReport;
use crate::core::LetterSet;
use crate::dictionary::Dictionary;
use crate::matcher::{InvalidPatternError, PositionPattern, match_pattern};

/// Configuration for a crossword search
pub struct CrosswordConfig {
    pub pattern: String,
    /// Free text; every letter in it must appear in the answer
    pub include: String,
}

impl CrosswordConfig {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            include: String::new(),
        }
    }

    #[must_use]
    pub fn include(mut self, letters: impl Into<String>) -> Self {
        self.include = letters.into();
        self
    }
}

/// Run a crossword search
///
/// # Errors
///
/// Returns `InvalidPatternError` if the pattern holds a character that is
/// neither a letter nor a wildcard.
pub fn run_crossword(
    dictionary: &Dictionary,
    config: &CrosswordConfig,
) -> Result<SearchReport, InvalidPatternError> {
    let pattern = PositionPattern::compile(&config.pattern)?;
    let required = LetterSet::parse(&config.include);
    Ok(match_pattern(dictionary, &pattern, required).into())
}
