//! Letters command
//!
//! Finds words playable from a rack of tiles, optionally built around a fixed
//! run of letters already on the board.

use super::SearchReport;
use crate::dictionary::Dictionary;
use crate::matcher::{AnagramQuery, Anchor, match_anagrams};

/// Configuration for a letter-tile search
pub struct LettersConfig {
    /// Letters are tiles, `.` or `?` are blanks, anything else is ignored
    pub tiles: String,
    pub fixed: Option<String>,
    pub anchor: Anchor,
}

impl LettersConfig {
    #[must_use]
    pub fn new(tiles: impl Into<String>) -> Self {
        Self {
            tiles: tiles.into(),
            fixed: None,
            anchor: Anchor::default(),
        }
    }

    #[must_use]
    pub fn fixed(mut self, letters: impl Into<String>, anchor: Anchor) -> Self {
        self.fixed = Some(letters.into());
        self.anchor = anchor;
        self
    }

    /// The matcher query this configuration describes
    #[must_use]
    pub fn query(&self) -> AnagramQuery {
        AnagramQuery::parse(&self.tiles, self.fixed.as_deref().unwrap_or(""), self.anchor)
    }
}

/// Run a letter-tile search; results are ranked by score
#[must_use]
pub fn run_letters(dictionary: &Dictionary, config: &LettersConfig) -> SearchReport {
    match_anagrams(dictionary, &config.query()).into()
}
