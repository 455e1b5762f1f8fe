//! Wordle-style constraint matching
//!
//! Constraints come from coloured feedback tiles:
//! - green: the letter is at this position
//! - yellow: the letter is in the word, but not at this position
//! - gray: the letter is not in the word
//!
//! A letter that is gray in one tile but green or yellow in another is never
//! treated as excluded. Letter counts are not modelled: a green L next to a gray
//! L still accepts words with two L's.

use crate::core::{LetterSet, Word};
use crate::dictionary::Dictionary;
use crate::matcher::SearchOutcome;
use log::debug;
use std::collections::BTreeMap;

/// Engine-facing constraint set derived from feedback tiles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordleConstraints {
    fixed: BTreeMap<usize, u8>,
    misplaced: BTreeMap<usize, LetterSet>,
    required: LetterSet,
    gray: LetterSet,
    filled: bool,
}

impl WordleConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a green tile: `letter` sits at `position`
    ///
    /// A later green at the same position replaces the earlier letter, though
    /// both stay required. Non-letters are ignored.
    pub fn add_green(&mut self, position: usize, letter: u8) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        self.filled = true;
        self.required.insert(letter);
        self.fixed.insert(position, letter);
    }

    /// Record a yellow tile: `letter` is in the word but not at `position`
    pub fn add_yellow(&mut self, position: usize, letter: u8) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        self.filled = true;
        self.required.insert(letter);
        self.misplaced.entry(position).or_default().insert(letter);
    }

    /// Record a gray tile: `letter` is not in the word, unless required elsewhere
    pub fn add_gray(&mut self, letter: u8) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        self.filled = true;
        self.gray.insert(letter);
    }

    /// Record a letter with no feedback colour yet
    ///
    /// It constrains nothing, but the search still runs and accepts every word
    /// of the requested length.
    pub fn add_uncoloured(&mut self, letter: u8) {
        if letter.to_ascii_uppercase().is_ascii_uppercase() {
            self.filled = true;
        }
    }

    /// Green letters by position
    #[must_use]
    pub const fn fixed(&self) -> &BTreeMap<usize, u8> {
        &self.fixed
    }

    /// Yellow letters by position
    #[must_use]
    pub const fn misplaced(&self) -> &BTreeMap<usize, LetterSet> {
        &self.misplaced
    }

    /// Letters that must occur somewhere (all green and yellow letters)
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Letters that must not occur anywhere
    ///
    /// Gray letters minus every required letter, whatever order the tiles were added in.
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.gray.difference(self.required)
    }

    /// True when no lettered tile has been recorded, coloured or not
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.filled
    }

    /// Check a single word, ignoring its length
    ///
    /// Checks run green, yellow, required, excluded; the first failure rejects.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let greens_hold = self
            .fixed
            .iter()
            .all(|(&position, &letter)| word.letter_at(position) == Some(letter));
        if !greens_hold {
            return false;
        }

        let yellows_hold = self.misplaced.iter().all(|(&position, letters)| {
            letters
                .iter()
                .all(|letter| word.has_letter(letter) && word.letter_at(position) != Some(letter))
        });
        if !yellows_hold {
            return false;
        }

        if !self.required.is_subset(word.letters()) {
            return false;
        }

        self.excluded().is_disjoint(word.letters())
    }
}

/// Find every `word_length`-letter dictionary word satisfying `constraints`
///
/// Results are sorted ascending. Constraints with no lettered tiles mean "not searched".
///
/// # Examples
/// ```
/// use wordhelp::core::Word;
/// use wordhelp::dictionary::Dictionary;
/// use wordhelp::matcher::{WordleConstraints, match_constraints};
///
/// let dictionary: Dictionary = ["crane", "crate", "slate", "trace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut constraints = WordleConstraints::new();
/// constraints.add_green(4, b'E');
/// constraints.add_yellow(0, b'T');
/// constraints.add_gray(b'S');
///
/// let outcome = match_constraints(&dictionary, &constraints, 5);
/// let words: Vec<&str> = outcome.results().iter().map(|w| w.text()).collect();
/// assert_eq!(words, vec!["CRATE"]);
/// ```
#[must_use]
pub fn match_constraints<'d>(
    dictionary: &'d Dictionary,
    constraints: &WordleConstraints,
    word_length: usize,
) -> SearchOutcome<&'d Word> {
    if constraints.is_empty() {
        return SearchOutcome::not_searched();
    }

    let mut results: Vec<&Word> = dictionary
        .words_of_length(word_length)
        .filter(|word| constraints.matches(word))
        .collect();
    results.sort_unstable();

    debug!(
        "Constraints fixed={:?} required={} excluded={} matched {} words of length {word_length}",
        constraints.fixed(),
        constraints.required(),
        constraints.excluded(),
        results.len()
    );

    SearchOutcome::searched(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SearchStatus;

    fn dictionary(words: &[&str]) -> Dictionary {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts<'a>(outcome: &SearchOutcome<&'a Word>) -> Vec<&'a str> {
        outcome.results().iter().copied().map(Word::text).collect()
    }

    #[test]
    fn empty_constraints_are_not_searched() {
        let dict = dictionary(&["CRANE"]);
        let outcome = match_constraints(&dict, &WordleConstraints::new(), 5);
        assert_eq!(outcome.status(), SearchStatus::NotSearched);
    }

    #[test]
    fn gray_only_constraints_are_searched() {
        let dict = dictionary(&["CRANE", "SLATE", "PIOUS"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_gray(b'A');

        let outcome = match_constraints(&dict, &constraints, 5);
        assert_eq!(texts(&outcome), vec!["PIOUS"]);
    }

    #[test]
    fn green_fixes_position() {
        let dict = dictionary(&["CRANE", "BRAVE", "CRATE", "SLATE"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_green(0, b'c');
        constraints.add_green(1, b'R');

        let outcome = match_constraints(&dict, &constraints, 5);
        assert_eq!(texts(&outcome), vec!["CRANE", "CRATE"]);
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let dict = dictionary(&["RATES", "STARE", "TEARS", "CLOUD"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_yellow(0, b'R');

        let outcome = match_constraints(&dict, &constraints, 5);
        // RATES has R at position 0, CLOUD has no R
        assert_eq!(texts(&outcome), vec!["STARE", "TEARS"]);
    }

    #[test]
    fn gray_excludes_letter_everywhere() {
        let dict = dictionary(&["STARE", "TEARS", "TREAT"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_yellow(0, b'R');
        constraints.add_gray(b'S');

        let outcome = match_constraints(&dict, &constraints, 5);
        assert_eq!(texts(&outcome), vec!["TREAT"]);
    }

    #[test]
    fn required_letters_removed_from_excluded() {
        let mut constraints = WordleConstraints::new();
        // Gray before green: order of insertion does not matter
        constraints.add_gray(b'L');
        constraints.add_green(0, b'L');
        constraints.add_gray(b'M');

        assert_eq!(constraints.required().to_string(), "L");
        assert_eq!(constraints.excluded().to_string(), "M");
    }

    #[test]
    fn duplicate_letter_green_and_gray_still_matches_double_letters() {
        // Green L at 0 and gray L at 2. Letter counts are not modelled, so a
        // word with a second L is still accepted.
        let dict = dictionary(&["LLAMA", "LEMON", "LOYAL", "ALLOY"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_green(0, b'L');
        constraints.add_gray(b'L');

        assert!(constraints.excluded().is_empty());
        let outcome = match_constraints(&dict, &constraints, 5);
        assert_eq!(texts(&outcome), vec!["LEMON", "LLAMA", "LOYAL"]);
    }

    #[test]
    fn length_filter_applies() {
        let dict = dictionary(&["CAT", "CART", "CARTS", "CRATE"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_green(0, b'C');

        for length in 3..=5 {
            let outcome = match_constraints(&dict, &constraints, length);
            assert!(outcome.results().iter().all(|w| w.len() == length));
            assert!(!outcome.is_empty());
        }
    }

    #[test]
    fn position_beyond_length_never_matches() {
        let dict = dictionary(&["CRANE"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_green(7, b'E');

        let outcome = match_constraints(&dict, &constraints, 5);
        assert_eq!(outcome.status(), SearchStatus::SearchedEmpty);
    }

    #[test]
    fn later_green_replaces_earlier_at_same_position() {
        let mut constraints = WordleConstraints::new();
        constraints.add_green(0, b'C');
        constraints.add_green(0, b'T');

        assert_eq!(constraints.fixed().get(&0), Some(&b'T'));
        assert_eq!(constraints.required().to_string(), "CT");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut constraints = WordleConstraints::new();
        constraints.add_green(0, b'1');
        constraints.add_yellow(1, b' ');
        constraints.add_gray(b'#');
        constraints.add_uncoloured(b'?');
        assert!(constraints.is_empty());
    }

    #[test]
    fn uncoloured_letter_searches_every_word_of_length() {
        let dict = dictionary(&["CRANE", "SLATE", "CAT"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_uncoloured(b'q');

        assert!(!constraints.is_empty());
        let outcome = match_constraints(&dict, &constraints, 5);
        assert_eq!(outcome.status(), SearchStatus::SearchedWithResults);
        assert_eq!(texts(&outcome), vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn results_sorted_and_idempotent() {
        let dict = dictionary(&["TRACE", "OCEAN", "CRATE", "REACT", "CATER"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_yellow(2, b'E');

        let first = match_constraints(&dict, &constraints, 5);
        let second = match_constraints(&dict, &constraints, 5);
        assert_eq!(first, second);
        assert_eq!(texts(&first), vec!["CATER", "CRATE", "REACT", "TRACE"]);
    }
}
