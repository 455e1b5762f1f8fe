//! Crossword pattern matching
//!
//! A pattern has one slot per letter of the wanted word. A slot is either a
//! concrete letter or a wildcard (`_`, `?` or `.`) that matches any letter.
//! Words must also contain every letter of a free-form "must include" set.

use crate::core::{LetterSet, Word};
use crate::dictionary::Dictionary;
use crate::matcher::SearchOutcome;
use log::debug;
use std::fmt;

/// Raised when a pattern holds a character that is neither a letter nor a wildcard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid pattern: unexpected '{character}' at position {}", .position + 1)]
pub struct InvalidPatternError {
    /// The offending character
    pub character: char,
    /// Zero-based slot index within the trimmed pattern
    pub position: usize,
}

/// A single pattern position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Letter(u8),
    Any,
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn accepts(self, letter: u8) -> bool {
        match self {
            Self::Letter(expected) => expected == letter,
            Self::Any => true,
        }
    }
}

/// A compiled positional pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PositionPattern {
    slots: Vec<Slot>,
}

impl PositionPattern {
    /// Characters accepted as "any single letter"
    pub const WILDCARDS: [char; 3] = ['_', '?', '.'];

    /// Compile raw user input into a pattern
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased. An input
    /// that is empty after trimming compiles to the empty pattern.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPatternError` for the first character that is neither an
    /// ASCII letter nor one of [`Self::WILDCARDS`].
    ///
    /// # Examples
    /// ```
    /// use wordhelp::matcher::PositionPattern;
    ///
    /// let pattern = PositionPattern::compile(" c_t ").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.to_string(), "C_T");
    ///
    /// assert!(PositionPattern::compile("C*T").is_err());
    /// ```
    pub fn compile(raw: &str) -> Result<Self, InvalidPatternError> {
        let slots = raw
            .trim()
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                c if Self::WILDCARDS.contains(&c) => Ok(Slot::Any),
                c if c.is_ascii_alphabetic() => Ok(Slot::Letter(c.to_ascii_uppercase() as u8)),
                character => Err(InvalidPatternError {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    /// Number of slots, which is also the length of every matching word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Positional check only; required letters are checked by [`match_pattern`]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .slots
                .iter()
                .zip(word.bytes())
                .all(|(slot, &letter)| slot.accepts(letter))
    }
}

impl std::str::FromStr for PositionPattern {
    type Err = InvalidPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for PositionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Letter(letter) => write!(f, "{}", *letter as char)?,
                Slot::Any => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// Find every dictionary word matching `pattern` that contains all `required` letters
///
/// Results are sorted ascending. The empty pattern means "not searched".
#[must_use]
pub fn match_pattern<'d>(
    dictionary: &'d Dictionary,
    pattern: &PositionPattern,
    required: LetterSet,
) -> SearchOutcome<&'d Word> {
    if pattern.is_empty() {
        return SearchOutcome::not_searched();
    }

    let mut results: Vec<&Word> = dictionary
        .iter()
        .filter(|word| pattern.matches(word) && required.is_subset(word.letters()))
        .collect();
    results.sort_unstable();

    debug!(
        "Pattern {pattern} (must include {required:?}) matched {} of {} words",
        results.len(),
        dictionary.len()
    );

    SearchOutcome::searched(results)
}

/// Compile raw crossword input and run [`match_pattern`]
///
/// `raw_required` is free text: non-letters are stripped and duplicates collapse.
///
/// # Errors
///
/// Returns `InvalidPatternError` if `raw_pattern` does not compile.
///
/// # Examples
/// ```
/// use wordhelp::core::Word;
/// use wordhelp::dictionary::Dictionary;
/// use wordhelp::matcher::pattern::search;
///
/// let dictionary: Dictionary = ["cat", "cot", "cut", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let outcome = search(&dictionary, "C_T", "").unwrap();
/// let words: Vec<&str> = outcome.results().iter().map(|w| w.text()).collect();
/// assert_eq!(words, vec!["CAT", "COT", "CUT"]);
/// ```
pub fn search<'d>(
    dictionary: &'d Dictionary,
    raw_pattern: &str,
    raw_required: &str,
) -> Result<SearchOutcome<&'d Word>, InvalidPatternError> {
    let pattern = PositionPattern::compile(raw_pattern)?;
    Ok(match_pattern(
        dictionary,
        &pattern,
        LetterSet::parse(raw_required),
    ))
}
