//! Letter-tile matching with blanks and scoring
//!
//! A word matches when the letters left after removing an optional fixed
//! substring can all be taken from the available tiles. Blank tiles stand in for
//! any missing letter but score nothing.
//!
//! # Algorithm
//! 1. Locate the fixed substring according to its [`Anchor`] and cut it out
//! 2. Walk the remaining letters left to right, spending a matching tile when one
//!    is left and a blank otherwise
//! 3. Score the whole word with [`word_value`], minus every blank-covered letter

use crate::core::{Word, tile_value, word_value};
use crate::dictionary::Dictionary;
use crate::matcher::SearchOutcome;
use log::debug;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// Where a fixed substring must sit inside a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// The word starts with the substring
    #[default]
    Beginning,
    /// The substring is strictly inside the word, touching neither edge
    Middle,
    /// The word ends with the substring
    End,
}

impl Anchor {
    pub const ALL: [Self; 3] = [Self::Beginning, Self::Middle, Self::End];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginning => "beginning",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Raised when an anchor name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown anchor '{0}' (expected beginning, middle or end)")]
pub struct AnchorParseError(pub String);

impl std::str::FromStr for Anchor {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginning" | "begin" | "start" => Ok(Self::Beginning),
            "middle" | "mid" => Ok(Self::Middle),
            "end" => Ok(Self::End),
            _ => Err(AnchorParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A multiset of letter tiles plus a number of blank tiles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tiles {
    counts: FxHashMap<u8, u32>,
    wildcards: u32,
}

impl Tiles {
    /// Characters read as blank tiles in raw input
    pub const BLANKS: [char; 2] = ['.', '?'];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read tiles from raw input
    ///
    /// Letters are tiles (case-insensitive), [`Self::BLANKS`] are blank tiles and
    /// every other character is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordhelp::matcher::Tiles;
    ///
    /// let tiles = Tiles::parse("deroibu.");
    /// assert_eq!(tiles.count(b'D'), 1);
    /// assert_eq!(tiles.wildcards(), 1);
    /// assert_eq!(tiles.len(), 8);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tiles = Self::new();
        for ch in raw.chars() {
            if Self::BLANKS.contains(&ch) {
                tiles.add_wildcards(1);
            } else if ch.is_ascii_alphabetic() {
                tiles.add_letter(ch as u8);
            }
        }
        tiles
    }

    /// One tile for every letter of `word`
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self {
            counts: word.letter_counts(),
            wildcards: 0,
        }
    }

    /// Add one letter tile; returns `false` (and adds nothing) for non-letters
    pub fn add_letter(&mut self, letter: u8) -> bool {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return false;
        }
        *self.counts.entry(letter).or_insert(0) += 1;
        true
    }

    /// Remove one letter tile, returning `false` if none was left
    pub fn remove_letter(&mut self, letter: u8) -> bool {
        match self.counts.get_mut(&letter.to_ascii_uppercase()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn add_wildcards(&mut self, count: u32) {
        self.wildcards += count;
    }

    /// Number of tiles showing `letter`
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub const fn wildcards(&self) -> u32 {
        self.wildcards
    }

    /// Total number of tiles, blanks included
    #[must_use]
    pub fn len(&self) -> usize {
        (self.counts.values().sum::<u32>() + self.wildcards) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in b'A'..=b'Z' {
            for _ in 0..self.count(letter) {
                write!(f, "{}", letter as char)?;
            }
        }
        for _ in 0..self.wildcards {
            write!(f, "{}", Self::BLANKS[0])?;
        }
        Ok(())
    }
}

/// A substring every result must contain at an anchored place
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedSubstring {
    letters: String,
    anchor: Anchor,
}

impl FixedSubstring {
    /// Non-letters are stripped and case folded; `None` when nothing is left
    #[must_use]
    pub fn new(raw: &str, anchor: Anchor) -> Option<Self> {
        let letters: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if letters.is_empty() {
            None
        } else {
            Some(Self { letters, anchor })
        }
    }

    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Byte range of the substring inside `word`, if it sits where the anchor demands
    ///
    /// For [`Anchor::Middle`] the lowest start index `i` with `1 <= i` and
    /// `i + len <= word.len() - 1` wins.
    #[must_use]
    pub fn locate(&self, word: &[u8]) -> Option<Range<usize>> {
        let sub = self.letters.as_bytes();
        let (n, k) = (word.len(), sub.len());

        match self.anchor {
            Anchor::Beginning => word.starts_with(sub).then_some(0..k),
            Anchor::End => word.ends_with(sub).then(|| n - k..n),
            Anchor::Middle => (1..n.saturating_sub(k))
                .find(|&i| &word[i..i + k] == sub)
                .map(|i| i..i + k),
        }
    }
}

/// Letters of a word left over once the fixed substring is cut out
#[derive(Debug, Clone)]
struct Remainder<'w> {
    letters: &'w [u8],
    cut: Range<usize>,
}

impl<'w> Remainder<'w> {
    fn of(word: &'w Word, fixed: Option<&FixedSubstring>) -> Option<Self> {
        let letters = word.bytes();
        let cut = match fixed {
            Some(fixed) => fixed.locate(letters)?,
            None => 0..0,
        };
        Some(Self { letters, cut })
    }

    /// `(index in word, letter)` pairs outside the cut
    fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.letters
            .iter()
            .copied()
            .enumerate()
            .filter(move |(index, _)| !self.cut.contains(index))
    }
}

impl fmt::Display for Remainder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, letter) in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// The remainder of `word` for `fixed`, or `None` if the substring is not where required
///
/// # Examples
/// ```
/// use wordhelp::core::Word;
/// use wordhelp::matcher::anagram::{Anchor, FixedSubstring, remainder};
///
/// let crowd = Word::new("CROWD").unwrap();
/// let ow = FixedSubstring::new("ow", Anchor::Middle);
/// assert_eq!(remainder(&crowd, ow.as_ref()).as_deref(), Some("CRD"));
/// ```
#[must_use]
pub fn remainder(word: &Word, fixed: Option<&FixedSubstring>) -> Option<String> {
    Remainder::of(word, fixed).map(|r| r.to_string())
}

/// A letter of a result that was covered by a blank tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WildcardUse {
    /// Index of the letter within the whole word
    pub index: usize,
    pub letter: u8,
}

/// A matching word with its score and blank-tile assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord<'d> {
    pub word: &'d Word,
    pub score: u32,
    pub wildcards: Vec<WildcardUse>,
}

impl ScoredWord<'_> {
    /// Whether the letter at `index` was played with a blank
    #[must_use]
    pub fn is_wildcard(&self, index: usize) -> bool {
        self.wildcards.iter().any(|w| w.index == index)
    }

    /// Ranking order: score descending, then word ascending
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(other.word))
    }
}

/// Tiles plus an optional anchored substring
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnagramQuery {
    tiles: Tiles,
    fixed: Option<FixedSubstring>,
}

impl AnagramQuery {
    #[must_use]
    pub fn new(tiles: Tiles) -> Self {
        Self { tiles, fixed: None }
    }

    /// Require a fixed substring; an input with no letters clears it
    #[must_use]
    pub fn with_fixed(mut self, raw: &str, anchor: Anchor) -> Self {
        self.fixed = FixedSubstring::new(raw, anchor);
        self
    }

    /// Build a query straight from raw user input
    #[must_use]
    pub fn parse(raw_tiles: &str, raw_fixed: &str, anchor: Anchor) -> Self {
        Self::new(Tiles::parse(raw_tiles)).with_fixed(raw_fixed, anchor)
    }

    #[must_use]
    pub const fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    #[must_use]
    pub const fn fixed(&self) -> Option<&FixedSubstring> {
        self.fixed.as_ref()
    }

    /// No tiles and no fixed substring: nothing to search
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.fixed.is_none()
    }

    /// Score `word` against this query, or `None` if it cannot be formed
    #[must_use]
    pub fn evaluate<'d>(&self, word: &'d Word) -> Option<ScoredWord<'d>> {
        let remainder = Remainder::of(word, self.fixed.as_ref())?;
        let wildcards = self.spend_tiles(&remainder)?;

        let covered: u32 = wildcards.iter().map(|w| tile_value(w.letter)).sum();
        let score = word_value(word.bytes()) - covered;

        Some(ScoredWord {
            word,
            score,
            wildcards,
        })
    }

    /// Greedily take one tile per remainder letter, falling back to blanks
    fn spend_tiles(&self, remainder: &Remainder<'_>) -> Option<Vec<WildcardUse>> {
        let mut available = self.tiles.clone();
        let mut wildcards = Vec::new();

        for (index, letter) in remainder.iter() {
            if available.remove_letter(letter) {
                continue;
            }
            if available.wildcards == 0 {
                return None;
            }
            available.wildcards -= 1;
            wildcards.push(WildcardUse { index, letter });
        }

        Some(wildcards)
    }
}

/// Find every dictionary word formable from `query`, best score first
///
/// Ties are broken by ascending word order. An empty query means "not searched".
///
/// # Examples
/// ```
/// use wordhelp::core::Word;
/// use wordhelp::dictionary::Dictionary;
/// use wordhelp::matcher::{AnagramQuery, Anchor, match_anagrams};
///
/// let dictionary: Dictionary = ["robe", "robed", "bored", "bride"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let query = AnagramQuery::parse("EROIBU.", "", Anchor::Beginning);
/// let outcome = match_anagrams(&dictionary, &query);
///
/// let best = &outcome.results()[0];
/// assert_eq!(best.word.text(), "BORED");
/// assert_eq!(best.score, 6); // D came from the blank
/// ```
#[must_use]
pub fn match_anagrams<'d>(
    dictionary: &'d Dictionary,
    query: &AnagramQuery,
) -> SearchOutcome<ScoredWord<'d>> {
    if query.is_empty() {
        return SearchOutcome::not_searched();
    }

    let mut results: Vec<ScoredWord<'d>> = dictionary
        .iter()
        .filter_map(|word| query.evaluate(word))
        .collect();
    results.sort_by(ScoredWord::rank);

    debug!(
        "Tiles {} (fixed {:?}) formed {} of {} words",
        query.tiles(),
        query.fixed().map(|f| (f.letters(), f.anchor())),
        results.len(),
        dictionary.len()
    );

    SearchOutcome::searched(results)
}
