//! Constraint-matching engine
//!
//! Three independent matchers filter a [`Dictionary`](crate::dictionary::Dictionary):
//! - [`pattern`]: crossword-style positional patterns with wildcards
//! - [`constraint`]: Wordle-style green/yellow/gray constraints
//! - [`anagram`]: words formable from letter tiles, with blanks and scoring
//!
//! Every matcher is a pure function of the dictionary and a query. Results come
//! back as a [`SearchOutcome`], which tells "nothing to search yet" apart from
//! "searched and found nothing".

pub mod anagram;
pub mod constraint;
pub mod pattern;

pub use anagram::{Anchor, AnagramQuery, ScoredWord, Tiles, WildcardUse, match_anagrams};
pub use constraint::{WordleConstraints, match_constraints};
pub use pattern::{InvalidPatternError, PositionPattern, match_pattern};

/// Tri-state search status reported alongside every result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The query was empty; no search was run
    NotSearched,
    /// The query was searched and nothing matched
    SearchedEmpty,
    /// The query was searched and at least one word matched
    SearchedWithResults,
}

impl SearchStatus {
    #[inline]
    #[must_use]
    pub const fn was_searched(self) -> bool {
        !matches!(self, Self::NotSearched)
    }
}

/// Ordered matcher results plus their search status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    status: SearchStatus,
    results: Vec<T>,
}

impl<T> SearchOutcome<T> {
    /// Outcome for an empty query
    #[must_use]
    pub const fn not_searched() -> Self {
        Self {
            status: SearchStatus::NotSearched,
            results: Vec::new(),
        }
    }

    /// Outcome for a query that was run; the status follows from the results
    #[must_use]
    pub fn searched(results: Vec<T>) -> Self {
        let status = if results.is_empty() {
            SearchStatus::SearchedEmpty
        } else {
            SearchStatus::SearchedWithResults
        };
        Self { status, results }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn results(&self) -> &[T] {
        &self.results
    }

    #[inline]
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Transform every result, keeping order and status
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchOutcome<U> {
        SearchOutcome {
            status: self.status,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for SearchOutcome<T> {
    fn default() -> Self {
        Self::not_searched()
    }
}
