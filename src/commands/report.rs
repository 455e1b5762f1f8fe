//! Printable search results shared by the search commands

use crate::core::Word;
use crate::matcher::{ScoredWord, SearchOutcome, SearchStatus};

/// One result line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub word: String,
    /// Tile score, only for letter-tile searches
    pub score: Option<u32>,
    /// Indices of letters played with a blank
    pub wildcards: Vec<usize>,
}

/// Results of one search, detached from the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub status: SearchStatus,
    pub entries: Vec<ReportEntry>,
}

impl SearchReport {
    /// Report for a query that was rejected before searching
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            status: SearchStatus::SearchedEmpty,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when any entry carries a score
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.entries.iter().any(|entry| entry.score.is_some())
    }
}

impl From<SearchOutcome<&Word>> for SearchReport {
    fn from(outcome: SearchOutcome<&Word>) -> Self {
        let status = outcome.status();
        let entries = outcome
            .into_results()
            .into_iter()
            .map(|word| ReportEntry {
                word: word.text().to_string(),
                score: None,
                wildcards: Vec::new(),
            })
            .collect();
        Self { status, entries }
    }
}

impl From<SearchOutcome<ScoredWord<'_>>> for SearchReport {
    fn from(outcome: SearchOutcome<ScoredWord<'_>>) -> Self {
        let status = outcome.status();
        let entries = outcome
            .into_results()
            .into_iter()
            .map(|scored| ReportEntry {
                word: scored.word.text().to_string(),
                score: Some(scored.score),
                wildcards: scored.wildcards.iter().map(|w| w.index).collect(),
            })
            .collect();
        Self { status, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::WildcardUse;

    #[test]
    fn plain_words_have_no_score() {
        let cat = Word::new("cat").unwrap();
        let report = SearchReport::from(SearchOutcome::searched(vec![&cat]));

        assert_eq!(report.status, SearchStatus::SearchedWithResults);
        assert_eq!(report.entries[0].word, "CAT");
        assert!(!report.is_scored());
    }

    #[test]
    fn scored_words_keep_blank_positions() {
        let robed = Word::new("robed").unwrap();
        let outcome = SearchOutcome::searched(vec![ScoredWord {
            word: &robed,
            score: 6,
            wildcards: vec![WildcardUse {
                index: 4,
                letter: b'D',
            }],
        }]);
        let report = SearchReport::from(outcome);

        assert!(report.is_scored());
        assert_eq!(report.entries[0].score, Some(6));
        assert_eq!(report.entries[0].wildcards, vec![4]);
    }

    #[test]
    fn not_searched_carries_over() {
        let report = SearchReport::from(SearchOutcome::<&Word>::not_searched());
        assert_eq!(report.status, SearchStatus::NotSearched);
        assert!(report.is_empty());
        assert_eq!(SearchReport::empty().status, SearchStatus::SearchedEmpty);
    }
}
