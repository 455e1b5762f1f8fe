//! Formatting utilities for terminal output

use crate::commands::SearchReport;
use crate::matcher::SearchStatus;

/// `"1 word"`, `"3 words"`
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Headline for a search report
#[must_use]
pub fn status_message(report: &SearchReport) -> String {
    match report.status {
        SearchStatus::NotSearched => "Nothing to search yet".to_string(),
        SearchStatus::SearchedEmpty => "No words found".to_string(),
        SearchStatus::SearchedWithResults => {
            format!("Found {}", pluralize(report.len(), "word", "words"))
        }
    }
}

/// Write letters played with a blank in lowercase, the usual board notation
#[must_use]
pub fn blank_notation(word: &str, wildcards: &[usize]) -> String {
    word.chars()
        .enumerate()
        .map(|(index, ch)| {
            if wildcards.contains(&index) {
                ch.to_ascii_lowercase()
            } else {
                ch
            }
        })
        .collect()
}

/// Lay out cells in as many left-aligned columns as fit into `width`
#[must_use]
pub fn columns(cells: &[String], width: usize) -> Vec<String> {
    let Some(widest) = cells.iter().map(|c| c.chars().count()).max() else {
        return Vec::new();
    };
    let cell_width = widest + 2;
    let per_line = (width / cell_width).max(1);

    cells
        .chunks(per_line)
        .map(|line| {
            let mut text: String = line
                .iter()
                .map(|cell| format!("{cell:<cell_width$}"))
                .collect();
            text.truncate(text.trim_end().len());
            text
        })
        .collect()
}

/// Footer for output cut short by the result limit
#[must_use]
pub fn truncation_note(total: usize, shown: usize) -> Option<String> {
    (total > shown).then(|| format!("... and {} more", total - shown))
}
