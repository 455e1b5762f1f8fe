//! Benchmark command
//!
//! Builds random crossword and letter-tile queries from dictionary words and
//! runs them across the thread pool. Every source word must come back in the
//! results of both of its queries.

use crate::core::{LetterSet, Word};
use crate::dictionary::Dictionary;
use crate::matcher::{AnagramQuery, PositionPattern, Tiles, match_anagrams, match_pattern};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of source words to draw
    pub count: usize,
    /// Fixed seed for a reproducible workload; random when `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// The two queries derived from one source word
#[derive(Debug, Clone)]
pub struct BenchmarkCase<'d> {
    pub source: &'d Word,
    pub pattern: PositionPattern,
    pub anagram: AnagramQuery,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub words: usize,
    pub queries: usize,
    pub crossword_matches: usize,
    pub anagram_matches: usize,
    /// Source words missing from their own results
    pub failures: Vec<String>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Derive a crossword and a letter-tile query from `word`
///
/// The pattern masks each letter with probability one half. The tiles are the
/// word's own letters with one of them swapped for a blank.
pub fn make_case<'d, R: Rng + ?Sized>(word: &'d Word, rng: &mut R) -> BenchmarkCase<'d> {
    let masked: String = word
        .bytes()
        .iter()
        .map(|&letter| {
            if rng.random_bool(0.5) {
                '_'
            } else {
                letter as char
            }
        })
        .collect();
    // Built from a validated word, so only letters and '_' appear
    let pattern = PositionPattern::compile(&masked).unwrap_or_default();

    let mut tiles = Tiles::from_word(word);
    if let Some(&blanked) = word.bytes().choose(rng) {
        tiles.remove_letter(blanked);
        tiles.add_wildcards(1);
    }

    BenchmarkCase {
        source: word,
        pattern,
        anagram: AnagramQuery::new(tiles),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    bar.set_style(style);
    bar
}

/// Run the benchmark workload
#[must_use]
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let sources: Vec<&Word> = dictionary
        .words()
        .choose_multiple(&mut rng, config.count)
        .collect();
    let cases: Vec<BenchmarkCase<'_>> = sources
        .into_iter()
        .map(|word| make_case(word, &mut rng))
        .collect();

    debug!("Benchmarking {} words", cases.len());
    let bar = progress_bar(cases.len(), config.show_progress);
    let start = Instant::now();

    let outcomes: Vec<(usize, usize, bool)> = cases
        .par_iter()
        .map(|case| {
            let crossword = match_pattern(dictionary, &case.pattern, LetterSet::EMPTY);
            let anagram = match_anagrams(dictionary, &case.anagram);

            let found = crossword.results().contains(&case.source)
                && anagram
                    .results()
                    .iter()
                    .any(|scored| scored.word == case.source);
            bar.inc(1);
            (crossword.len(), anagram.len(), found)
        })
        .collect();

    let duration = start.elapsed();
    bar.finish_with_message("Complete!");

    let failures = cases
        .iter()
        .zip(&outcomes)
        .filter(|(_, outcome)| !outcome.2)
        .map(|(case, _)| case.source.text().to_string())
        .collect();

    let queries = cases.len() * 2;
    BenchmarkResult {
        words: cases.len(),
        queries,
        crossword_matches: outcomes.iter().map(|o| o.0).sum(),
        anagram_matches: outcomes.iter().map(|o| o.1).sum(),
        failures,
        duration,
        queries_per_second: queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
