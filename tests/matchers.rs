//! Integration tests for the three matchers
//!
//! These run against the embedded dictionary and a small fixture file, checking
//! each result independently of the matcher that produced it.

use wordhelp::core::{Word, word_value};
use wordhelp::dictionary::Dictionary;
use wordhelp::grid::Grid;
use wordhelp::matcher::pattern::search;
use wordhelp::matcher::{
    AnagramQuery, Anchor, SearchStatus, Tiles, WordleConstraints, match_anagrams,
    match_constraints,
};

fn dictionary(words: &[&str]) -> Dictionary {
    words.iter().map(|w| Word::new(*w).unwrap()).collect()
}

mod dictionary_loading {
    use super::*;

    #[test]
    fn fixture_file_skips_comments_blanks_and_invalid_entries() {
        let dict = Dictionary::from_file("tests/fixtures/small_words.txt").unwrap();
        let words: Vec<&str> = dict.iter().map(Word::text).collect();
        assert_eq!(words, vec!["CAT", "COT", "CUT", "DOG", "LLAMA"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Dictionary::from_file("tests/fixtures/no_such_file.txt").is_err());
    }

    #[test]
    fn embedded_dictionary_is_uppercase_and_non_empty() {
        let dict = Dictionary::embedded();
        assert!(dict.len() > 1000);
        assert!(
            dict.iter()
                .all(|w| !w.is_empty() && w.bytes().iter().all(u8::is_ascii_uppercase))
        );
    }
}

mod crossword {
    use super::*;

    #[test]
    fn c_t_example() {
        let dict = dictionary(&["CAT", "COT", "CUT", "DOG"]);
        let outcome = search(&dict, "C_T", "").unwrap();
        let words: Vec<&str> = outcome.results().iter().map(|w| w.text()).collect();
        assert_eq!(words, vec!["CAT", "COT", "CUT"]);
    }

    #[test]
    fn every_result_fits_pattern_and_required_letters() {
        let dict = Dictionary::embedded();
        let outcome = search(&dict, "?R__E", "i").unwrap();

        assert_eq!(outcome.status(), SearchStatus::SearchedWithResults);
        for word in outcome.results() {
            assert_eq!(word.len(), 5);
            assert_eq!(word.letter_at(1), Some(b'R'));
            assert_eq!(word.letter_at(4), Some(b'E'));
            assert!(word.has_letter(b'I'));
        }
        assert!(outcome.results().iter().any(|w| w.text() == "BRIDE"));
    }

    #[test]
    fn required_letter_intersection() {
        let dict = Dictionary::embedded();
        let outcome = search(&dict, "____", "AE").unwrap();
        let words: Vec<&str> = outcome.results().iter().map(|w| w.text()).collect();

        assert!(words.contains(&"ABLE"));
        assert!(words.contains(&"BEAD"));
        assert!(!words.contains(&"EDGE"));
        assert!(!words.contains(&"TREE"));
    }

    #[test]
    fn results_sorted() {
        let dict = Dictionary::embedded();
        let outcome = search(&dict, "B____", "").unwrap();
        assert!(outcome.results().windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn not_searched_versus_searched_empty() {
        let dict = Dictionary::embedded();
        assert_eq!(search(&dict, "", "").unwrap().status(), SearchStatus::NotSearched);
        assert_eq!(
            search(&dict, "QQQQQQQQ", "").unwrap().status(),
            SearchStatus::SearchedEmpty
        );
        assert!(search(&dict, "C[AO]T", "").is_err());
    }
}

mod wordle {
    use super::*;

    #[test]
    fn grid_feedback_filters_embedded_words() {
        let dict = Dictionary::embedded();
        let mut grid = Grid::default();
        grid.set_row(0, "CRANE", "-Y--G").unwrap();

        let outcome = match_constraints(&dict, &grid.constraints(), grid.columns());
        assert_eq!(outcome.status(), SearchStatus::SearchedWithResults);
        for word in outcome.results() {
            assert_eq!(word.len(), 5);
            assert_eq!(word.letter_at(4), Some(b'E'));
            assert!(word.has_letter(b'R'));
            assert_ne!(word.letter_at(1), Some(b'R'));
            assert!(!word.has_letter(b'C') && !word.has_letter(b'A') && !word.has_letter(b'N'));
        }
        let words: Vec<&str> = outcome.results().iter().map(|w| w.text()).collect();
        // R in second place was yellow, so BRIDE and PROBE are out
        assert!(!words.contains(&"BRIDE"));
        assert!(!words.contains(&"PROBE"));
        assert!(words.contains(&"HORSE"));
    }

    #[test]
    fn green_and_gray_on_same_letter_keeps_double_letters() {
        let dict = dictionary(&["LLAMA", "LEMON", "LOYAL", "ALLOY"]);
        let mut constraints = WordleConstraints::new();
        constraints.add_green(0, b'L');
        constraints.add_gray(b'L');

        let outcome = match_constraints(&dict, &constraints, 5);
        assert!(outcome.results().iter().any(|w| w.text() == "LLAMA"));
    }

    #[test]
    fn only_requested_length() {
        let dict = Dictionary::embedded();
        let mut constraints = WordleConstraints::new();
        constraints.add_yellow(0, b'E');

        for length in [3, 4, 6] {
            let outcome = match_constraints(&dict, &constraints, length);
            assert!(outcome.results().iter().all(|w| w.len() == length));
        }
    }

    #[test]
    fn empty_grid_not_searched() {
        let dict = Dictionary::embedded();
        let grid = Grid::default();
        let outcome = match_constraints(&dict, &grid.constraints(), grid.columns());
        assert_eq!(outcome.status(), SearchStatus::NotSearched);
    }

    #[test]
    fn letter_cycled_back_to_uncoloured_still_searches() {
        let dict = dictionary(&["CRANE", "SLATE", "CAT"]);
        let mut grid = Grid::default();
        grid.type_letter('Q').unwrap();
        for _ in 0..3 {
            grid.cycle(0, 0).unwrap();
        }
        assert!(grid.has_letters());

        let outcome = match_constraints(&dict, &grid.constraints(), grid.columns());
        assert_eq!(outcome.status(), SearchStatus::SearchedWithResults);
        let words: Vec<&str> = outcome.results().iter().map(|w| w.text()).collect();
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn idempotent() {
        let dict = Dictionary::embedded();
        let mut grid = Grid::default();
        grid.set_row(0, "SLATE", "--Y--").unwrap();
        let constraints = grid.constraints();

        assert_eq!(
            match_constraints(&dict, &constraints, 5),
            match_constraints(&dict, &constraints, 5)
        );
    }
}

mod letters {
    use super::*;

    /// Letters of `word` that the tiles cannot supply on their own
    fn shortfall(word: &Word, tiles: &Tiles) -> u32 {
        word.letter_counts()
            .iter()
            .map(|(&letter, &needed)| needed.saturating_sub(tiles.count(letter)))
            .sum()
    }

    #[test]
    fn subset_law_over_embedded_dictionary() {
        let dict = Dictionary::embedded();
        let query = AnagramQuery::parse("EROIBUDST.", "", Anchor::Beginning);
        let outcome = match_anagrams(&dict, &query);
        let tiles = query.tiles();

        let matched: Vec<&str> = outcome.results().iter().map(|s| s.word.text()).collect();
        for word in &dict {
            let formable = shortfall(word, tiles) <= tiles.wildcards();
            assert_eq!(
                formable,
                matched.contains(&word.text()),
                "disagreement on {}",
                word.text()
            );
        }
    }

    #[test]
    fn scores_subtract_blank_letters() {
        let dict = Dictionary::embedded();
        let query = AnagramQuery::parse("EROIBU.", "", Anchor::Beginning);
        let outcome = match_anagrams(&dict, &query);

        for scored in outcome.results() {
            let blanks: u32 = scored
                .wildcards
                .iter()
                .map(|w| wordhelp::core::tile_value(w.letter))
                .sum();
            assert_eq!(scored.score, word_value(scored.word.bytes()) - blanks);
            assert!(scored.wildcards.len() <= 1);
        }
    }

    #[test]
    fn robed_with_and_without_blank() {
        let dict = dictionary(&["ROBED"]);

        let full = match_anagrams(&dict, &AnagramQuery::parse("DEROIBU.", "", Anchor::Beginning));
        assert_eq!(full.results()[0].score, 8);
        assert!(full.results()[0].wildcards.is_empty());

        let short = match_anagrams(&dict, &AnagramQuery::parse("EROIBU.", "", Anchor::Beginning));
        assert_eq!(short.results()[0].score, 6);
        assert_eq!(short.results()[0].wildcards[0].letter, b'D');
    }

    #[test]
    fn middle_anchor_rejects_edges() {
        let dict = dictionary(&["CROWD", "OWL", "BOW", "BROWN"]);
        let query = AnagramQuery::parse("CRDBN", "OW", Anchor::Middle);
        let outcome = match_anagrams(&dict, &query);

        let words: Vec<&str> = outcome.results().iter().map(|s| s.word.text()).collect();
        // CROWD 11, BROWN 10
        assert_eq!(words, vec!["CROWD", "BROWN"]);
    }

    #[test]
    fn ranking_is_a_strict_order() {
        let dict = Dictionary::embedded();
        let outcome = match_anagrams(&dict, &AnagramQuery::parse("AEINRST..", "", Anchor::End));

        assert!(outcome.results().windows(2).all(|pair| {
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].word < pair[1].word)
        }));
    }

    #[test]
    fn not_searched_versus_searched_empty() {
        let dict = Dictionary::embedded();
        let idle = match_anagrams(&dict, &AnagramQuery::parse("  ", "", Anchor::Middle));
        assert_eq!(idle.status(), SearchStatus::NotSearched);

        let empty = match_anagrams(&dict, &AnagramQuery::parse("Q", "ZZZZ", Anchor::End));
        assert_eq!(empty.status(), SearchStatus::SearchedEmpty);
    }
}
