//! Word puzzle helper
//!
//! Filters a word list against three kinds of puzzle clue: crossword patterns,
//! Wordle feedback and Scrabble-style letter tiles.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhelp::dictionary::Dictionary;
//! use wordhelp::matcher::pattern::search;
//! use wordhelp::matcher::{AnagramQuery, Anchor, match_anagrams};
//!
//! let dictionary = Dictionary::embedded();
//!
//! // Crossword: three letters, C _ T
//! let outcome = search(&dictionary, "C_T", "").unwrap();
//! assert!(outcome.results().iter().any(|w| w.text() == "CAT"));
//!
//! // Letter tiles with one blank, around a fixed "OW"
//! let query = AnagramQuery::parse("CRD", "OW", Anchor::Middle);
//! let outcome = match_anagrams(&dictionary, &query);
//! assert!(outcome.results().iter().any(|s| s.word.text() == "CROWD"));
//! ```

// Core domain types
pub mod core;

// Word list
pub mod dictionary;

// Matching engine
pub mod matcher;

// Wordle feedback grid
pub mod grid;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
