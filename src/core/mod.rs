//! Core domain types for word puzzles
//!
//! This module contains the fundamental value types shared by every matcher.
//! All types here are pure, immutable once built, and cheap to share across threads.

mod letters;
mod scoring;
mod word;

pub use letters::LetterSet;
pub use scoring::{tile_value, word_value};
pub use word::{Word, WordError};
