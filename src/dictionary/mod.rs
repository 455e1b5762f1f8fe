//! The shared dictionary
//!
//! An immutable, ordered list of uppercase words held in memory. Every matcher
//! borrows it read-only and scans it linearly, so a single `Dictionary` can be
//! shared across threads without locking.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use log::debug;
use std::path::{Path, PathBuf};

/// Errors raised while building a dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list {} contains no valid words", .path.display())]
    Empty { path: PathBuf },
}

/// Immutable ordered word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already validated words, keeping their order
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let words = loader::words_from_slice(WORDS);
        debug!("Loaded {} embedded words", words.len());
        Self::new(words)
    }

    /// Load a dictionary from a word list file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if it holds no valid word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)?;
        if words.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }
        debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self::new(words))
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words with exactly `length` letters, in dictionary order
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == length)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
