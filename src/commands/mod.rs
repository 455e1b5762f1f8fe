//! Command implementations

pub mod benchmark;
pub mod crossword;
pub mod interactive;
pub mod letters;
mod report;
pub mod wordle;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use crossword::{CrosswordConfig, run_crossword};
pub use interactive::{Session, Step, run_interactive};
pub use letters::{LettersConfig, run_letters};
pub use report::{ReportEntry, SearchReport};
pub use wordle::{GuessRow, WordleConfig, run_wordle};
