//! Word lists for Wordle solving
//!
//! Vocabularies and opening books are read from text files at startup.

pub mod loader;

pub use loader::{load_from_file, load_opening_book, words_from_slice};
