//! Core domain types for Wordle
//!
//! Words, letter-count tables and the feedback engine. Everything here is
//! pure and has no knowledge of vocabularies or strategies.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET_SIZE, LetterCounts};
pub use pattern::{Feedback, Pattern};
pub use word::{MAX_WORD_LENGTH, Word};
