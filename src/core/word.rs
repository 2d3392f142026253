//! Wordle word representation
//!
//! A Word stores its letters along with a cached letter-count table used by
//! feedback calculation, candidate filtering and similarity scoring.

use super::LetterCounts;
use crate::error::InputError;
use std::fmt;

/// Longest supported word (patterns are base-3 encoded in a `u32`)
pub const MAX_WORD_LENGTH: usize = 20;

/// An immutable lowercase word with its letter counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: LetterCounts,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length is 0 or greater than `MAX_WORD_LENGTH`
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text: String = text.into().to_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(InputError::InvalidCharacters(text));
        }

        // All ASCII from here on, so byte length == letter count
        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(InputError::InvalidLength {
                len: text.len(),
                max: MAX_WORD_LENGTH,
            });
        }

        let counts = LetterCounts::of(text.as_bytes());

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words have at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, if in range
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters().get(position).copied()
    }

    /// Cached occurrence count of each letter
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.counts.get(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
