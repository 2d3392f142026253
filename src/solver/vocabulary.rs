//! Shared vocabulary context
//!
//! Built once from the initial word list and passed by reference to every
//! candidate store and session. Each word carries its own letter-count
//! table, so nothing here is recomputed per session.

use crate::core::Word;
use crate::error::{SolverError, SolverResult};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Immutable, ordered vocabulary of same-length words
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    positions: FxHashMap<String, usize>,
    word_length: usize,
}

impl Vocabulary {
    /// Build a vocabulary from words in the order given
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `Configuration` if the list is empty or mixes word lengths.
    pub fn new(words: impl IntoIterator<Item = Word>) -> SolverResult<Self> {
        let mut unique = Vec::new();
        let mut positions = FxHashMap::default();
        let mut duplicates = 0usize;

        for word in words {
            if positions.contains_key(word.text()) {
                duplicates += 1;
                continue;
            }
            positions.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        let Some(first) = unique.first() else {
            return Err(SolverError::Configuration(
                "initial vocabulary is empty".into(),
            ));
        };
        let word_length = first.len();

        if let Some(odd) = unique.iter().find(|w| w.len() != word_length) {
            return Err(SolverError::Configuration(format!(
                "vocabulary mixes word lengths: `{first}` has {word_length} letters, `{odd}` has {}",
                odd.len()
            )));
        }

        if duplicates > 0 {
            debug!(duplicates, "dropped duplicate vocabulary words");
        }

        Ok(Self {
            words: unique,
            positions,
            word_length,
        })
    }

    /// Build a vocabulary from string slices
    ///
    /// # Errors
    /// Returns `InvalidInput` for a malformed word, or `Configuration` as
    /// for [`Vocabulary::new`].
    pub fn from_texts<'s>(texts: impl IntoIterator<Item = &'s str>) -> SolverResult<Self> {
        let words = texts
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// All words in vocabulary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Index of a word, if present
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.positions.get(word.text()).copied()
    }

    /// Check membership
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.positions.contains_key(word.text())
    }

    /// Letter count shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty vocabularies are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
