//! Opening book
//!
//! The best first guess over a full vocabulary, and the best second guess
//! for each pattern it can produce, are the same for every puzzle and costly
//! to compute live. The book stores them.
//!
//! Text format: the first non-empty line is the first guess; every further
//! line is `<pattern> <second guess>`, with the pattern written as one symbol
//! per position (`1` absent, `2` present, `3` correct). Lines starting with
//! `#` are ignored.

use super::strategy::{Strategy, StrategyKind, StrategyType};
use super::{CandidateStore, Vocabulary};
use crate::core::{Pattern, Word};
use crate::error::{SolverError, SolverResult};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use tracing::info;

/// Precomputed first and second guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningBook {
    first: Word,
    seconds: FxHashMap<Pattern, Word>,
}

impl OpeningBook {
    /// Create a book from a first guess and its pattern → second guess table
    #[must_use]
    pub const fn new(first: Word, seconds: FxHashMap<Pattern, Word>) -> Self {
        Self { first, seconds }
    }

    /// The fixed first guess
    #[must_use]
    pub const fn first(&self) -> &Word {
        &self.first
    }

    /// Second guess after the first guess produced `pattern`
    #[must_use]
    pub fn second(&self, pattern: Pattern) -> Option<&Word> {
        self.seconds.get(&pattern)
    }

    /// Book move for a guess number, if the book covers it
    ///
    /// Guess #1 is always covered; guess #2 only when `last_pattern` has an
    /// entry; later guesses never.
    #[must_use]
    pub fn lookup(&self, guess_number: usize, last_pattern: Option<Pattern>) -> Option<&Word> {
        match guess_number {
            1 => Some(&self.first),
            2 => last_pattern.and_then(|pattern| self.second(pattern)),
            _ => None,
        }
    }

    /// Number of second-guess entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// True if the book has no second-guess entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    /// Parse the text format
    ///
    /// # Errors
    /// Returns `Configuration` for a missing first guess, a malformed line,
    /// an invalid word or pattern, a pattern of the wrong length, a pattern
    /// listed twice, or a second guess repeating the first.
    pub fn parse(text: &str) -> SolverResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (_, first_line) = lines
            .next()
            .ok_or_else(|| SolverError::Configuration("opening book is empty".into()))?;
        let first = Word::new(first_line).map_err(|e| {
            SolverError::Configuration(format!("opening book first guess: {e}"))
        })?;

        let mut seconds = FxHashMap::default();
        for (line_number, line) in lines {
            let bad_line = |reason: String| {
                SolverError::Configuration(format!("opening book line {line_number}: {reason}"))
            };

            let mut fields = line.split_whitespace();
            let (Some(pattern_text), Some(word_text), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(bad_line(format!("expected `<pattern> <word>`, got `{line}`")));
            };

            let pattern: Pattern = pattern_text.parse().map_err(|e| bad_line(format!("{e}")))?;
            if pattern.len() != first.len() {
                return Err(bad_line(format!(
                    "pattern `{pattern_text}` does not match {}-letter first guess",
                    first.len()
                )));
            }
            let word = Word::new(word_text).map_err(|e| bad_line(format!("{e}")))?;
            if word == first {
                return Err(bad_line(format!("second guess repeats first guess `{first}`")));
            }

            if seconds.insert(pattern, word).is_some() {
                return Err(bad_line(format!("pattern `{pattern}` listed twice")));
            }
        }

        Ok(Self { first, seconds })
    }

    /// Check the book against the vocabulary it will be used with
    ///
    /// # Errors
    /// Returns `Configuration` if a book word has the wrong length, if a
    /// second guess repeats the first, or if the first guess can produce a
    /// (non-winning) pattern against some vocabulary word that has no
    /// second-guess entry.
    pub fn validate(&self, vocabulary: &Vocabulary) -> SolverResult<()> {
        let length = vocabulary.word_length();

        if self.first.len() != length {
            return Err(SolverError::Configuration(format!(
                "opening book first guess `{}` has {} letters, vocabulary words have {length}",
                self.first,
                self.first.len()
            )));
        }

        if let Some((pattern, word)) = self.seconds.iter().find(|(_, w)| w.len() != length) {
            return Err(SolverError::Configuration(format!(
                "opening book second guess `{word}` for pattern {pattern} has {} letters, expected {length}",
                word.len()
            )));
        }

        if let Some((pattern, _)) = self.seconds.iter().find(|(_, w)| **w == self.first) {
            return Err(SolverError::Configuration(format!(
                "opening book second guess for pattern {pattern} repeats first guess `{}`",
                self.first
            )));
        }

        for target in vocabulary.words() {
            let pattern = Pattern::calculate_unchecked(&self.first, target);
            if !pattern.is_perfect() && !self.seconds.contains_key(&pattern) {
                return Err(SolverError::Configuration(format!(
                    "opening book has no second guess for pattern {pattern} (first guess `{}`, e.g. target `{target}`)",
                    self.first
                )));
            }
        }

        Ok(())
    }

    /// Precompute a book for a scoring strategy
    ///
    /// Uses `first` when given, otherwise chooses it live over the whole
    /// vocabulary. Every non-winning pattern the first guess can produce gets
    /// the second guess the strategy would choose live after seeing it.
    ///
    /// # Errors
    /// Returns `Configuration` for the random strategy (it has no use for a
    /// book) or a first guess of the wrong length.
    pub fn generate(
        vocabulary: &Vocabulary,
        first: Option<Word>,
        kind: StrategyKind,
    ) -> SolverResult<Self> {
        if !kind.uses_opening_book() {
            return Err(SolverError::Configuration(format!(
                "the {kind} strategy does not use an opening book"
            )));
        }

        let first = match first {
            Some(word) => word,
            None => {
                let store = CandidateStore::new(vocabulary);
                StrategyType::new(kind, 0, None).propose(&store, 1, None)?
            }
        };
        if first.len() != vocabulary.word_length() {
            return Err(SolverError::Configuration(format!(
                "first guess `{first}` has {} letters, vocabulary words have {}",
                first.len(),
                vocabulary.word_length()
            )));
        }

        let patterns: FxHashSet<Pattern> = vocabulary
            .words()
            .iter()
            .map(|target| Pattern::calculate_unchecked(&first, target))
            .filter(|pattern| !pattern.is_perfect())
            .collect();
        let patterns: Vec<Pattern> = patterns.into_iter().collect();

        info!(
            strategy = %kind,
            first = %first,
            patterns = patterns.len(),
            "generating opening book"
        );

        let seconds = patterns
            .par_iter()
            .map(|&pattern| -> SolverResult<(Pattern, Word)> {
                let mut store = CandidateStore::new(vocabulary);
                store.apply(&first, pattern)?;
                let second = StrategyType::new(kind, 0, None).propose(&store, 2, Some(pattern))?;
                Ok((pattern, second))
            })
            .collect::<SolverResult<FxHashMap<_, _>>>()?;

        Ok(Self { first, seconds })
    }
}

impl fmt::Display for OpeningBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first)?;
        let mut entries: Vec<(&Pattern, &Word)> = self.seconds.iter().collect();
        entries.sort_unstable_by_key(|(pattern, _)| **pattern);
        for (pattern, word) in entries {
            writeln!(f, "{pattern} {word}")?;
        }
        Ok(())
    }
}
