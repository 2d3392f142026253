//! Candidate store
//!
//! Holds the words still consistent with every piece of feedback seen in a
//! session, plus the minimum letter counts that feedback has confirmed.

use super::Vocabulary;
use crate::core::{Feedback, LetterCounts, Pattern, Word};
use crate::error::{InputError, SolverError, SolverResult};
use tracing::trace;

/// Live candidate set for one session
///
/// Borrows the shared [`Vocabulary`]; owns only the mutable state.
#[derive(Debug, Clone)]
pub struct CandidateStore<'a> {
    vocabulary: &'a Vocabulary,
    /// Vocabulary indices, ascending
    candidates: Vec<usize>,
    min_counts: LetterCounts,
    solved: bool,
}

impl<'a> CandidateStore<'a> {
    /// Start with the full vocabulary as candidates
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            candidates: (0..vocabulary.len()).collect(),
            min_counts: LetterCounts::default(),
            solved: false,
        }
    }

    /// Start with a configured subset of the vocabulary
    ///
    /// Candidates keep vocabulary order regardless of the order of `subset`.
    ///
    /// # Errors
    /// Returns `Configuration` if the subset is empty or names a word outside
    /// the vocabulary.
    pub fn with_candidates(vocabulary: &'a Vocabulary, subset: &[Word]) -> SolverResult<Self> {
        let mut candidates = subset
            .iter()
            .map(|word| {
                vocabulary.position(word).ok_or_else(|| {
                    SolverError::Configuration(format!("candidate `{word}` is not in the vocabulary"))
                })
            })
            .collect::<SolverResult<Vec<_>>>()?;

        if candidates.is_empty() {
            return Err(SolverError::Configuration(
                "initial candidate set is empty".into(),
            ));
        }

        candidates.sort_unstable();
        candidates.dedup();

        Ok(Self {
            vocabulary,
            candidates,
            min_counts: LetterCounts::default(),
            solved: false,
        })
    }

    /// Shared vocabulary this store draws from
    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Cached letter-count table of a word
    #[inline]
    #[must_use]
    pub fn letter_counts<'w>(&self, word: &'w Word) -> &'w LetterCounts {
        word.letter_counts()
    }

    /// Minimum letter counts confirmed so far
    #[inline]
    #[must_use]
    pub const fn min_counts(&self) -> &LetterCounts {
        &self.min_counts
    }

    /// Remaining candidates in vocabulary order
    pub fn candidates(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let words = self.vocabulary.words();
        self.candidates.iter().map(move |&index| &words[index])
    }

    /// Remaining candidates collected into a vector
    #[must_use]
    pub fn candidate_words(&self) -> Vec<&'a Word> {
        self.candidates().collect()
    }

    /// Check whether a word is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.vocabulary
            .position(word)
            .is_some_and(|index| self.candidates.binary_search(&index).is_ok())
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True once no candidates remain (solved or exhausted)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True once an all-correct pattern has been applied
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Apply one round of feedback: validate, tighten constraints, filter
    ///
    /// # Errors
    /// Returns `InvalidInput` if the guess or pattern length differs from the
    /// vocabulary's word length.
    pub fn apply(&mut self, guess: &Word, pattern: Pattern) -> SolverResult<()> {
        let expected = self.vocabulary.word_length();
        if guess.len() != expected {
            return Err(InputError::LengthMismatch {
                guess: guess.len(),
                target: expected,
            }
            .into());
        }
        if pattern.len() != expected {
            return Err(InputError::InvalidPattern(pattern.to_string()).into());
        }

        self.update_min_counts(guess, pattern);
        self.filter(guess, pattern);
        Ok(())
    }

    /// Raise the minimum-count constraint from the latest feedback
    ///
    /// For each letter, the number of its correct or present positions in the
    /// guess is a lower bound on its count in the target. Never lowers.
    pub fn update_min_counts(&mut self, guess: &Word, pattern: Pattern) {
        self.min_counts = tightened(&self.min_counts, guess, pattern);
    }

    /// Remove every candidate inconsistent with `guess` / `pattern`
    ///
    /// Uses the current minimum counts, so call [`update_min_counts`] first
    /// (or use [`apply`]). An all-correct pattern marks the store solved and
    /// empties it. Filtering an empty store does nothing.
    ///
    /// [`update_min_counts`]: Self::update_min_counts
    /// [`apply`]: Self::apply
    pub fn filter(&mut self, guess: &Word, pattern: Pattern) {
        if self.candidates.is_empty() {
            return;
        }

        if pattern.is_perfect() {
            self.solved = true;
            self.candidates.clear();
            return;
        }

        let before = self.candidates.len();
        let words = self.vocabulary.words();
        let min_counts = &self.min_counts;
        self.candidates
            .retain(|&index| keeps(&words[index], guess, pattern, min_counts));

        trace!(
            guess = %guess,
            pattern = %pattern,
            before,
            after = self.candidates.len(),
            "filtered candidates"
        );
    }

    /// Number of candidates that would survive `apply(guess, pattern)`
    ///
    /// Does not modify the store. An all-correct pattern leaves nothing.
    #[must_use]
    pub fn remaining_after(&self, guess: &Word, pattern: Pattern) -> usize {
        if self.candidates.is_empty() || pattern.is_perfect() {
            return 0;
        }
        let min_counts = tightened(&self.min_counts, guess, pattern);
        self.candidates()
            .filter(|word| keeps(word, guess, pattern, &min_counts))
            .count()
    }
}

/// Minimum counts after folding in one round of feedback
fn tightened(current: &LetterCounts, guess: &Word, pattern: Pattern) -> LetterCounts {
    let mut confirmed = LetterCounts::default();
    for (&letter, feedback) in guess.letters().iter().zip(pattern.iter()) {
        if feedback != Feedback::Absent {
            confirmed.increment(letter);
        }
    }

    let mut next = *current;
    for (letter, count) in confirmed.iter() {
        next.raise(letter, count);
    }
    next
}

/// Per-position consistency rules
fn keeps(word: &Word, guess: &Word, pattern: Pattern, min_counts: &LetterCounts) -> bool {
    guess
        .letters()
        .iter()
        .zip(pattern.iter())
        .enumerate()
        .all(|(position, (&letter, feedback))| {
            let at_position = word.letter_at(position) == Some(letter);
            match feedback {
                // No more copies than already confirmed
                Feedback::Absent => word.count_of(letter) <= min_counts.get(letter),
                // At least the confirmed copies, just not here
                Feedback::Present => !at_position && word.count_of(letter) >= min_counts.get(letter),
                Feedback::Correct => at_position,
            }
        })
}
