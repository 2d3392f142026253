//! Word analysis command
//!
//! Scores a single word the way each strategy would, against the full
//! vocabulary.

use crate::core::Word;
use crate::error::{InputError, SolverResult};
use crate::solver::entropy::{calculate_entropy, partition_sizes};
use crate::solver::min_vocab::expected_remaining_total;
use crate::solver::similarity::aggregate_similarity;
use crate::solver::{CandidateStore, Vocabulary};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub in_vocabulary: bool,
    pub total_candidates: usize,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    /// Distinct feedback patterns the word can produce
    pub partitions: usize,
    /// Candidates left, summed over every possible target
    pub remaining_total: usize,
    pub aggregate_similarity: usize,
}

impl AnalysisResult {
    /// Average candidates left after playing the word
    #[must_use]
    pub fn average_remaining(&self) -> f64 {
        if self.total_candidates == 0 {
            0.0
        } else {
            self.remaining_total as f64 / self.total_candidates as f64
        }
    }
}

/// Analyze a word against the whole vocabulary
///
/// The word does not have to be in the vocabulary.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (bad characters or length)
/// - The word length differs from the vocabulary's
pub fn analyze_word(word: &str, vocabulary: &Vocabulary) -> SolverResult<AnalysisResult> {
    let word_obj = Word::new(word)?;
    if word_obj.len() != vocabulary.word_length() {
        return Err(InputError::LengthMismatch {
            guess: word_obj.len(),
            target: vocabulary.word_length(),
        }
        .into());
    }

    let store = CandidateStore::new(vocabulary);
    let candidates = store.candidate_words();

    let entropy = calculate_entropy(&word_obj, &candidates);
    let total_candidates = candidates.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        in_vocabulary: vocabulary.contains(&word_obj),
        total_candidates,
        entropy,
        expected_reduction,
        expected_remaining,
        partitions: partition_sizes(&word_obj, &candidates).len(),
        remaining_total: expected_remaining_total(&word_obj, &candidates, &store),
        aggregate_similarity: aggregate_similarity(&word_obj, &candidates),
    })
}
