//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, treating every candidate
/// as equally likely to be the target.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates producing pattern x.
///
/// # Examples
/// ```
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("zzzzz").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9); // even binary split
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&partition_sizes(guess, candidates))
}

/// Group candidates by the pattern they produce with the guess
///
/// Candidates whose length differs from the guess are skipped.
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        if candidate.len() != guess.len() {
            continue;
        }
        let pattern = Pattern::calculate_unchecked(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
/// - Depends only on the multiset of partition sizes: terms are summed in
///   ascending size order, so equal distributions give bit-identical scores
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let mut sizes: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    sizes.sort_unstable();

    sizes
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
