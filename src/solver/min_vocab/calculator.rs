//! Expected remaining vocabulary calculation

use crate::core::Word;
use crate::solver::CandidateStore;
use crate::solver::entropy::partition_sizes;

/// Total surviving candidates for `guess`, summed over all targets
///
/// For every target T in `candidates`, counts the candidates the store would
/// keep after applying `guess` with the pattern T produces. The sum (not the
/// average) is returned; the candidate count is fixed within a round, so both
/// rank guesses identically.
///
/// Targets sharing a pattern leave the same survivors, so the store is
/// consulted once per distinct pattern and weighted by partition size.
#[must_use]
pub fn expected_remaining_total(
    guess: &Word,
    candidates: &[&Word],
    store: &CandidateStore<'_>,
) -> usize {
    partition_sizes(guess, candidates)
        .into_iter()
        .map(|(pattern, targets)| targets * store.remaining_after(guess, pattern))
        .sum()
}
