//! Pure entropy-based word selection

use super::calculator::calculate_entropy;
use crate::core::Word;
use crate::solver::selection::select_best;

/// Select the candidate with maximum entropy
///
/// Every candidate is both a possible guess and a possible target. Returns
/// the best word and its entropy, or `None` if there are no candidates.
/// Ties go to the earliest candidate.
///
/// # Examples
/// ```
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::entropy::select_best_guess;
///
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grate").unwrap(),
/// ];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&refs).unwrap();
/// assert_eq!(best.text(), "crate"); // ties with GRATE, comes first
/// assert!(entropy > 1.5); // splits all three apart
/// ```
#[must_use]
pub fn select_best_guess<'a>(candidates: &[&'a Word]) -> Option<(&'a Word, f64)> {
    select_best(
        candidates,
        |guess| calculate_entropy(guess, candidates),
        f64::total_cmp,
    )
}
