//! Maximum aggregate similarity word selection

use super::calculator::aggregate_similarity;
use crate::core::Word;
use crate::solver::selection::select_best;

/// Select the candidate most similar to all the others
///
/// Returns the best word with its aggregate score, or `None` if there are no
/// candidates. Ties go to the earliest candidate.
#[must_use]
pub fn select_best_guess<'a>(candidates: &[&'a Word]) -> Option<(&'a Word, usize)> {
    select_best(
        candidates,
        |guess| aggregate_similarity(guess, candidates),
        usize::cmp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn selects_most_typical_word() {
        let candidates = words(&["bumpy", "crane", "trace", "crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let (best, score) = select_best_guess(&refs).unwrap();

        assert_eq!(best.text(), "crate");
        assert_eq!(score, aggregate_similarity(best, &refs));
    }

    #[test]
    fn returns_none_without_candidates() {
        let refs: Vec<&Word> = vec![];
        assert!(select_best_guess(&refs).is_none());
    }
}
