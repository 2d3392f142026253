//! Minimum expected remaining vocabulary word selection

use super::calculator::expected_remaining_total;
use crate::core::Word;
use crate::solver::CandidateStore;
use crate::solver::selection::select_best;

/// Select the candidate minimizing the expected remaining vocabulary
///
/// Returns the best word with its summed remaining count, or `None` if the
/// store is empty. Ties go to the earliest candidate.
#[must_use]
pub fn select_best_guess<'a>(store: &CandidateStore<'a>) -> Option<(&'a Word, usize)> {
    let candidates = store.candidate_words();
    select_best(
        &candidates,
        |guess| expected_remaining_total(guess, &candidates, store),
        |a, b| b.cmp(a),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Vocabulary;

    #[test]
    fn prefers_guess_that_separates_candidates() {
        // AAAAA cannot tell BBBBB, CCCCC and DDDDD apart; ABCDE separates all
        let vocab = Vocabulary::from_texts(["aaaaa", "bbbbb", "ccccc", "ddddd", "abcde"]).unwrap();
        let store = CandidateStore::new(&vocab);

        let (best, total) = select_best_guess(&store).unwrap();

        assert_eq!(best.text(), "abcde");
        assert_eq!(total, 4);
    }

    #[test]
    fn returns_none_when_exhausted() {
        let vocab = Vocabulary::from_texts(["crane"]).unwrap();
        let mut store = CandidateStore::new(&vocab);
        let guess = Word::new("crane").unwrap();
        store
            .apply(&guess, crate::core::Pattern::perfect(5))
            .unwrap();

        assert!(select_best_guess(&store).is_none());
    }
}
