//! Letter-overlap similarity between words

use crate::core::Word;

/// Similarity of two words
///
/// The number of letters they share regardless of position (multiset
/// intersection size). If that is positive, the number of positions holding
/// the same letter is added on top.
///
/// # Examples
/// ```
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::similarity::word_similarity;
///
/// let crane = Word::new("crane").unwrap();
/// let trace = Word::new("trace").unwrap();
/// // Shares r, a, c, e (4) and has r, a, e in place (3)
/// assert_eq!(word_similarity(&crane, &trace), 7);
/// ```
#[must_use]
pub fn word_similarity(first: &Word, second: &Word) -> usize {
    let shared = first.letter_counts().shared_with(second.letter_counts());
    if shared == 0 {
        return 0;
    }

    let in_place = first
        .letters()
        .iter()
        .zip(second.letters())
        .filter(|(a, b)| a == b)
        .count();

    shared + in_place
}

/// Sum of `word_similarity(guess, t)` over every candidate `t`
#[must_use]
pub fn aggregate_similarity(guess: &Word, candidates: &[&Word]) -> usize {
    candidates
        .iter()
        .map(|candidate| word_similarity(guess, candidate))
        .sum()
}
