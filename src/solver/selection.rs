//! Deterministic parallel selection over a guess pool
//!
//! Every scoring strategy picks the best-scoring word from the remaining
//! candidates. Scoring runs in parallel; ties go to the word that comes
//! first in candidate order, so the result does not depend on scheduling.

use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select the best-scoring word from `pool`
///
/// `compare` orders two scores; the greater one wins. Returns the winning
/// word with its score, or `None` if the pool is empty.
pub fn select_best<'a, T, F, C>(pool: &[&'a Word], score: F, compare: C) -> Option<(&'a Word, T)>
where
    T: Send,
    F: Fn(&Word) -> T + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    pool.par_iter()
        .enumerate()
        .map(|(index, &word)| (index, word, score(word)))
        .reduce_with(|left, right| match compare(&left.2, &right.2) {
            Ordering::Greater => left,
            Ordering::Less => right,
            Ordering::Equal if left.0 <= right.0 => left,
            Ordering::Equal => right,
        })
        .map(|(_, word, score)| (word, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn picks_highest_score() {
        let pool = words(&["aaaaa", "abcde", "aabbc"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let (best, distinct) = select_best(
            &refs,
            |w| w.letter_counts().iter().count(),
            usize::cmp,
        )
        .unwrap();

        assert_eq!(best.text(), "abcde");
        assert_eq!(distinct, 5);
    }

    #[test]
    fn ties_go_to_earliest() {
        let pool = words(&["ccccc", "bbbbb", "aaaaa", "ddddd"]);
        let refs: Vec<&Word> = pool.iter().collect();

        for _ in 0..20 {
            let (best, _) = select_best(&refs, |_| 1.0f64, f64::total_cmp).unwrap();
            assert_eq!(best.text(), "ccccc");
        }
    }

    #[test]
    fn reversed_comparison_selects_minimum() {
        let pool = words(&["abcde", "aaaaa", "aabbc"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let (best, _) = select_best(
            &refs,
            |w| w.letter_counts().iter().count(),
            |a, b| b.cmp(a),
        )
        .unwrap();

        assert_eq!(best.text(), "aaaaa");
    }

    #[test]
    fn empty_pool_returns_none() {
        let refs: Vec<&Word> = Vec::new();
        assert!(select_best(&refs, |_| 0usize, usize::cmp).is_none());
    }
}
