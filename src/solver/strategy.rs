//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::opening::OpeningBook;
use super::{CandidateStore, Vocabulary, entropy, min_vocab, similarity};
use crate::core::{Pattern, Word};
use crate::error::{SolverError, SolverResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::debug;

/// A strategy for proposing the next guess from the remaining candidates
pub trait Strategy {
    /// Propose the guess for round `guess_number` (1-based)
    ///
    /// `last_pattern` is the feedback from the previous round, if any.
    ///
    /// # Errors
    /// Returns `ExhaustedCandidates` if the store is empty.
    fn propose(
        &mut self,
        store: &CandidateStore<'_>,
        guess_number: usize,
        last_pattern: Option<Pattern>,
    ) -> SolverResult<Word>;

    /// Check the strategy is usable with `vocabulary` before a session starts
    ///
    /// # Errors
    /// Returns `Configuration` if precomputed data does not fit the vocabulary.
    fn validate(&self, _vocabulary: &Vocabulary) -> SolverResult<()> {
        Ok(())
    }
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum StrategyKind {
    /// Uniformly random remaining candidate
    Random,
    /// Maximize Shannon entropy of the pattern distribution
    #[default]
    Entropy,
    /// Minimize the expected number of remaining candidates
    MinVocab,
    /// Maximize letter similarity to the other candidates
    Similarity,
}

impl StrategyKind {
    /// Every strategy, in display order
    pub const ALL: [Self; 4] = [Self::Random, Self::Entropy, Self::MinVocab, Self::Similarity];

    /// Command-line name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Entropy => "entropy",
            Self::MinVocab => "min-vocab",
            Self::Similarity => "similarity",
        }
    }

    /// True for the scoring strategies, which can follow an opening book
    #[must_use]
    pub const fn uses_opening_book(self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug)]
pub enum StrategyType<'b> {
    /// Random selection from candidates
    Random(RandomStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy<'b>),
    /// Minimum expected remaining vocabulary
    MinVocab(MinVocabStrategy<'b>),
    /// Maximum letter similarity
    Similarity(SimilarityStrategy<'b>),
}

impl<'b> StrategyType<'b> {
    /// Create a strategy of the given kind
    ///
    /// `seed` drives the random strategy; `book` is followed by the scoring
    /// strategies and ignored by the random one.
    #[must_use]
    pub fn new(kind: StrategyKind, seed: u64, book: Option<&'b OpeningBook>) -> Self {
        match kind {
            StrategyKind::Random => Self::Random(RandomStrategy::new(seed)),
            StrategyKind::Entropy => Self::Entropy(EntropyStrategy::new(book)),
            StrategyKind::MinVocab => Self::MinVocab(MinVocabStrategy::new(book)),
            StrategyKind::Similarity => Self::Similarity(SimilarityStrategy::new(book)),
        }
    }

    /// Kind of the wrapped strategy
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::Random,
            Self::Entropy(_) => StrategyKind::Entropy,
            Self::MinVocab(_) => StrategyKind::MinVocab,
            Self::Similarity(_) => StrategyKind::Similarity,
        }
    }
}

impl Strategy for StrategyType<'_> {
    fn propose(
        &mut self,
        store: &CandidateStore<'_>,
        guess_number: usize,
        last_pattern: Option<Pattern>,
    ) -> SolverResult<Word> {
        match self {
            Self::Random(s) => s.propose(store, guess_number, last_pattern),
            Self::Entropy(s) => s.propose(store, guess_number, last_pattern),
            Self::MinVocab(s) => s.propose(store, guess_number, last_pattern),
            Self::Similarity(s) => s.propose(store, guess_number, last_pattern),
        }
    }

    fn validate(&self, vocabulary: &Vocabulary) -> SolverResult<()> {
        match self {
            Self::Random(s) => s.validate(vocabulary),
            Self::Entropy(s) => s.validate(vocabulary),
            Self::MinVocab(s) => s.validate(vocabulary),
            Self::Similarity(s) => s.validate(vocabulary),
        }
    }
}

/// Book move if the book covers this round, otherwise the live choice
///
/// The empty-store check comes first, so a book never proposes a word once
/// the candidates are gone.
fn booked_or_live<'a>(
    book: Option<&OpeningBook>,
    store: &CandidateStore<'a>,
    guess_number: usize,
    last_pattern: Option<Pattern>,
    live: impl FnOnce(&CandidateStore<'a>) -> Option<&'a Word>,
) -> SolverResult<Word> {
    if store.is_empty() {
        return Err(SolverError::ExhaustedCandidates);
    }

    if let Some(book) = book {
        if let Some(word) = book.lookup(guess_number, last_pattern) {
            return Ok(word.clone());
        }
        if guess_number <= 2 {
            debug!(
                guess_number,
                pattern = ?last_pattern.map(|p| p.to_string()),
                "opening book has no entry, selecting live"
            );
        }
    }

    live(store)
        .cloned()
        .ok_or(SolverError::ExhaustedCandidates)
}

fn validate_book(book: Option<&OpeningBook>, vocabulary: &Vocabulary) -> SolverResult<()> {
    book.map_or(Ok(()), |book| book.validate(vocabulary))
}

/// Pure entropy maximization strategy
///
/// Always selects the candidate with the highest Shannon entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy<'b> {
    book: Option<&'b OpeningBook>,
}

impl<'b> EntropyStrategy<'b> {
    /// Create the strategy, optionally following an opening book
    #[must_use]
    pub const fn new(book: Option<&'b OpeningBook>) -> Self {
        Self { book }
    }
}

impl Strategy for EntropyStrategy<'_> {
    fn propose(
        &mut self,
        store: &CandidateStore<'_>,
        guess_number: usize,
        last_pattern: Option<Pattern>,
    ) -> SolverResult<Word> {
        booked_or_live(self.book, store, guess_number, last_pattern, |store| {
            entropy::select_best_guess(&store.candidate_words()).map(|(word, _)| word)
        })
    }

    fn validate(&self, vocabulary: &Vocabulary) -> SolverResult<()> {
        validate_book(self.book, vocabulary)
    }
}

/// Minimum expected remaining vocabulary strategy
///
/// Selects the candidate that, averaged over every possible target, leaves
/// the fewest candidates behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinVocabStrategy<'b> {
    book: Option<&'b OpeningBook>,
}

impl<'b> MinVocabStrategy<'b> {
    /// Create the strategy, optionally following an opening book
    #[must_use]
    pub const fn new(book: Option<&'b OpeningBook>) -> Self {
        Self { book }
    }
}

impl Strategy for MinVocabStrategy<'_> {
    fn propose(
        &mut self,
        store: &CandidateStore<'_>,
        guess_number: usize,
        last_pattern: Option<Pattern>,
    ) -> SolverResult<Word> {
        booked_or_live(self.book, store, guess_number, last_pattern, |store| {
            min_vocab::select_best_guess(store).map(|(word, _)| word)
        })
    }

    fn validate(&self, vocabulary: &Vocabulary) -> SolverResult<()> {
        validate_book(self.book, vocabulary)
    }
}

/// Letter similarity strategy
///
/// Selects the candidate sharing the most letters with the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityStrategy<'b> {
    book: Option<&'b OpeningBook>,
}

impl<'b> SimilarityStrategy<'b> {
    /// Create the strategy, optionally following an opening book
    #[must_use]
    pub const fn new(book: Option<&'b OpeningBook>) -> Self {
        Self { book }
    }
}

impl Strategy for SimilarityStrategy<'_> {
    fn propose(
        &mut self,
        store: &CandidateStore<'_>,
        guess_number: usize,
        last_pattern: Option<Pattern>,
    ) -> SolverResult<Word> {
        booked_or_live(self.book, store, guess_number, last_pattern, |store| {
            similarity::select_best_guess(&store.candidate_words()).map(|(word, _)| word)
        })
    }

    fn validate(&self, vocabulary: &Vocabulary) -> SolverResult<()> {
        validate_book(self.book, vocabulary)
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates. Seeded, so a session
/// replays exactly for the same seed.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy with a fixed seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn propose(
        &mut self,
        store: &CandidateStore<'_>,
        _guess_number: usize,
        _last_pattern: Option<Pattern>,
    ) -> SolverResult<Word> {
        store
            .candidate_words()
            .choose(&mut self.rng)
            .map(|&word| word.clone())
            .ok_or(SolverError::ExhaustedCandidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn vocab() -> Vocabulary {
        Vocabulary::from_texts(["crane", "slate", "trace", "place", "grape", "irate"]).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn exhausted(vocab: &Vocabulary) -> CandidateStore<'_> {
        let mut store = CandidateStore::new(vocab);
        store.apply(&word("crane"), Pattern::perfect(5)).unwrap();
        store
    }

    #[test]
    fn every_strategy_proposes_a_candidate() {
        let vocab = vocab();
        let store = CandidateStore::new(&vocab);

        for kind in StrategyKind::ALL {
            let mut strategy = StrategyType::new(kind, 7, None);
            assert_eq!(strategy.kind(), kind);
            let guess = strategy.propose(&store, 1, None).unwrap();
            assert!(store.contains(&guess), "{kind} proposed {guess}");
        }
    }

    #[test]
    fn every_strategy_reports_exhaustion() {
        let vocab = vocab();
        let store = exhausted(&vocab);

        for kind in StrategyKind::ALL {
            let mut strategy = StrategyType::new(kind, 7, None);
            assert!(matches!(
                strategy.propose(&store, 2, Some(Pattern::perfect(5))),
                Err(SolverError::ExhaustedCandidates)
            ));
        }
    }

    #[test]
    fn scoring_strategies_are_deterministic() {
        let vocab = vocab();
        let store = CandidateStore::new(&vocab);

        for kind in [StrategyKind::Entropy, StrategyKind::MinVocab, StrategyKind::Similarity] {
            let first = StrategyType::new(kind, 0, None).propose(&store, 1, None).unwrap();
            for _ in 0..5 {
                let again = StrategyType::new(kind, 0, None).propose(&store, 1, None).unwrap();
                assert_eq!(first, again);
            }
        }
    }

    #[test]
    fn random_strategy_replays_for_same_seed() {
        let vocab = vocab();
        let store = CandidateStore::new(&vocab);

        let picks = |seed| {
            let mut strategy = RandomStrategy::new(seed);
            (1..=10)
                .map(|n| strategy.propose(&store, n, None).unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn book_moves_take_precedence() {
        let vocab = vocab();
        let store = CandidateStore::new(&vocab);
        let target = word("trace");
        let pattern = Pattern::calculate(&word("place"), &target).unwrap();

        let mut seconds = FxHashMap::default();
        seconds.insert(pattern, word("irate"));
        let book = OpeningBook::new(word("place"), seconds);

        let mut strategy = StrategyType::new(StrategyKind::Similarity, 0, Some(&book));
        assert_eq!(strategy.propose(&store, 1, None).unwrap().text(), "place");
        assert_eq!(
            strategy.propose(&store, 2, Some(pattern)).unwrap().text(),
            "irate"
        );
    }

    #[test]
    fn book_miss_falls_back_to_live_selection() {
        let vocab = vocab();
        let store = CandidateStore::new(&vocab);
        let book = OpeningBook::new(word("place"), FxHashMap::default());

        let live = StrategyType::new(StrategyKind::Entropy, 0, None)
            .propose(&store, 2, Some("11111".parse().unwrap()))
            .unwrap();
        let booked = StrategyType::new(StrategyKind::Entropy, 0, Some(&book))
            .propose(&store, 2, Some("11111".parse().unwrap()))
            .unwrap();

        assert_eq!(live, booked);
    }

    #[test]
    fn validate_checks_the_book() {
        let vocab = vocab();
        let book = OpeningBook::new(word("place"), FxHashMap::default());

        let strategy = StrategyType::new(StrategyKind::MinVocab, 0, Some(&book));
        assert!(matches!(
            strategy.validate(&vocab),
            Err(SolverError::Configuration(_))
        ));

        // The random strategy ignores books
        let strategy = StrategyType::new(StrategyKind::Random, 0, Some(&book));
        assert!(strategy.validate(&vocab).is_ok());
    }

    #[test]
    fn kind_names() {
        let names: Vec<&str> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["random", "entropy", "min-vocab", "similarity"]);
        assert_eq!(StrategyKind::default(), StrategyKind::Entropy);
        assert!(!StrategyKind::Random.uses_opening_book());
    }
}
