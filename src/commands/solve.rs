//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::error::SolverResult;
use crate::solver::entropy::calculate_entropy;
use crate::solver::{OpeningBook, Session, SessionState, StrategyKind, Vocabulary};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub strategy: StrategyKind,
    pub state: SessionState,
    pub max_guesses: usize,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    /// True if the target was found
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    /// True if the target was found within the guess limit
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.is_solved() && self.guesses.len() <= self.max_guesses
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was played against
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word with the configured strategy
///
/// Plays the session to the end; the guess limit only affects whether the
/// result counts as a win.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or has the wrong length
/// - The opening book does not fit the vocabulary
/// - The strategy repeats a guess
pub fn solve_word(
    config: &SolverConfig,
    vocabulary: &Vocabulary,
    book: Option<&OpeningBook>,
    target: &str,
) -> SolverResult<SolveResult> {
    let target_word = Word::new(target)?;
    let mut session = Session::new(vocabulary, config.build_strategy(book), target_word)?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !session.state().is_terminal() {
        let candidates = session.store().candidate_words();
        session.step()?;

        let Some(round) = session.rounds().get(guesses.len()) else {
            // Ran out of candidates without playing
            break;
        };

        let (entropy, expected_remaining) = if candidates.len() > 1 {
            let ent = calculate_entropy(&round.guess, &candidates);
            (Some(ent), Some(candidates.len() as f64 / ent.exp2()))
        } else {
            (None, None)
        };

        guesses.push(GuessStep {
            word: round.guess.text().to_string(),
            pattern: round.pattern,
            candidates_before: candidates.len(),
            candidates_after: round.remaining,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        target: session.target().text().to_string(),
        strategy: config.strategy,
        state: session.state(),
        max_guesses: config.max_guesses,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::solver::FailureReason;

    fn vocab() -> Vocabulary {
        Vocabulary::from_texts([
            "crane", "slate", "trace", "place", "grape", "irate", "crate", "grate",
        ])
        .unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let vocab = vocab();
        let result = solve_word(&SolverConfig::default(), &vocab, None, "grate").unwrap();

        assert!(result.is_solved());
        assert_eq!(result.guesses.last().map(|s| s.word.as_str()), Some("grate"));
        assert!(result.guesses.last().is_some_and(|s| s.pattern.is_perfect()));
    }

    #[test]
    fn solve_records_history() {
        let vocab = vocab();
        for strategy in StrategyKind::ALL {
            let config = SolverConfig {
                strategy,
                ..SolverConfig::default()
            };
            let result = solve_word(&config, &vocab, None, "place").unwrap();

            assert!(!result.guesses.is_empty());
            assert_eq!(result.guesses[0].candidates_before, vocab.len());
            for pair in result.guesses.windows(2) {
                assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
            }
            for step in &result.guesses {
                assert!(step.candidates_after < step.candidates_before);
            }
        }
    }

    #[test]
    fn solve_unknown_target_fails_cleanly() {
        let vocab = vocab();
        let result = solve_word(&SolverConfig::default(), &vocab, None, "zzzzz").unwrap();

        assert_eq!(result.state, SessionState::Failed(FailureReason::NoCandidates));
        assert!(!result.is_win());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let vocab = vocab();
        let result = solve_word(&SolverConfig::default(), &vocab, None, "cr4ne");
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));

        let result = solve_word(&SolverConfig::default(), &vocab, None, "cat");
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn win_respects_guess_limit() {
        let vocab = vocab();
        let config = SolverConfig {
            max_guesses: 1,
            ..SolverConfig::default()
        };
        let first = solve_word(&config, &vocab, None, "crane").unwrap();
        let first_guess = first.guesses[0].word.clone();

        let result = solve_word(&config, &vocab, None, &first_guess).unwrap();
        assert!(result.is_win());

        let other = vocab
            .words()
            .iter()
            .find(|w| w.text() != first_guess)
            .unwrap();
        let result = solve_word(&config, &vocab, None, other.text()).unwrap();
        assert!(result.is_solved());
        assert!(!result.is_win());
    }
}
