//! Run configuration
//!
//! Built from the command line in `main.rs`; library callers construct it
//! directly or start from [`SolverConfig::default`].

use crate::core::MAX_WORD_LENGTH;
use crate::error::{SolverError, SolverResult};
use crate::solver::{OpeningBook, StrategyKind, StrategyType};

/// Seed used by the random strategy when none is given
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Classic Wordle word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Guesses allowed for a win in the batch evaluator
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings shared by every session of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guess selection strategy
    pub strategy: StrategyKind,
    /// Seed for the random strategy
    pub seed: u64,
    /// Letters per word
    pub word_length: usize,
    /// Guess limit counted as a win
    pub max_guesses: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            seed: DEFAULT_SEED,
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl SolverConfig {
    /// Check the numeric settings
    ///
    /// # Errors
    /// Returns `Configuration` for a word length outside `1..=MAX_WORD_LENGTH`
    /// or a zero guess limit.
    pub fn validate(&self) -> SolverResult<()> {
        if !(1..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(SolverError::Configuration(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            )));
        }
        if self.max_guesses == 0 {
            return Err(SolverError::Configuration(
                "max guesses must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Fresh strategy for one session
    #[must_use]
    pub fn build_strategy<'b>(&self, book: Option<&'b OpeningBook>) -> StrategyType<'b> {
        StrategyType::new(self.strategy, self.seed, book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.strategy, StrategyKind::Entropy);
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_lengths() {
        for word_length in [0, MAX_WORD_LENGTH + 1] {
            let config = SolverConfig {
                word_length,
                ..SolverConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(SolverError::Configuration(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_guess_limit() {
        let config = SolverConfig {
            max_guesses: 0,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn builds_configured_strategy() {
        let config = SolverConfig {
            strategy: StrategyKind::Similarity,
            ..SolverConfig::default()
        };
        assert_eq!(config.build_strategy(None).kind(), StrategyKind::Similarity);
    }
}
