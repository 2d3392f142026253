//! Puzzle session
//!
//! Plays one puzzle against a known target: the strategy proposes, the
//! feedback engine scores, the candidate store narrows. A session is
//! single-use and owns its store and strategy.

use super::strategy::Strategy;
use super::{CandidateStore, Vocabulary};
use crate::core::{Pattern, Word};
use crate::error::{InputError, SolverError, SolverResult};
use tracing::debug;

/// Why a session stopped without finding the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// Feedback ruled out every vocabulary word (target outside the vocabulary)
    NoCandidates,
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Still guessing
    Active,
    /// The last guess was the target
    Solved,
    /// No further guess is possible
    Failed(FailureReason),
}

impl SessionState {
    /// True once the session can no longer change
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based guess number
    pub guess_number: usize,
    /// The word played
    pub guess: Word,
    /// Feedback the target gave
    pub pattern: Pattern,
    /// Candidates left after applying the feedback
    pub remaining: usize,
}

/// Result of running a session to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The hidden word
    pub target: Word,
    /// Final state (never `Active`)
    pub state: SessionState,
    /// Every round in order
    pub rounds: Vec<Round>,
}

impl SessionOutcome {
    /// Number of guesses played
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }

    /// True if the target was found
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }
}

/// State machine for one puzzle
pub struct Session<'a, S: Strategy> {
    store: CandidateStore<'a>,
    strategy: S,
    target: Word,
    state: SessionState,
    rounds: Vec<Round>,
}

impl<'a, S: Strategy> Session<'a, S> {
    /// Start a session over the whole vocabulary
    ///
    /// # Errors
    /// Returns `InvalidInput` if the target length differs from the
    /// vocabulary's, or `Configuration` if the strategy's precomputed data
    /// does not fit the vocabulary.
    pub fn new(vocabulary: &'a Vocabulary, strategy: S, target: Word) -> SolverResult<Self> {
        Self::with_store(CandidateStore::new(vocabulary), strategy, target)
    }

    /// Start a session from a prepared candidate store
    ///
    /// # Errors
    /// Same as [`Session::new`].
    pub fn with_store(store: CandidateStore<'a>, strategy: S, target: Word) -> SolverResult<Self> {
        let vocabulary = store.vocabulary();
        if target.len() != vocabulary.word_length() {
            return Err(InputError::LengthMismatch {
                guess: vocabulary.word_length(),
                target: target.len(),
            }
            .into());
        }
        strategy.validate(vocabulary)?;

        Ok(Self {
            store,
            strategy,
            target,
            state: SessionState::Active,
            rounds: Vec::new(),
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Guesses played so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }

    /// Rounds played so far
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Candidate store as of the last round
    #[must_use]
    pub const fn store(&self) -> &CandidateStore<'a> {
        &self.store
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Play one round
    ///
    /// Does nothing once the session is terminal.
    ///
    /// # Errors
    /// Returns `RepeatedGuess` if the strategy proposes its previous guess
    /// again, `InvalidInput` if it proposes a word of the wrong length, or
    /// any other error the strategy raises.
    pub fn step(&mut self) -> SolverResult<SessionState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let guess_number = self.rounds.len() + 1;
        let last_pattern = self.rounds.last().map(|round| round.pattern);

        let guess = match self.strategy.propose(&self.store, guess_number, last_pattern) {
            Ok(guess) => guess,
            Err(SolverError::ExhaustedCandidates) => {
                debug!(guess_number, target = %self.target, "no candidates left");
                self.state = SessionState::Failed(FailureReason::NoCandidates);
                return Ok(self.state);
            }
            Err(e) => return Err(e),
        };

        if self.rounds.last().is_some_and(|round| round.guess == guess) {
            return Err(SolverError::RepeatedGuess {
                guess: guess.text().to_string(),
                guess_number,
            });
        }

        let pattern = Pattern::calculate(&guess, &self.target)?;
        self.store.apply(&guess, pattern)?;
        let remaining = self.store.len();

        debug!(
            guess_number,
            guess = %guess,
            pattern = %pattern,
            remaining,
            "round played"
        );

        self.rounds.push(Round {
            guess_number,
            guess,
            pattern,
            remaining,
        });

        if pattern.is_perfect() {
            self.state = SessionState::Solved;
        }
        Ok(self.state)
    }

    /// Step until the session is terminal
    ///
    /// # Errors
    /// Propagates the first error from [`Session::step`].
    pub fn run(&mut self) -> SolverResult<SessionOutcome> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(SessionOutcome {
            target: self.target.clone(),
            state: self.state,
            rounds: self.rounds.clone(),
        })
    }
}
