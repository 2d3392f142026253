//! Error types for the guesser core

use thiserror::Error;

/// Rejected input at the word or feedback boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("word must have between 1 and {max} letters, got {len}")]
    InvalidLength { len: usize, max: usize },

    #[error("word `{0}` contains characters outside a-z")]
    InvalidCharacters(String),

    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },

    #[error("invalid feedback pattern `{0}`")]
    InvalidPattern(String),
}

/// Errors produced by the candidate store, strategies and sessions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed word, pattern or mismatched lengths
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A guess was requested but no candidate words remain
    #[error("no candidate words remain")]
    ExhaustedCandidates,

    /// A strategy proposed the same word on two consecutive rounds
    #[error("strategy proposed `{guess}` again on guess {guess_number}")]
    RepeatedGuess { guess: String, guess_number: usize },

    /// Bad vocabulary or opening book
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SolverError::from(InputError::LengthMismatch {
            guess: 5,
            target: 4,
        });
        assert_eq!(
            err.to_string(),
            "invalid input: guess has 5 letters but target has 4"
        );

        let err = SolverError::RepeatedGuess {
            guess: "crane".into(),
            guess_number: 3,
        };
        assert_eq!(err.to_string(), "strategy proposed `crane` again on guess 3");

        let err = SolverError::Configuration("empty vocabulary".into());
        assert_eq!(err.to_string(), "configuration error: empty vocabulary");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SolverError>();
    }
}
