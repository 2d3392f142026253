//! Wordle solving algorithms
//!
//! The shared vocabulary, the per-session candidate store, the guess
//! strategies with their opening book, and the session state machine.

pub mod entropy;
pub mod min_vocab;
mod opening;
pub mod selection;
mod session;
pub mod similarity;
pub mod strategy;
mod store;
mod vocabulary;

pub use opening::OpeningBook;
pub use session::{FailureReason, Round, Session, SessionOutcome, SessionState};
pub use store::CandidateStore;
pub use strategy::{
    EntropyStrategy, MinVocabStrategy, RandomStrategy, SimilarityStrategy, Strategy, StrategyKind,
    StrategyType,
};
pub use vocabulary::Vocabulary;
