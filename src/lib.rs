//! Wordle Guesser
//!
//! Solves Wordle-style puzzles of any fixed word length by narrowing a
//! candidate vocabulary with letter-color feedback. Four strategies choose
//! the guesses: random, entropy maximization, minimum expected remaining
//! vocabulary and maximum letter similarity. The scoring strategies can
//! follow a precomputed opening book.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::{Pattern, Word};
//! use wordle_guesser::solver::{Session, StrategyKind, StrategyType, Vocabulary};
//!
//! // Feedback for one guess
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//! let pattern = Pattern::calculate(&guess, &answer).unwrap();
//! assert_eq!(pattern.to_string(), "21221");
//!
//! // A whole puzzle
//! let vocabulary = Vocabulary::from_texts(["crane", "slate", "trace"]).unwrap();
//! let strategy = StrategyType::new(StrategyKind::Entropy, 0, None);
//! let mut session = Session::new(&vocabulary, strategy, Word::new("slate").unwrap()).unwrap();
//! let outcome = session.run().unwrap();
//! assert!(outcome.is_solved());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Run configuration
pub mod config;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
