//! Entropy-maximizing guess selection
//!
//! Scores a guess by the Shannon entropy of the feedback-pattern
//! distribution it induces over the remaining candidates.

mod calculator;
mod selector;

pub use calculator::{calculate_entropy, partition_sizes, shannon_entropy};
pub use selector::select_best_guess;
