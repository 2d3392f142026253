//! Maximum aggregate similarity selection
//!
//! Scores a guess by how much it resembles every remaining candidate, on the
//! theory that the most typical word is the most likely to land close.

mod calculator;
mod selector;

pub use calculator::{aggregate_similarity, word_similarity};
pub use selector::select_best_guess;
