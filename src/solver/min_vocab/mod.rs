//! Minimum expected remaining vocabulary selection
//!
//! Scores a guess by how many candidates would survive, summed over every
//! candidate as the hypothetical target. Lower is better.

mod calculator;
mod selector;

pub use calculator::expected_remaining_total;
pub use selector::select_best_guess;
