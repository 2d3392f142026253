//! Command implementations

pub mod analyze;
pub mod book;
pub mod evaluate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use book::{BookResult, generate_book};
pub use evaluate::{EvaluationStatistics, WordResult, run_evaluation};
pub use solve::{GuessStep, SolveResult, solve_word};
