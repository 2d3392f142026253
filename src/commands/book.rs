//! Opening book generation command

use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::SolverResult;
use crate::solver::{OpeningBook, Vocabulary};
use std::time::{Duration, Instant};

/// A generated book with timing
#[derive(Debug, Clone)]
pub struct BookResult {
    pub book: OpeningBook,
    pub duration: Duration,
}

/// Generate an opening book for the configured strategy
///
/// # Errors
///
/// Returns an error if `first` is not a valid word of the vocabulary's
/// length, or the configured strategy cannot use a book.
pub fn generate_book(
    config: &SolverConfig,
    vocabulary: &Vocabulary,
    first: Option<&str>,
) -> SolverResult<BookResult> {
    let first = first.map(Word::new).transpose()?;
    let start = Instant::now();
    let book = OpeningBook::generate(vocabulary, first, config.strategy)?;

    Ok(BookResult {
        book,
        duration: start.elapsed(),
    })
}
