//! Word list loading utilities
//!
//! Reads vocabularies and opening books from plain text files.

use crate::core::Word;
use crate::solver::OpeningBook;
use anyhow::Context;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words of one length from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines, words
/// of other lengths and words with non-letter characters are skipped. The
/// result is sorted and deduplicated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(content.lines(), length);
    debug!(path = %path.display(), length, words = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an in-memory list to words of one length
///
/// Applies the same cleaning as [`load_from_file`].
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Slate", "crane", "cat", "crane"], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    parse_words(slice.iter().copied(), length)
}

fn parse_words<'s>(lines: impl Iterator<Item = &'s str>, length: usize) -> Vec<Word> {
    let mut words: Vec<Word> = lines
        .map(str::trim)
        .filter(|line| line.chars().count() == length)
        .filter_map(|line| Word::new(line).ok())
        .collect();
    words.sort_unstable_by(|a, b| a.text().cmp(b.text()));
    words.dedup();
    words
}

/// Read and parse an opening book file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid book.
pub fn load_opening_book<P: AsRef<Path>>(path: P) -> anyhow::Result<OpeningBook> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read opening book {}", path.display()))?;
    let book = OpeningBook::parse(&content)
        .with_context(|| format!("invalid opening book {}", path.display()))?;
    debug!(path = %path.display(), first = %book.first(), entries = book.len(), "loaded opening book");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_guesser_{}_{name}",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "irate");
        assert_eq!(words[2].text(), "slate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"], 5);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_other_lengths() {
        let words = words_from_slice(&["cat", "crane", "DOG", " cow "], 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "cow", "dog"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[], 5).is_empty());
    }

    #[test]
    fn load_from_file_cleans_lines() {
        let path = temp_file("words.txt", "Slate\n\n  crane  \nslate\ncat\n");
        let words = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordle_guesser/words.txt", 5).is_err());
    }

    #[test]
    fn load_opening_book_parses() {
        let path = temp_file("book.txt", "crane\n11313 slate\n");
        let book = load_opening_book(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(book.first().text(), "crane");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn load_opening_book_reports_bad_content() {
        let path = temp_file("bad_book.txt", "crane\nnot a valid line\n");
        let result = load_opening_book(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
