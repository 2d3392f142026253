//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray)
//! - 1 = Present, wrong position (yellow)
//! - 2 = Correct (green)
//!
//! Position `i` contributes digit × 3^i to the code. The pattern length is
//! stored alongside the code so words of any supported length share one type.

use super::{LetterCounts, MAX_WORD_LENGTH, Word};
use crate::error::{InputError, SolverError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur (or all its occurrences are already claimed)
    Absent,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter is in the right position
    Correct,
}

impl Feedback {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Serialization symbol (`1` absent, `2` present, `3` correct)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '1',
            Self::Present => '2',
            Self::Correct => '3',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts `1`/`-`/`_`/`b`/⬜ for absent, `2`/`y`/🟨 for present and
    /// `3`/`g`/🟩 for correct (letters case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            '1' | '-' | '_' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            '2' | 'y' | '🟨' => Some(Self::Present),
            '3' | 'g' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    len: u8,
    code: u32,
}

impl Pattern {
    /// All-correct pattern for words of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds `MAX_WORD_LENGTH`
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_feedback(&vec![Feedback::Correct; len])
    }

    /// Build a pattern from per-position feedback
    ///
    /// # Panics
    /// Panics in debug mode if more than `MAX_WORD_LENGTH` entries are given
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        debug_assert!(feedback.len() <= MAX_WORD_LENGTH);
        let mut code = 0u32;
        let mut multiplier = 1u32;
        for fb in feedback {
            code += fb.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self {
            len: feedback.len() as u8,
            code,
        }
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True for the zero-length pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this is a perfect match (all correct)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.len > 0 && self.iter().all(|fb| fb == Feedback::Correct)
    }

    /// Feedback at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn get(self, position: usize) -> Feedback {
        assert!(position < self.len(), "position {position} out of range");
        Feedback::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// Iterate feedback from the first position to the last
    pub fn iter(self) -> impl Iterator<Item = Feedback> {
        let mut code = self.code;
        (0..self.len()).map(move |_| {
            let fb = Feedback::from_digit(code % 3);
            code /= 3;
            fb
        })
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements Wordle's duplicate-letter rule: a non-correct position is
    /// `Present` only while the occurrences of its letter claimed so far
    /// (up to and including this position) plus the later positions that
    /// will be `Correct` for the same letter do not exceed the letter's count
    /// in the target.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the words have different lengths.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target).unwrap();
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent)
    /// assert_eq!(pattern.to_string(), "21221");
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, SolverError> {
        if guess.len() != target.len() {
            return Err(InputError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            }
            .into());
        }
        Ok(Self::calculate_unchecked(guess, target))
    }

    /// Pattern calculation for words already known to share a length
    pub(crate) fn calculate_unchecked(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len());
        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut result = [Feedback::Absent; MAX_WORD_LENGTH];

        // First pass: exact positions
        let mut correct_ahead = LetterCounts::default();
        for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
            if g == t {
                result[i] = Feedback::Correct;
                correct_ahead.increment(g);
            }
        }

        // Second pass: present elsewhere, limited by the target's count
        let mut claimed = LetterCounts::default();
        for (i, &letter) in guess_letters.iter().enumerate() {
            claimed.increment(letter);
            if result[i] == Feedback::Correct {
                correct_ahead.decrement(letter);
                continue;
            }
            let available = target.count_of(letter);
            if available > 0 && claimed.get(letter) + correct_ahead.get(letter) <= available {
                result[i] = Feedback::Present;
            }
        }

        Self::from_feedback(&result[..guess_letters.len()])
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.iter().filter(|&fb| fb == Feedback::Correct).count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.iter().filter(|&fb| fb == Feedback::Present).count()
    }

    /// Convert pattern to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.iter() {
            write!(f, "{}", fb.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let feedback: Option<Vec<Feedback>> = s.trim().chars().map(Feedback::from_symbol).collect();
        match feedback {
            Some(fb) if !fb.is_empty() && fb.len() <= MAX_WORD_LENGTH => Ok(Self::from_feedback(&fb)),
            _ => Err(InputError::InvalidPattern(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, target: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        Pattern::calculate(&guess, &target).unwrap().to_string()
    }

    #[test]
    fn pattern_perfect() {
        let perfect = Pattern::perfect(5);
        assert!(perfect.is_perfect());
        assert_eq!(perfect.value(), 242);
        assert_eq!(perfect.count_greens(), 5);
        assert_eq!(perfect.to_string(), "33333");
    }

    #[test]
    fn pattern_all_gray() {
        assert_eq!(pattern("abcde", "fghij"), "11111");
        let p: Pattern = "11111".parse().unwrap();
        assert_eq!(p.value(), 0);
        assert!(!p.is_perfect());
    }

    #[test]
    fn pattern_all_green() {
        for word in ["crane", "slate", "zzzzz", "aaaaa", "cat"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::calculate(&w, &w).unwrap().is_perfect());
        }
    }

    #[test]
    fn pattern_duplicate_letters_speed_erase() {
        // ERASE has two E's, so both E's in SPEED are present
        assert_eq!(pattern("speed", "erase"), "21221");
    }

    #[test]
    fn pattern_duplicate_letters_later_green_claims_first() {
        // ROBOT vs FLOOR: second O is green, first O present, R present
        assert_eq!(pattern("robot", "floor"), "22132");
    }

    #[test]
    fn pattern_extra_duplicate_is_absent() {
        // THEME has two E's; the final E is green, so only one more E is present
        assert_eq!(pattern("eerie", "theme"), "21113");
    }

    #[test]
    fn pattern_leftmost_duplicate_wins() {
        // One L in the target: only the first L of the guess is present
        assert_eq!(pattern("llama", "world"), "21111");
        // Both extra E's of GEESE are absent once the final E is green
        assert_eq!(pattern("geese", "those"), "11133");
    }

    #[test]
    fn pattern_length_mismatch_rejected() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("cat").unwrap();
        assert!(matches!(
            Pattern::calculate(&guess, &target),
            Err(SolverError::InvalidInput(InputError::LengthMismatch {
                guess: 5,
                target: 3
            }))
        ));
    }

    #[test]
    fn pattern_from_str_accepts_symbol_sets() {
        let digits: Pattern = "32311".parse().unwrap();
        let letters: Pattern = "GYG--".parse().unwrap();
        let emoji: Pattern = "🟩🟨🟩⬜⬜".parse().unwrap();
        assert_eq!(digits, letters);
        assert_eq!(digits, emoji);
        // G=2, Y=1, G=2: 2 + 1×3 + 2×9 = 23
        assert_eq!(digits.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!("".parse::<Pattern>().is_err());
        assert!("GXGGY".parse::<Pattern>().is_err());
        assert!("0".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_display_round_trips() {
        let p: Pattern = "21221".parse().unwrap();
        assert_eq!(p.to_string(), "21221");
        assert_eq!(p.to_emoji(), "🟨⬜🟨🟨⬜");
        assert_eq!(p.count_yellows(), 3);
        assert_eq!(p.get(1), Feedback::Absent);
    }

    #[test]
    fn pattern_length_distinguishes_codes() {
        let short: Pattern = "111".parse().unwrap();
        let long: Pattern = "11111".parse().unwrap();
        assert_eq!(short.value(), long.value());
        assert_ne!(short, long);
    }
}
