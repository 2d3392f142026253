//! Per-letter occurrence counts
//!
//! Used both as the cached letter table of a word and as the minimum-count
//! constraint accumulated by a candidate store.

/// Number of letters in the supported alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// Occurrence count for every letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Count the letters of a lowercase ASCII byte string
    ///
    /// Bytes outside `a..=z` are ignored; `Word` never contains any.
    #[must_use]
    pub fn of(letters: &[u8]) -> Self {
        let mut counts = Self::default();
        for &letter in letters {
            if let Some(slot) = Self::slot(letter) {
                counts.0[slot] += 1;
            }
        }
        counts
    }

    #[inline]
    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }

    /// Count for a letter (0 for letters outside the alphabet)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u8 {
        Self::slot(letter).map_or(0, |slot| self.0[slot])
    }

    /// Raise the count for `letter` to at least `count`
    #[inline]
    pub fn raise(&mut self, letter: u8, count: u8) {
        if let Some(slot) = Self::slot(letter) {
            self.0[slot] = self.0[slot].max(count);
        }
    }

    /// Increment the count for `letter`
    #[inline]
    pub fn increment(&mut self, letter: u8) {
        if let Some(slot) = Self::slot(letter) {
            self.0[slot] += 1;
        }
    }

    /// Decrement the count for `letter`, saturating at zero
    #[inline]
    pub fn decrement(&mut self, letter: u8) {
        if let Some(slot) = Self::slot(letter) {
            self.0[slot] = self.0[slot].saturating_sub(1);
        }
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// Size of the multiset intersection with `other`
    ///
    /// Σ min(self[l], other[l]) over all letters.
    #[must_use]
    pub fn shared_with(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| usize::from(a.min(b)))
            .sum()
    }

    /// Letters with a non-zero count, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(slot, &count)| (b'a' + slot as u8, count))
    }
}
