//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Guess letters on colored tiles, one per feedback position
#[must_use]
pub fn colored_guess(word: &str, pattern: Pattern) -> String {
    word.chars()
        .zip(pattern.iter())
        .map(|(letter, feedback)| tile(letter, feedback).to_string())
        .collect()
}

fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Format a fraction as a percentage
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_gray() {
        let pattern: Pattern = "11111".parse().unwrap();
        assert_eq!(pattern_to_emoji(pattern), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::perfect(5)), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let pattern: Pattern = "321".parse().unwrap();
        assert_eq!(colored_guess("cat", pattern), " C  A  T ");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_candidates() {
        assert_eq!(entropy_bar(2.0, 4, 4), "████");
    }

    #[test]
    fn percent_formats() {
        assert_eq!(percent(0.5), "50.0%");
    }
}
