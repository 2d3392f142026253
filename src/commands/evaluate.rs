//! Batch evaluation - comprehensive strategy evaluation
//!
//! Runs a fresh session against every target word and gathers statistics.

use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::SolverResult;
use crate::solver::{FailureReason, OpeningBook, Session, SessionState, Vocabulary};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result from solving a single target
#[derive(Debug, Clone)]
pub struct WordResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub state: SessionState,
    pub duration: Duration,
}

impl WordResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }
}

/// Statistics over a batch of targets
#[derive(Debug, Clone)]
pub struct EvaluationStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Sessions that ran out of candidates
    pub failed: usize,
    /// Solved within `max_guesses`
    pub wins: usize,
    pub max_guesses: usize,
    /// Guess count → number of solved targets
    pub guess_distribution: BTreeMap<usize, usize>,
    /// Average over every solved target
    pub average_guesses: f64,
    /// Average over wins only
    pub average_win_guesses: f64,
    pub total_time: Duration,
    /// Solved targets needing the most guesses, hardest first
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub first_guess_used: FxHashMap<String, usize>,
    pub results: Vec<WordResult>,
}

impl EvaluationStatistics {
    /// Aggregate per-target results
    #[must_use]
    pub fn from_results(results: Vec<WordResult>, max_guesses: usize, total_time: Duration) -> Self {
        let mut guess_distribution = BTreeMap::new();
        let mut first_guess_used: FxHashMap<String, usize> = FxHashMap::default();
        let mut failed_words = Vec::new();
        let mut solved_guesses = 0usize;
        let mut win_guesses = 0usize;
        let mut solved = 0usize;
        let mut wins = 0usize;

        for result in &results {
            if let Some(first) = result.guesses.first() {
                *first_guess_used.entry(first.clone()).or_insert(0) += 1;
            }

            match result.state {
                SessionState::Solved => {
                    let guesses = result.num_guesses();
                    solved += 1;
                    solved_guesses += guesses;
                    *guess_distribution.entry(guesses).or_insert(0) += 1;
                    if guesses <= max_guesses {
                        wins += 1;
                        win_guesses += guesses;
                    }
                }
                SessionState::Failed(FailureReason::NoCandidates) => {
                    failed_words.push(result.word.clone());
                }
                SessionState::Active => {}
            }
        }

        let average = |sum: usize, count: usize| {
            if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            }
        };

        let mut hardest_words: Vec<(String, usize)> = results
            .iter()
            .filter(|r| r.is_solved())
            .map(|r| (r.word.clone(), r.num_guesses()))
            .collect();
        hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
        hardest_words.truncate(10);

        Self {
            total_words: results.len(),
            solved,
            failed: failed_words.len(),
            wins,
            max_guesses,
            guess_distribution,
            average_guesses: average(solved_guesses, solved),
            average_win_guesses: average(win_guesses, wins),
            total_time,
            hardest_words,
            failed_words,
            first_guess_used,
            results,
        }
    }

    /// Fraction of targets won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Fraction of targets that ran out of candidates
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        self.rate(self.failed)
    }

    /// Wall-clock time per target
    #[must_use]
    pub fn time_per_word(&self) -> Duration {
        u32::try_from(self.total_words)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_time / n)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            count as f64 / self.total_words as f64
        }
    }
}

/// Run one session per target
///
/// Sessions run in parallel; results come back in target order. Targets
/// outside the vocabulary are allowed and normally end in
/// `Failed(NoCandidates)`.
///
/// # Errors
///
/// Returns the first internal error: a target of the wrong length, an opening
/// book that does not fit the vocabulary, or a repeated guess.
pub fn run_evaluation(
    config: &SolverConfig,
    vocabulary: &Vocabulary,
    targets: &[Word],
    book: Option<&OpeningBook>,
    show_progress: bool,
) -> SolverResult<EvaluationStatistics> {
    info!(
        strategy = %config.strategy,
        targets = targets.len(),
        vocabulary = vocabulary.len(),
        "starting evaluation"
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let results = targets
        .par_iter()
        .map(|target| -> SolverResult<WordResult> {
            let word_start = Instant::now();
            let mut session = Session::new(vocabulary, config.build_strategy(book), target.clone())?;
            let outcome = session.run()?;
            pb.inc(1);

            Ok(WordResult {
                word: target.text().to_string(),
                guesses: outcome
                    .rounds
                    .iter()
                    .map(|round| round.guess.text().to_string())
                    .collect(),
                state: outcome.state,
                duration: word_start.elapsed(),
            })
        })
        .collect::<SolverResult<Vec<_>>>();

    let results = match results {
        Ok(results) => results,
        Err(e) => {
            pb.abandon_with_message("Aborted");
            return Err(e);
        }
    };
    pb.finish_with_message("Complete!");

    let stats = EvaluationStatistics::from_results(results, config.max_guesses, total_start.elapsed());
    info!(
        solved = stats.solved,
        failed = stats.failed,
        wins = stats.wins,
        average = stats.average_guesses,
        "evaluation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::solver::StrategyKind;

    fn vocab() -> Vocabulary {
        Vocabulary::from_texts([
            "crane", "slate", "trace", "place", "grape", "irate", "crate", "grate",
        ])
        .unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn result(word: &str, guesses: usize, state: SessionState) -> WordResult {
        WordResult {
            word: word.to_string(),
            guesses: (0..guesses).map(|i| format!("guess{i}")).collect(),
            state,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn statistics_add_up() {
        let results = vec![
            result("a", 1, SessionState::Solved),
            result("b", 3, SessionState::Solved),
            result("c", 7, SessionState::Solved),
            result("d", 2, SessionState::Failed(FailureReason::NoCandidates)),
        ];
        let stats = EvaluationStatistics::from_results(results, 6, Duration::from_secs(4));

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.solved + stats.failed, stats.total_words);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
        assert!((stats.average_guesses - 11.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_win_guesses - 2.0).abs() < 1e-9);
        assert!((stats.win_rate() - 0.5).abs() < 1e-9);
        assert!((stats.failure_rate() - 0.25).abs() < 1e-9);
        assert_eq!(stats.time_per_word(), Duration::from_secs(1));
        assert_eq!(stats.hardest_words[0], ("c".to_string(), 7));
        assert_eq!(stats.failed_words, vec!["d".to_string()]);
        assert_eq!(stats.first_guess_used.get("guess0"), Some(&4));
    }

    #[test]
    fn empty_batch() {
        let stats = EvaluationStatistics::from_results(Vec::new(), 6, Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert_eq!(stats.time_per_word(), Duration::ZERO);
    }

    #[test]
    fn evaluates_every_target_in_order() {
        let vocab = vocab();
        for strategy in StrategyKind::ALL {
            let config = SolverConfig {
                strategy,
                ..SolverConfig::default()
            };
            let stats = run_evaluation(&config, &vocab, vocab.words(), None, false).unwrap();

            assert_eq!(stats.total_words, vocab.len());
            assert_eq!(stats.solved, vocab.len(), "{strategy} missed a target");
            assert_eq!(stats.failed, 0);
            let order: Vec<&str> = stats.results.iter().map(|r| r.word.as_str()).collect();
            let expected: Vec<&str> = vocab.words().iter().map(Word::text).collect();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn unknown_targets_count_as_failures() {
        let vocab = vocab();
        let targets = vec![word("crane"), word("zzzzz")];
        let stats = run_evaluation(&SolverConfig::default(), &vocab, &targets, None, false).unwrap();

        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failed_words, vec!["zzzzz".to_string()]);
    }

    #[test]
    fn wrong_length_target_aborts() {
        let vocab = vocab();
        let targets = vec![word("crane"), word("cat")];
        let result = run_evaluation(&SolverConfig::default(), &vocab, &targets, None, false);
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn book_and_live_play_agree() {
        let vocab = vocab();
        let config = SolverConfig::default();
        let book = OpeningBook::generate(&vocab, None, config.strategy).unwrap();

        let live = run_evaluation(&config, &vocab, vocab.words(), None, false).unwrap();
        let booked = run_evaluation(&config, &vocab, vocab.words(), Some(&book), false).unwrap();

        for (a, b) in live.results.iter().zip(&booked.results) {
            assert_eq!(a.guesses, b.guesses);
        }
    }
}
