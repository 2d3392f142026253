//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar, pattern_to_emoji, percent};
use crate::commands::{AnalysisResult, BookResult, EvaluationStatistics, SolveResult};
use crate::solver::{FailureReason, SessionState, StrategyKind};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        result.target.to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.word, step.pattern),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Feedback:   {} correct, {} present",
                step.pattern.count_greens(),
                step.pattern.count_yellows()
            );
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        ratio.log2(),
                        ratio
                    );
                }
            }
        }
    }

    println!();
    let count = result.guesses.len();
    match result.state {
        SessionState::Solved if result.is_win() => println!(
            "{}",
            format!(
                "✅ Solved in {count} guess{}!",
                if count == 1 { "" } else { "es" }
            )
            .green()
            .bold()
        ),
        SessionState::Solved => println!(
            "{}",
            format!(
                "⚠️  Solved in {count} guesses (over the limit of {})",
                result.max_guesses
            )
            .yellow()
            .bold()
        ),
        SessionState::Failed(FailureReason::NoCandidates) => println!(
            "{}",
            format!("❌ No candidates left after {count} guesses (word not in vocabulary?)")
                .red()
                .bold()
        ),
        SessionState::Active => {}
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_vocabulary {
        println!("\n{}", "  (not in the vocabulary)".bright_black());
    }

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", result.partitions);
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );

    println!("\n📉 {}", "Expected remaining vocabulary".bright_cyan().bold());
    println!("   Total:       {}", result.remaining_total);
    println!("   Average:     {:.2}", result.average_remaining());

    println!("\n🔤 {}", "Letter similarity".bright_cyan().bold());
    println!("   Aggregate:   {}", result.aggregate_similarity);
}

/// Print a summary of a generated opening book
pub fn print_book_summary(result: &BookResult, strategy: StrategyKind) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", "OPENING BOOK".bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());
    eprintln!("   Strategy:     {strategy}");
    eprintln!(
        "   First guess:  {}",
        result.book.first().text().to_uppercase().bright_yellow().bold()
    );
    eprintln!("   Entries:      {}", result.book.len());
    eprintln!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
}

/// Print evaluation statistics
pub fn print_evaluation_statistics(stats: &EvaluationStatistics, strategy: StrategyKind) {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluation Results ({strategy}) ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Wins (≤ {} guesses):  {} {}",
        stats.max_guesses,
        stats.wins,
        format!("({})", percent(stats.win_rate())).green()
    );
    println!("  Solved (any length): {}", stats.solved);
    if stats.failed > 0 {
        println!(
            "  No candidates left:  {} {}",
            stats.failed,
            format!("({})", percent(stats.failure_rate())).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Average (wins only): {:.3}",
        stats.average_win_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.time_per_word().as_secs_f64() * 1000.0
    );

    // Guess distribution
    if stats.solved > 0 {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
        for (&guesses, &count) in &stats.guess_distribution {
            let percentage = count as f64 / stats.solved as f64;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            let bar = if guesses <= stats.max_guesses {
                bar.green()
            } else {
                bar.red()
            };
            println!("  {guesses:2} guesses: {bar} {count:4} ({:>6})", percent(percentage));
        }
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  ... and {} more", stats.failed_words.len() - 10);
        }
    }

    // First guess analysis
    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for &(word, &count) in first_guesses.iter().take(5) {
        let fraction = if stats.total_words == 0 {
            0.0
        } else {
            count as f64 / stats.total_words as f64
        };
        println!(
            "  {}: {} times ({})",
            word.to_uppercase(),
            count,
            percent(fraction)
        );
    }
}
