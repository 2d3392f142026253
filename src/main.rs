//! Wordle Guesser - CLI
//!
//! Solves, analyzes and batch-evaluates Wordle puzzles with the random,
//! entropy, min-vocab and similarity strategies.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_guesser::{
    commands::{analyze_word, generate_book, run_evaluation, solve_word},
    config::{DEFAULT_MAX_GUESSES, DEFAULT_SEED, DEFAULT_WORD_LENGTH, SolverConfig},
    output::{
        print_analysis_result, print_book_summary, print_evaluation_statistics, print_solve_result,
    },
    solver::{OpeningBook, StrategyKind, Vocabulary},
    wordlists::{load_from_file, load_opening_book},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Wordle guesser comparing entropy, expected-vocabulary, similarity and random strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Vocabulary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    vocab: PathBuf,

    /// Word length; words of other lengths in the vocabulary file are skipped
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guess selection strategy
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyKind::Entropy)]
    strategy: StrategyKind,

    /// Opening book file for the scoring strategies
    #[arg(short, long, global = true)]
    book: Option<PathBuf>,

    /// Seed for the random strategy
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Guesses allowed for a win
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy for every guess
        #[arg(short, long)]
        details: bool,
    },

    /// Evaluate the strategy against every vocabulary word (or a target list)
    Evaluate {
        /// Target words file (default: the vocabulary)
        #[arg(short, long)]
        targets: Option<PathBuf>,

        /// Limit number of words to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Score a word against the full vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Precompute an opening book for the strategy
    Book {
        /// Fixed first guess (default: chosen by the strategy)
        #[arg(short, long)]
        first: Option<String>,

        /// Write the book here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SolverConfig {
        strategy: cli.strategy,
        seed: cli.seed,
        word_length: cli.length,
        max_guesses: cli.max_guesses,
    };
    config.validate()?;

    let vocabulary = load_vocabulary(&cli.vocab, config.word_length)?;
    let book = load_book(cli.book.as_deref(), &config)?;

    match cli.command {
        Commands::Solve { word, details } => {
            let result = solve_word(&config, &vocabulary, book.as_ref(), &word)?;
            print_solve_result(&result, details);
        }
        Commands::Evaluate {
            targets,
            limit,
            no_progress,
        } => run_evaluate_command(
            &config,
            &vocabulary,
            book.as_ref(),
            targets.as_deref(),
            limit,
            !no_progress,
        )?,
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &vocabulary)?;
            print_analysis_result(&result);
        }
        Commands::Book { first, output } => {
            run_book_command(&config, &vocabulary, first.as_deref(), output.as_deref())?;
        }
    }

    Ok(())
}

fn load_vocabulary(path: &Path, length: usize) -> Result<Vocabulary> {
    let words = load_from_file(path, length)
        .with_context(|| format!("failed to read vocabulary {}", path.display()))?;
    if words.is_empty() {
        bail!(
            "vocabulary {} has no valid {length}-letter words",
            path.display()
        );
    }
    let vocabulary = Vocabulary::new(words)?;
    info!(words = vocabulary.len(), length, "vocabulary loaded");
    Ok(vocabulary)
}

fn load_book(path: Option<&Path>, config: &SolverConfig) -> Result<Option<OpeningBook>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !config.strategy.uses_opening_book() {
        warn!(strategy = %config.strategy, "strategy ignores the opening book");
        return Ok(None);
    }
    load_opening_book(path).map(Some)
}

fn run_evaluate_command(
    config: &SolverConfig,
    vocabulary: &Vocabulary,
    book: Option<&OpeningBook>,
    targets: Option<&Path>,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<()> {
    let mut targets = match targets {
        Some(path) => load_from_file(path, config.word_length)
            .with_context(|| format!("failed to read targets {}", path.display()))?,
        None => vocabulary.words().to_vec(),
    };
    if let Some(limit) = limit {
        targets.truncate(limit);
    }

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Guesser Evaluation ");
    println!("{}", "═".repeat(70));
    println!("\nTesting {} targets against {} words", targets.len(), vocabulary.len());
    println!("Strategy: {}", config.strategy);
    if let Some(book) = book {
        println!("Opening book: {} ({} entries)", book.first(), book.len());
    }
    println!();

    let stats = run_evaluation(config, vocabulary, &targets, book, show_progress)?;
    print_evaluation_statistics(&stats, config.strategy);
    Ok(())
}

fn run_book_command(
    config: &SolverConfig,
    vocabulary: &Vocabulary,
    first: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let result = generate_book(config, vocabulary, first)?;
    print_book_summary(&result, config.strategy);

    match output {
        Some(path) => fs::write(path, result.book.to_string())
            .with_context(|| format!("failed to write opening book {}", path.display()))?,
        None => print!("{}", result.book),
    }
    Ok(())
}
