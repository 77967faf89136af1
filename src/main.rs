//! Wordle Elimination Ranker - CLI
//!
//! Scores every allowed guess by the median number of answers it eliminates
//! and prints the strongest candidates.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use wordle_elimination::{
    commands::{DEFAULT_VERIFY_LIMIT, RankConfig, analyze_guess, rank_guesses, verify_strategies},
    core::{Constraint, parse_absent_letters, parse_letter_positions},
    output::{
        print_analysis_result, print_constraints, print_rank_report, print_verify_result,
        ranking_to_json,
    },
    solver::{DEFAULT_TOP, SchedulerConfig, ScorerKind},
    wordlists::{Corpus, DEFAULT_ANSWERS_PATH, DEFAULT_GUESSES_PATH},
};

#[derive(Parser)]
#[command(
    name = "wordle_elimination",
    about = "Rank Wordle guesses by the median number of answers they eliminate",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: JSON array of words, or one word per line
    #[arg(long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    answers: String,

    /// Extra allowed guesses: JSON array of words, or one word per line
    #[arg(long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    guesses: String,

    /// Letters to exclude, e.g. --without-letters abc
    #[arg(long, global = true, default_value = "")]
    without_letters: String,

    /// Letters that must be at a 0-based position, e.g. --with-letters-at-position a=1,b=2
    #[arg(long, global = true, default_value = "")]
    with_letters_at_position: String,

    /// Letters that must appear away from a 0-based position, e.g. --with-letters-not-at-position a=1,b=2
    #[arg(long, global = true, default_value = "")]
    with_letters_not_at_position: String,

    /// Scoring strategy: indexed (default) or brute
    #[arg(short, long, global = true, default_value = "indexed")]
    scorer: ScorerKind,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every guess and print the best (default)
    Rank {
        /// Number of candidates to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
        top: usize,

        /// Worker threads (default: one per CPU)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Show the elimination spread of a single guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Cross-check the indexed and brute-force scorers
    Verify {
        /// Number of dictionary words to check
        #[arg(short, long, default_value_t = DEFAULT_VERIFY_LIMIT)]
        limit: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Turn the constraint flags into constraints, rejecting bad tokens
fn parse_constraints(cli: &Cli) -> Result<Vec<Constraint>> {
    let mut constraints = parse_absent_letters(&cli.without_letters)
        .context("invalid --without-letters")?;
    constraints.extend(
        parse_letter_positions(&cli.with_letters_at_position, Constraint::exact_at)
            .context("invalid --with-letters-at-position")?,
    );
    constraints.extend(
        parse_letter_positions(&cli.with_letters_not_at_position, Constraint::present_not_at)
            .context("invalid --with-letters-not-at-position")?,
    );
    Ok(constraints)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let constraints = parse_constraints(&cli)?;
    if !matches!(cli.command, Some(Commands::Rank { json: true, .. })) {
        print_constraints(&constraints);
    }

    let corpus = Corpus::load(&cli.answers, &cli.guesses, &constraints)
        .context("failed to load word lists")?;
    info!(
        "Corpus: {} answers, {} guesses",
        corpus.answers.len(),
        corpus.dictionary.len()
    );

    let command = cli.command.unwrap_or(Commands::Rank {
        top: DEFAULT_TOP,
        workers: None,
        json: false,
        no_progress: false,
    });

    match command {
        Commands::Rank {
            top,
            workers,
            json,
            no_progress,
        } => {
            let config = RankConfig {
                top,
                scorer: cli.scorer,
                scheduler: SchedulerConfig {
                    workers,
                    progress: !no_progress && !json,
                },
            };
            run_rank_command(&corpus, &config, json)
        }
        Commands::Analyze { word } => {
            let result = analyze_guess(&word, &corpus, cli.scorer)
                .with_context(|| format!("cannot analyze '{word}'"))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Verify { limit } => {
            let result = verify_strategies(&corpus, limit);
            print_verify_result(&result);
            if !result.is_consistent() {
                bail!(
                    "scorers disagree on {} of {} pairs",
                    result.mismatches.len(),
                    result.pairs
                );
            }
            Ok(())
        }
    }
}

fn run_rank_command(corpus: &Corpus, config: &RankConfig, json: bool) -> Result<()> {
    let report = rank_guesses(corpus, config).context("scoring run failed")?;

    if json {
        println!("{}", ranking_to_json(&report.ranked)?);
    } else {
        print_rank_report(&report);
    }
    Ok(())
}
