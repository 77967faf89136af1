//! Parallel scoring of a guess dictionary
//!
//! The dictionary is split into one contiguous chunk per worker. Each worker
//! scores its chunk sequentially and sends results into a channel sized to
//! hold every result, so producers never block. The scope join is the barrier:
//! the channel is drained only after every worker has finished.

use super::aggregate::median_elimination;
use super::error::SolverError;
use super::strategy::EliminationScorer;
use crate::core::Word;
use crossbeam_channel::Sender;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

/// Median elimination score for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub word: Word,
    pub score: usize,
}

/// Scheduler settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerConfig {
    /// Worker count; `None` uses the hardware parallelism
    pub workers: Option<usize>,
    /// Show a progress bar on stderr
    pub progress: bool,
}

impl SchedulerConfig {
    #[must_use]
    pub const fn with_workers(workers: usize) -> Self {
        Self {
            workers: Some(workers),
            progress: false,
        }
    }
}

type ResultSender = Sender<Result<ScoreResult, SolverError>>;

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} Scoring candidates [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | ETA {eta}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Score every guess in `dictionary` against `answers` in parallel
///
/// Results arrive in no particular order; rank them afterwards. The first
/// error from any worker fails the whole run.
///
/// # Errors
/// - `SolverError::EmptyAnswerSet` if `answers` is empty
/// - `SolverError::NoTargets` if a guess is the only answer
/// - `SolverError::ThreadPool` if the worker pool cannot be started
///
/// # Examples
/// ```
/// use wordle_elimination::core::{Word, WordSet};
/// use wordle_elimination::solver::{IndexedScorer, SchedulerConfig, run};
///
/// let answers: WordSet = ["arise", "crane", "crate", "slate", "stare"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let scorer = IndexedScorer::new(&answers);
///
/// let results = run(&answers, &answers, &scorer, &SchedulerConfig::with_workers(2)).unwrap();
/// assert_eq!(results.len(), 5);
/// ```
pub fn run<S>(
    dictionary: &[Word],
    answers: &[Word],
    scorer: &S,
    config: &SchedulerConfig,
) -> Result<Vec<ScoreResult>, SolverError>
where
    S: EliminationScorer + Sync + ?Sized,
{
    if answers.is_empty() {
        return Err(SolverError::EmptyAnswerSet);
    }
    if dictionary.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.unwrap_or(0))
        .thread_name(|i| format!("scorer-{i}"))
        .build()?;
    let workers = pool.current_num_threads();
    let chunk_size = dictionary.len().div_ceil(workers);

    info!(
        "Scoring {} guesses against {} answers on {workers} workers ({chunk_size} guesses per chunk)",
        dictionary.len(),
        answers.len()
    );

    let start = Instant::now();
    let progress = progress_bar(dictionary.len(), config.progress);
    let (sender, receiver) = crossbeam_channel::bounded(dictionary.len());

    pool.scope(|scope| {
        for (id, chunk) in dictionary.chunks(chunk_size).enumerate() {
            let sender = sender.clone();
            let progress = &progress;
            scope.spawn(move |_| score_chunk(id, chunk, answers, scorer, &sender, progress));
        }
    });
    drop(sender);
    progress.finish_and_clear();

    let results = receiver.iter().collect::<Result<Vec<_>, _>>()?;
    if results.len() != dictionary.len() {
        return Err(SolverError::IncompleteRun {
            expected: dictionary.len(),
            collected: results.len(),
        });
    }

    info!(
        "Scored {} guesses in {:.2}s",
        results.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(results)
}

/// Worker body: score guesses in order, stopping at the first error
fn score_chunk<S>(
    id: usize,
    chunk: &[Word],
    answers: &[Word],
    scorer: &S,
    sender: &ResultSender,
    progress: &ProgressBar,
) where
    S: EliminationScorer + ?Sized,
{
    for guess in chunk {
        let result = median_elimination(guess, answers, scorer).map(|score| ScoreResult {
            word: *guess,
            score,
        });
        let failed = result.is_err();

        // Receiver outlives the scope, so a send only fails if it was dropped
        if sender.send(result).is_err() || failed {
            return;
        }
        progress.inc(1);
    }

    debug!("Worker {id} finished {} guesses", chunk.len());
}
