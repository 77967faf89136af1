//! Guess ranking command
//!
//! Scores the whole dictionary in parallel and keeps the strongest guesses.

use crate::solver::{
    DEFAULT_TOP, RankedGuess, SchedulerConfig, ScorerKind, SolverError, rank, run,
};
use crate::wordlists::Corpus;
use std::time::{Duration, Instant};

/// Configuration for a ranking run
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    pub top: usize,
    pub scorer: ScorerKind,
    pub scheduler: SchedulerConfig,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            scorer: ScorerKind::default(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

/// Result of a ranking run
#[derive(Debug)]
pub struct RankReport {
    pub ranked: Vec<RankedGuess>,
    pub total_answers: usize,
    pub total_guesses: usize,
    pub scorer: ScorerKind,
    pub duration: Duration,
}

/// Rank every dictionary word by median elimination
///
/// # Errors
///
/// Returns `SolverError` if the answer set is empty, a guess has nothing to be
/// scored against, or the worker pool fails to start.
pub fn rank_guesses(corpus: &Corpus, config: &RankConfig) -> Result<RankReport, SolverError> {
    let start = Instant::now();

    let scorer = config.scorer.build(&corpus.answers);
    let results = run(&corpus.dictionary, &corpus.answers, &scorer, &config.scheduler)?;
    let ranked = rank(results, &corpus.answers, config.top);

    Ok(RankReport {
        ranked,
        total_answers: corpus.answers.len(),
        total_guesses: corpus.dictionary.len(),
        scorer: config.scorer,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        let answers = words_from_slice(&["arise", "crane", "crate", "slate", "stare"]).unwrap();
        let guesses = words_from_slice(&["zzzzz", "crane"]).unwrap();
        Corpus::new(&answers, &guesses, &[])
    }

    #[test]
    fn ranks_whole_dictionary() {
        let corpus = corpus();
        let config = RankConfig {
            top: 10,
            scheduler: SchedulerConfig::with_workers(2),
            ..RankConfig::default()
        };

        let report = rank_guesses(&corpus, &config).unwrap();

        assert_eq!(report.total_answers, 5);
        assert_eq!(report.total_guesses, 6);
        assert_eq!(report.ranked.len(), 6);

        // ZZZZZ eliminates nothing and is not an answer
        let last = report.ranked.last().unwrap();
        assert_eq!(last.word.text(), "zzzzz");
        assert_eq!(last.score, 0);
        assert!(!last.valid);
        assert!(report.ranked[..5].iter().all(|r| r.valid && r.score == 4));
    }

    #[test]
    fn both_scorers_rank_identically() {
        let corpus = corpus();
        let indexed = RankConfig {
            scorer: ScorerKind::Indexed,
            scheduler: SchedulerConfig::with_workers(3),
            ..RankConfig::default()
        };
        let brute = RankConfig {
            scorer: ScorerKind::BruteForce,
            ..indexed
        };

        let a = rank_guesses(&corpus, &indexed).unwrap();
        let b = rank_guesses(&corpus, &brute).unwrap();
        assert_eq!(a.ranked, b.ranked);
    }

    #[test]
    fn top_is_respected() {
        let config = RankConfig {
            top: 2,
            scheduler: SchedulerConfig::with_workers(1),
            ..RankConfig::default()
        };
        let report = rank_guesses(&corpus(), &config).unwrap();
        assert_eq!(report.ranked.len(), 2);
    }
}
