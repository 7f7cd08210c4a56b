use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::{WgResult, WordGridError};
use crate::grid::Grid;
use crate::pathfinder::{PathFinder, StartPolicy, TraceOutcome};
use crate::scorer::Scorer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, info, warn};

pub struct FinderOptions {
    pub min_word_len: usize,
    pub policy: StartPolicy,
    pub node_budget: Option<u64>,
    /// Worker count; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            policy: StartPolicy::Strict,
            node_budget: None,
            threads: None,
        }
    }
}

impl From<&Config> for FinderOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            min_word_len: cfg.search.min_word_len,
            policy: cfg.search.start_policy(),
            node_budget: cfg.search.max_nodes,
            threads: cfg.search.threads,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedWord {
    pub word: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Traceable words and their values, in dictionary order.
    pub found: BTreeMap<String, u32>,
    /// Traceable words that could not be scored.
    pub skipped: Vec<SkippedWord>,
    /// Words whose search ran out of node budget.
    pub aborted: Vec<String>,
    pub candidates: usize,
    pub attempted: usize,
    pub cancelled: bool,
}

/// Receives updates while words are searched. Called from worker threads.
/// Returning `false` cancels the remaining words.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, done: usize, total: usize) -> bool;
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _done: usize, _total: usize) -> bool {
        true
    }
}

enum Verdict {
    TooShort,
    NotAttempted,
    Missing,
    Found(u32),
    Unscorable(String),
    Aborted,
}

pub struct WordFinder<'a> {
    grid: &'a Grid,
    scorer: &'a Scorer,
    options: FinderOptions,
}

impl<'a> WordFinder<'a> {
    pub fn new(grid: &'a Grid, scorer: &'a Scorer, options: FinderOptions) -> Self {
        Self {
            grid,
            scorer,
            options,
        }
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        dictionary: &Dictionary,
        callback: CB,
    ) -> WgResult<SearchOutcome> {
        match self.options.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| WordGridError::Config(e.to_string()))?;
                Ok(pool.install(|| self.search(dictionary, &callback)))
            }
            None => Ok(self.search(dictionary, &callback)),
        }
    }

    fn search<CB: ProgressCallback>(
        &self,
        dictionary: &Dictionary,
        callback: &CB,
    ) -> SearchOutcome {
        let words: Vec<&str> = dictionary.iter().collect();
        let total = words.len();
        let finder = PathFinder::new(self.options.policy, self.options.node_budget);

        info!(
            "Searching {} words on a {}x{} grid ({} start)",
            total,
            self.grid.rows(),
            self.grid.cols(),
            self.options.policy
        );

        let done = AtomicUsize::new(0);
        let cancelled = AtomicBool::new(false);

        let verdicts: Vec<Verdict> = words
            .par_iter()
            .map(|word| {
                if cancelled.load(Ordering::Relaxed) {
                    return Verdict::NotAttempted;
                }

                let verdict = if word.chars().count() < self.options.min_word_len.max(2) {
                    Verdict::TooShort
                } else {
                    match finder.trace(word, self.grid) {
                        TraceOutcome::Found(_) => match self.scorer.score_word(word) {
                            Ok(value) => Verdict::Found(value),
                            Err(e) => Verdict::Unscorable(e.to_string()),
                        },
                        TraceOutcome::Missing => Verdict::Missing,
                        TraceOutcome::BudgetExceeded => Verdict::Aborted,
                    }
                };

                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                if !callback.on_progress(n, total) {
                    cancelled.store(true, Ordering::Relaxed);
                }
                verdict
            })
            .collect();

        let mut outcome = SearchOutcome {
            candidates: total,
            cancelled: cancelled.load(Ordering::Relaxed),
            ..Default::default()
        };

        for (word, verdict) in words.into_iter().zip(verdicts) {
            match verdict {
                Verdict::NotAttempted | Verdict::TooShort => continue,
                Verdict::Missing => {}
                Verdict::Found(value) => {
                    outcome.found.insert(word.to_string(), value);
                }
                Verdict::Unscorable(reason) => outcome.skipped.push(SkippedWord {
                    word: word.to_string(),
                    reason,
                }),
                Verdict::Aborted => outcome.aborted.push(word.to_string()),
            }
            outcome.attempted += 1;
        }

        debug!(
            "   -> Attempted {} of {} words. Found {}.",
            outcome.attempted,
            total,
            outcome.found.len()
        );
        if !outcome.skipped.is_empty() {
            warn!("⚠️  Skipped {} unscorable words.", outcome.skipped.len());
        }
        if !outcome.aborted.is_empty() {
            warn!(
                "⚠️  Aborted {} words that exceeded the node budget.",
                outcome.aborted.len()
            );
        }
        if outcome.cancelled {
            warn!("⚠️  Search cancelled after {} words.", outcome.attempted);
        }

        outcome
    }
}

/// Searches every dictionary word with default options.
pub fn find_words(grid: &Grid, dictionary: &Dictionary, scorer: &Scorer) -> SearchOutcome {
    WordFinder::new(grid, scorer, FinderOptions::default()).search(dictionary, &NoProgress)
}
