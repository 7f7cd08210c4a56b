use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::WgResult;
use crate::finder::{FinderOptions, ProgressCallback, SkippedWord, WordFinder};
use crate::grid::{Grid, Position};
use crate::pathfinder::{PathFinder, TraceOutcome};
use crate::ranking::{top_n, WordResult};
use crate::scorer::Scorer;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to render one solve.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub grid: Vec<Vec<String>>,
    pub candidates: usize,
    pub found_count: usize,
    pub top: Vec<WordResult>,
    pub skipped: Vec<SkippedWord>,
    pub aborted: Vec<String>,
    pub cancelled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TraceReport {
    pub word: String,
    pub traceable: bool,
    pub budget_exceeded: bool,
    pub path: Vec<Position>,
    pub value: Option<u32>,
}

/// Service: search the grid for every dictionary word and rank the hits.
pub fn solve<CB: ProgressCallback>(
    grid: &Grid,
    dictionary: &Dictionary,
    scorer: &Scorer,
    config: &Config,
    callback: CB,
) -> WgResult<SolveReport> {
    config.validate()?;

    let finder = WordFinder::new(grid, scorer, FinderOptions::from(config));
    let outcome = finder.run(dictionary, callback)?;

    let top = top_n(
        outcome.found.iter().map(|(word, &value)| (word.as_str(), value)),
        config.report.top,
    );

    Ok(SolveReport {
        grid: grid.to_rows(),
        candidates: outcome.candidates,
        found_count: outcome.found.len(),
        top,
        skipped: outcome.skipped,
        aborted: outcome.aborted,
        cancelled: outcome.cancelled,
    })
}

/// Service: trace a single word, normalised to upper case.
pub fn trace_word(grid: &Grid, word: &str, scorer: &Scorer, config: &Config) -> TraceReport {
    let word = word.trim().to_uppercase();
    let finder = PathFinder::new(config.search.start_policy(), config.search.max_nodes);

    let (traceable, budget_exceeded, path) = match finder.trace(&word, grid) {
        TraceOutcome::Found(path) => (true, false, path),
        TraceOutcome::Missing => (false, false, Vec::new()),
        TraceOutcome::BudgetExceeded => (false, true, Vec::new()),
    };
    let value = scorer.value(&word).ok();

    TraceReport {
        word,
        traceable,
        budget_exceeded,
        path,
        value,
    }
}
