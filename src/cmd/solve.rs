use crate::reports;
use clap::Args;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};
use wordgrid::api;
use wordgrid::config::Config;
use wordgrid::dictionary::Dictionary;
use wordgrid::error::WgResult;
use wordgrid::finder::ProgressCallback;
use wordgrid::grid::Grid;
use wordgrid::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Word list, one word per line
    #[arg(short, long, default_value = "data/words.txt")]
    pub dictionary: String,
}

/// Logs roughly every tenth of the word list.
struct LogProgress {
    step: usize,
    last_reported: AtomicUsize,
}

impl LogProgress {
    fn new(total: usize) -> Self {
        Self {
            step: (total / 10).max(1),
            last_reported: AtomicUsize::new(0),
        }
    }
}

impl ProgressCallback for LogProgress {
    fn on_progress(&self, done: usize, total: usize) -> bool {
        let bucket = done / self.step;
        if self.last_reported.fetch_max(bucket, Ordering::Relaxed) < bucket {
            debug!("Progress: {}/{} words", done, total);
        }
        true
    }
}

pub fn run(args: SolveArgs, grid: &Grid, scorer: &Scorer, config: Config) -> WgResult<()> {
    info!("📂 Loading Dictionary: {}", args.dictionary);
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    info!("📚 Loaded {} words", dictionary.len());

    let progress = LogProgress::new(dictionary.len());
    let report = api::solve(grid, &dictionary, scorer, &config, progress)?;

    reports::print_solve_report(&report, config.report.top, config.report.format)
}
