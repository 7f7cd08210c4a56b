use crate::reports;
use clap::Args;
use wordgrid::api;
use wordgrid::config::Config;
use wordgrid::error::WgResult;
use wordgrid::grid::Grid;
use wordgrid::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[command(flatten)]
    pub config: Config,

    /// The word to look for
    pub word: String,
}

pub fn run(args: TraceArgs, grid: &Grid, scorer: &Scorer, config: Config) -> WgResult<()> {
    let report = api::trace_word(grid, &args.word, scorer, &config);
    reports::print_trace_report(grid, &report, config.report.format)
}
