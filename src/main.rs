use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};
use wordgrid::config::Config;
use wordgrid::error::{WgResult, WordGridError};
use wordgrid::grid::Grid;
use wordgrid::scorer::{LetterValues, Scorer};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find dictionary words traced through a letter grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Grid letters in row-major order, e.g. "DIFUE TIDON MIAWE"
    #[arg(global = true, short, long)]
    letters: Option<String>,

    /// Fill the grid with this many random letters instead of --letters
    #[arg(global = true, long, conflicts_with = "letters")]
    random: Option<usize>,

    #[arg(global = true, long)]
    seed: Option<u64>,

    /// JSON file with search and report settings
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    /// JSON object mapping letters to point values
    #[arg(global = true, long)]
    letter_values: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find every traceable dictionary word and report the best ones
    Solve(cmd::solve::SolveArgs),
    /// Check a single word and show the path it takes
    Trace(cmd::trace::TraceArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = try_main(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn try_main(cli: Cli, matches: &clap::ArgMatches) -> WgResult<()> {
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Solve(args) => (&args.config, matches.subcommand_matches("solve")),
        Commands::Trace(args) => (&args.config, matches.subcommand_matches("trace")),
    };

    let config = match (&cli.config_file, sub_matches) {
        (Some(path), Some(sub_matches)) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        _ => cli_config.clone(),
    };
    config.validate()?;

    let grid = build_grid(&cli, &config)?;

    let values = match &cli.letter_values {
        Some(path) => {
            info!("🔠 Loading Letter Values from: {}", path);
            LetterValues::load_from_file(path)?
        }
        None => LetterValues::standard(),
    };
    let scorer = Scorer::new(values);

    match cli.command {
        Commands::Solve(args) => cmd::solve::run(args, &grid, &scorer, config),
        Commands::Trace(args) => cmd::trace::run(args, &grid, &scorer, config),
    }
}

fn build_grid(cli: &Cli, config: &Config) -> WgResult<Grid> {
    let columns = config.search.columns;
    match (&cli.letters, cli.random) {
        (Some(letters), _) => Grid::parse(letters, columns),
        (None, Some(count)) => {
            let mut rng = match cli.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            Grid::random(&mut rng, count, columns)
        }
        (None, None) => Err(WordGridError::Config(
            "no grid given: pass --letters or --random".to_string(),
        )),
    }
}
