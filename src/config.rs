use crate::error::{WgResult, WordGridError};
use crate::grid::DEFAULT_COLUMNS;
use crate::pathfinder::StartPolicy;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub report: ReportParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Number of letters per grid row
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Shortest word that is searched at all
    #[arg(long, default_value_t = 2)]
    pub min_word_len: usize,

    /// Give up on a word after entering this many cells
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// Do not check the start cell against the first letter
    #[arg(long, default_value_t = false)]
    pub legacy_start: bool,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            min_word_len: 2,
            max_nodes: None,
            legacy_start: false,
            threads: None,
        }
    }
}

impl SearchParams {
    pub fn start_policy(&self) -> StartPolicy {
        if self.legacy_start {
            StartPolicy::Legacy
        } else {
            StartPolicy::Strict
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    /// How many of the highest-valued words to report
    #[arg(short = 't', long, default_value_t = 10)]
    pub top: usize,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top: 10,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WgResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WgResult<()> {
        if self.search.columns == 0 {
            return Err(WordGridError::Config(
                "columns must be positive".to_string(),
            ));
        }
        if self.search.min_word_len == 0 {
            return Err(WordGridError::Config(
                "min_word_len must be positive".to_string(),
            ));
        }
        if self.search.threads == Some(0) {
            return Err(WordGridError::Config(
                "threads must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies every value the user typed on the command line over the values loaded from file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.columns);
        update_if_present!(search.min_word_len);
        update_if_present!(search.max_nodes);
        update_if_present!(search.legacy_start);
        update_if_present!(search.threads);

        update_if_present!(report.top);
        update_if_present!(report.format);
    }
}
