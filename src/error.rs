use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordGridError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Dictionary Load Error: could not read '{path}': {source}")]
    DictionaryLoad {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Unknown Letter: '{letter}' has no point value")]
    UnknownLetter { letter: char },

    #[error("Score Overflow: letter values sum past {}", u32::MAX)]
    ScoreOverflow,

    #[error("Scoring Error: '{word}' could not be scored: {source}")]
    Scoring {
        word: String,
        #[source]
        source: Box<WordGridError>,
    },
}

pub type WgResult<T> = Result<T, WordGridError>;
