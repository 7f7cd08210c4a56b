pub mod table;

pub use self::table::{LetterValues, MAX_LETTER_VALUE};
use crate::error::{WgResult, WordGridError};

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub values: LetterValues,
}

impl Scorer {
    pub fn new(values: LetterValues) -> Self {
        Self { values }
    }

    /// Sum of the letter values of `word`.
    pub fn value(&self, word: &str) -> WgResult<u32> {
        word.chars().try_fold(0u32, |total, letter| {
            self.values
                .get(letter)
                .ok_or(WordGridError::UnknownLetter { letter })?
                .checked_add(total)
                .ok_or(WordGridError::ScoreOverflow)
        })
    }

    /// Like [`Scorer::value`], with failures wrapped in [`WordGridError::Scoring`].
    pub fn score_word(&self, word: &str) -> WgResult<u32> {
        self.value(word).map_err(|e| WordGridError::Scoring {
            word: word.to_string(),
            source: Box::new(e),
        })
    }
}
