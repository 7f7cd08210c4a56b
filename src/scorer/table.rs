use crate::error::{WgResult, WordGridError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Largest accepted point value. Words of up to 255 letters always sum without overflow.
pub const MAX_LETTER_VALUE: u32 = 1 << 24;

/// Point value per uppercase letter. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterValues {
    values: BTreeMap<char, u32>,
}

impl Default for LetterValues {
    fn default() -> Self {
        Self::standard()
    }
}

impl LetterValues {
    /// The built-in table.
    pub fn standard() -> Self {
        const TABLE: [(u32, &str); 8] = [
            (1, "AEIO"),
            (2, "NRST"),
            (3, "DGL"),
            (4, "BHPMUY"),
            (5, "CFVW"),
            (6, "K"),
            (7, "JX"),
            (8, "QZ"),
        ];

        let values = TABLE
            .iter()
            .flat_map(|&(points, letters)| letters.chars().map(move |c| (c, points)))
            .collect();
        Self { values }
    }

    /// Builds a table from explicit pairs. Keys are upper-cased; values must lie in
    /// `1..=MAX_LETTER_VALUE`.
    pub fn from_pairs<I: IntoIterator<Item = (char, u32)>>(pairs: I) -> WgResult<Self> {
        let mut values = BTreeMap::new();
        for (letter, points) in pairs {
            if points == 0 {
                return Err(WordGridError::Config(format!(
                    "letter '{}' must have a positive point value",
                    letter
                )));
            }
            if points > MAX_LETTER_VALUE {
                return Err(WordGridError::Config(format!(
                    "letter '{}' value {} exceeds the maximum of {}",
                    letter, points, MAX_LETTER_VALUE
                )));
            }
            values.insert(letter.to_ascii_uppercase(), points);
        }
        if values.is_empty() {
            return Err(WordGridError::Config(
                "letter value table is empty".to_string(),
            ));
        }
        Ok(Self { values })
    }

    /// Loads a JSON object such as `{"A": 1, "B": 4}`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WgResult<Self> {
        let content = fs::read_to_string(path)?;
        let raw: BTreeMap<char, u32> = serde_json::from_str(&content)?;
        Self::from_pairs(raw)
    }

    pub fn get(&self, letter: char) -> Option<u32> {
        self.values.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
