use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    pub word: String,
    pub value: u32,
}

impl WordResult {
    pub fn new(word: impl Into<String>, value: u32) -> Self {
        Self {
            word: word.into(),
            value,
        }
    }
}

impl<S: Into<String>> From<(S, u32)> for WordResult {
    fn from((word, value): (S, u32)) -> Self {
        Self::new(word, value)
    }
}

/// The `n` highest-valued results, value descending.
///
/// The sort is stable: equal values keep the order in which they were supplied.
pub fn top_n<I, R>(results: I, n: usize) -> Vec<WordResult>
where
    I: IntoIterator<Item = R>,
    R: Into<WordResult>,
{
    let mut ranked: Vec<WordResult> = results.into_iter().map(Into::into).collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(n);
    ranked
}
