use crate::error::{WgResult, WordGridError};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Candidate words, upper-cased and de-duplicated. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WgResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        debug!("Loading word list from: {}", path_str);

        let file = File::open(path).map_err(|e| WordGridError::DictionaryLoad {
            path: path_str.clone(),
            source: csv::Error::from(e),
        })?;

        Self::read(file).map_err(|source| WordGridError::DictionaryLoad {
            path: path_str,
            source,
        })
    }

    /// One word per line, whitespace-trimmed; trailing tab-separated columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> WgResult<Self> {
        Self::read(reader).map_err(|source| WordGridError::DictionaryLoad {
            path: "<reader>".to_string(),
            source,
        })
    }

    fn read<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut words = BTreeSet::new();
        let mut lines_read = 0usize;

        for result in rdr.records() {
            let rec = result?;
            lines_read += 1;

            // Leading whitespace may include a tab, which leaves field 0 empty.
            let Some(word) = rec.iter().map(str::trim).find(|f| !f.is_empty()) else {
                continue;
            };
            words.insert(word.to_uppercase());
        }

        debug!(
            "   -> Scanned {} lines. Loaded {} unique words.",
            lines_read,
            words.len()
        );

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}
