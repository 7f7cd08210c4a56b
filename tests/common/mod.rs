#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use wordgrid::dictionary::Dictionary;
use wordgrid::grid::Grid;

/// The 5x5 board used across the suite.
pub const SAMPLE_LETTERS: &str = "DIFUE TIDON MIAWE XNLEU IOWIY";

pub fn sample_grid() -> Grid {
    Grid::parse(SAMPLE_LETTERS, 5).expect("sample grid parses")
}

pub fn sample_word_list_path() -> String {
    format!("{}/data/words.txt", env!("CARGO_MANIFEST_DIR"))
}

pub fn sample_dictionary() -> Dictionary {
    Dictionary::load_from_file(sample_word_list_path()).expect("sample word list loads")
}

pub fn dictionary_of(words: &[&str]) -> Dictionary {
    words.iter().collect()
}

pub fn write_word_list(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

/// Traceable words of the sample list on the sample board, with their values.
pub const SAMPLE_FOUND: [(&str, u32); 22] = [
    ("DID", 7),
    ("DIDO", 8),
    ("DOE", 5),
    ("DON", 6),
    ("DONE", 7),
    ("DUNE", 10),
    ("LEWD", 12),
    ("LIE", 5),
    ("MID", 8),
    ("NEW", 8),
    ("NEWEL", 12),
    ("NIL", 6),
    ("NOD", 6),
    ("NOW", 8),
    ("OWE", 7),
    ("OWL", 9),
    ("OWN", 8),
    ("TIN", 5),
    ("WE", 6),
    ("WEE", 7),
    ("WEN", 8),
    ("YEW", 10),
];
