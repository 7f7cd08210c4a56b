mod common;

use common::{sample_dictionary, sample_grid};
use wordgrid::api::{solve, trace_word};
use wordgrid::config::Config;
use wordgrid::finder::NoProgress;
use wordgrid::grid::Position;
use wordgrid::ranking::WordResult;
use wordgrid::scorer::Scorer;

#[test]
fn test_solve_reports_top_words() {
    let mut config = Config::default();
    config.report.top = 3;

    let report = solve(
        &sample_grid(),
        &sample_dictionary(),
        &Scorer::default(),
        &config,
        NoProgress,
    )
    .unwrap();

    assert_eq!(report.found_count, 22);
    assert_eq!(
        report.top,
        vec![
            WordResult::new("LEWD", 12),
            WordResult::new("NEWEL", 12),
            WordResult::new("DUNE", 10),
        ]
    );
    assert_eq!(report.grid.len(), 5);
    assert_eq!(report.grid[0], vec!["D", "I", "F", "U", "E"]);
}

#[test]
fn test_equal_values_rank_alphabetically() {
    let report = solve(
        &sample_grid(),
        &sample_dictionary(),
        &Scorer::default(),
        &Config::default(),
        NoProgress,
    )
    .unwrap();

    let words: Vec<&str> = report.top.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(
        words,
        vec!["LEWD", "NEWEL", "DUNE", "YEW", "OWL", "DIDO", "MID", "NEW", "NOW", "OWN"]
    );
}

#[test]
fn test_solve_rejects_invalid_config() {
    let mut config = Config::default();
    config.search.min_word_len = 0;
    let result = solve(
        &sample_grid(),
        &sample_dictionary(),
        &Scorer::default(),
        &config,
        NoProgress,
    );
    assert!(result.is_err());
}

#[test]
fn test_report_serialises_camel_case() {
    let report = solve(
        &sample_grid(),
        &sample_dictionary(),
        &Scorer::default(),
        &Config::default(),
        NoProgress,
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["foundCount"], 22);
    assert_eq!(json["top"][0]["word"], "LEWD");
    assert_eq!(json["top"][0]["value"], 12);
}

#[test]
fn test_trace_word_normalises_and_scores() {
    let report = trace_word(&sample_grid(), " done ", &Scorer::default(), &Config::default());

    assert_eq!(report.word, "DONE");
    assert!(report.traceable);
    assert!(!report.budget_exceeded);
    assert_eq!(
        report.path,
        vec![
            Position::new(1, 2),
            Position::new(1, 3),
            Position::new(1, 4),
            Position::new(0, 4),
        ]
    );
    assert_eq!(report.value, Some(7));
}

#[test]
fn test_trace_word_reports_missing_word() {
    let report = trace_word(&sample_grid(), "die", &Scorer::default(), &Config::default());
    assert!(!report.traceable);
    assert!(report.path.is_empty());
    assert_eq!(report.value, Some(5));
}
