use regex::Regex;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const LETTERS: &str = "DIFUE TIDON MIAWE XNLEU IOWIY";

fn word_list() -> String {
    format!("{}/data/words.txt", env!("CARGO_MANIFEST_DIR"))
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordgrid"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn result_lines(stdout: &str) -> Vec<String> {
    let line = Regex::new(r"^([A-Z]+): (\d+)$").unwrap();
    stdout
        .lines()
        .filter(|l| line.is_match(l))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_solve_text_output() {
    let dict = word_list();
    let output = run(&["solve", "--letters", LETTERS, "-d", &dict]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Matrix:");
    assert_eq!(lines[1], "D I F U E");
    assert_eq!(lines[5], "I O W I Y");
    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "Top 10 Valid Words and Their Values:");

    let results = result_lines(&stdout);
    assert_eq!(results.len(), 10);
    assert_eq!(results[0], "LEWD: 12");
    assert_eq!(results[1], "NEWEL: 12");
    assert_eq!(results[9], "OWN: 8");
}

#[test]
fn test_cli_solve_json_output() {
    let dict = word_list();
    let output = run(&["solve", "-l", LETTERS, "-d", &dict, "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["foundCount"], 22);
    assert_eq!(report["top"].as_array().unwrap().len(), 10);
    assert_eq!(report["cancelled"], false);
}

#[test]
fn test_cli_table_output() {
    let dict = word_list();
    let output = run(&["solve", "-l", LETTERS, "-d", &dict, "-f", "table", "-t", "3"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("LEWD"));
    assert!(stdout.contains("Found 22 of 69 words (0 skipped, 0 aborted)."));
}

#[test]
fn test_cli_config_file_and_override() {
    let dict = word_list();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"report": {{"top": 3}}}}"#).unwrap();
    let config_path = config.path().to_str().unwrap();

    let output = run(&["solve", "-l", LETTERS, "-d", &dict, "--config", config_path]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Top 3 Valid Words"));
    assert_eq!(result_lines(&stdout).len(), 3);

    let output = run(&[
        "solve", "-l", LETTERS, "-d", &dict, "--config", config_path, "--top", "5",
    ]);
    assert!(output.status.success());
    assert_eq!(result_lines(&stdout_of(&output)).len(), 5);
}

#[test]
fn test_cli_trace_word() {
    let output = run(&["trace", "--letters", LETTERS, "done"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("DONE: traceable"));
    assert!(stdout.contains("Path: (1, 2) -> (1, 3) -> (1, 4) -> (0, 4)"));
    assert!(stdout.contains("Value: 7"));

    let output = run(&["trace", "--letters", LETTERS, "die"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("DIE: not traceable"));
}

#[test]
fn test_cli_random_grid_is_reproducible() {
    let dict = word_list();
    let args = ["solve", "--random", "25", "--seed", "7", "-d", &dict];
    let first = run(&args);
    let second = run(&args);
    assert!(first.status.success());
    assert_eq!(stdout_of(&first), stdout_of(&second));

    let grid_row = Regex::new(r"^[A-Z]( [A-Z]){4}$").unwrap();
    let stdout = stdout_of(&first);
    let rows = stdout.lines().skip(1).take(5);
    for row in rows {
        assert!(grid_row.is_match(row), "bad grid row: {:?}", row);
    }
}

#[test]
fn test_cli_missing_dictionary_fails() {
    let output = run(&["solve", "-l", LETTERS, "-d", "/nonexistent/words.txt"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not read"));
}

#[test]
fn test_cli_requires_a_grid() {
    let dict = word_list();
    let output = run(&["solve", "-d", &dict]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no grid given"));
}

#[test]
fn test_cli_rejects_bad_letters() {
    let output = run(&["trace", "--letters", "AB3CD", "ab"]);
    assert!(!output.status.success());
}
