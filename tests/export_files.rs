// tests/export_files.rs
mod common;

use std::fs;

use serde_json::Value;
use trivia_export::{
    config::options::ExportFormat,
    error::TriviaError,
    export::{export_to, ExportOutcome},
};

use common::question;

fn sample(k: usize) -> Vec<trivia_export::Question> {
    (0..k).map(|i| question("Film", "easy", &format!("Q{i}, \"quoted\""))).collect()
}

#[test]
fn json_file_has_one_object_per_question() {
    let dir = tempfile::tempdir().unwrap();
    let qs = sample(3);
    let mut console = Vec::new();

    let outcome = export_to(&qs, ExportFormat::Json, dir.path(), &mut console).unwrap();
    let path = dir.path().join("questions.json");
    assert_eq!(outcome, ExportOutcome::Written(path.clone()));
    assert!(console.is_empty());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n  {"), "two-space pretty print");

    let parsed: Value = serde_json::from_str(&text).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    for obj in arr {
        assert_eq!(obj.as_object().unwrap().len(), 5);
    }

    // keys appear in record order
    let first = &text[..text.find('}').unwrap()];
    let pos = |k: &str| first.find(&format!("\"{k}\"")).unwrap();
    assert!(pos("question") < pos("category"));
    assert!(pos("category") < pos("difficulty"));
    assert!(pos("difficulty") < pos("correct_answer"));
    assert!(pos("correct_answer") < pos("incorrect_answers"));
}

#[test]
fn csv_file_has_header_plus_rows() {
    let dir = tempfile::tempdir().unwrap();
    let qs = sample(4);
    let mut console = Vec::new();

    export_to(&qs, ExportFormat::Csv, dir.path(), &mut console).unwrap();
    let text = fs::read_to_string(dir.path().join("questions.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Question,Category,Difficulty,Correct Answer,Incorrect Answers");
    assert_eq!(lines[1], r#""Q0, ""quoted""",Film,easy,a,"b, c""#);
}

#[test]
fn console_prints_json_and_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let qs = sample(2);
    let mut console = Vec::new();

    let outcome = export_to(&qs, ExportFormat::Console, dir.path(), &mut console).unwrap();
    assert_eq!(outcome, ExportOutcome::Printed);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

    let printed: Value = serde_json::from_slice(&console).unwrap();
    assert_eq!(printed.as_array().unwrap().len(), 2);
}

#[test]
fn unknown_selector_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = Vec::new();

    let err = "xml"
        .parse::<ExportFormat>()
        .and_then(|format| export_to(&sample(1), format, dir.path(), &mut console))
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidFormat(ref f) if f == "xml"));
    assert!(console.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn second_export_replaces_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = Vec::new();

    export_to(&sample(5), ExportFormat::Json, dir.path(), &mut console).unwrap();
    export_to(&sample(1), ExportFormat::Json, dir.path(), &mut console).unwrap();

    let text = fs::read_to_string(dir.path().join("questions.json")).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}
