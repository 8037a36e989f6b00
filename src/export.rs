// src/export.rs
//
// Sinks for a normalized question set: questions.json, questions.csv or stdout.
// Every call is write-once: files are truncated, never appended to.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::consts::{CSV_FILE, JSON_FILE};
use crate::config::options::ExportFormat;
use crate::csv::{self, CsvStyle};
use crate::error::TriviaError;
use crate::file;
use crate::question::Question;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Printed,
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportOutcome::Written(p) => write!(f, "Data saved as {}", p.display()),
            ExportOutcome::Printed => f.write_str("Printed to console"),
        }
    }
}

/// Pretty JSON, two-space indent, keys in `Question` field order.
pub fn to_json_string(questions: &[Question]) -> Result<String, TriviaError> {
    serde_json::to_string_pretty(questions).map_err(TriviaError::Serialize)
}

/// Export into `dir` (file formats) or `console` (console format).
pub fn export_to<W: Write>(
    questions: &[Question],
    format: ExportFormat,
    dir: &Path,
    console: &mut W,
) -> Result<ExportOutcome, TriviaError> {
    logd!("Export: Begin format={} rows={}", format, questions.len());

    let outcome = match format {
        ExportFormat::Json => {
            let json = to_json_string(questions)?;
            let path = file::write_output(dir, JSON_FILE, json.as_bytes())?;
            ExportOutcome::Written(path)
        }
        ExportFormat::Csv => {
            let text = csv::to_csv_string(questions, CsvStyle::FILE);
            let path = file::write_output(dir, CSV_FILE, text.as_bytes())?;
            ExportOutcome::Written(path)
        }
        ExportFormat::Console => {
            let json = to_json_string(questions)?;
            writeln!(console, "{json}")?;
            console.flush()?;
            ExportOutcome::Printed
        }
    };

    logf!("{}", outcome);
    Ok(outcome)
}
