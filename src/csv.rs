// src/csv.rs
use std::io::{self, Write};

use crate::question::Question;

/// Header row for CLI exports.
pub const TITLE_HEADERS: [&str; Question::FIELD_COUNT] =
    ["Question", "Category", "Difficulty", "Correct Answer", "Incorrect Answers"];

/// Header row using record keys (what the GUI download writes).
pub const KEY_HEADERS: [&str; Question::FIELD_COUNT] =
    ["question", "category", "difficulty", "correct_answer", "incorrect_answers"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvStyle {
    pub headers: &'static [&'static str; Question::FIELD_COUNT],
    pub newline: &'static str,
    /// Terminate the last row as well.
    pub trailing_newline: bool,
    /// Quote cells that start or end with a space.
    pub quote_padded: bool,
}

impl CsvStyle {
    /// `questions.csv` from the CLI.
    pub const FILE: CsvStyle = CsvStyle {
        headers: &TITLE_HEADERS,
        newline: "\n",
        trailing_newline: true,
        quote_padded: false,
    };
    /// `trivia_questions.csv` from the table view. Same layout as Papa.unparse:
    /// CRLF between rows, none after the last one.
    pub const DOWNLOAD: CsvStyle = CsvStyle {
        headers: &KEY_HEADERS,
        newline: "\r\n",
        trailing_newline: false,
        quote_padded: true,
    };
}

/* ---------------- Writing ---------------- */

const SEP: char = ',';

fn needs_quotes(field: &str, style: CsvStyle) -> bool {
    field.contains(SEP)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
        || (style.quote_padded && (field.starts_with(' ') || field.ends_with(' ')))
}

/// Write the cells of a single row; the caller writes the terminator.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], style: CsvStyle) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", SEP)?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, style) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    Ok(())
}

/// Header + one row per question.
pub fn write_questions<W: Write>(mut w: W, questions: &[Question], style: CsvStyle) -> io::Result<()> {
    write_row(&mut w, style.headers, style)?;
    for q in questions {
        w.write_all(style.newline.as_bytes())?;
        write_row(&mut w, &q.cells(), style)?;
    }
    if style.trailing_newline {
        w.write_all(style.newline.as_bytes())?;
    }
    Ok(())
}

pub fn to_csv_string(questions: &[Question], style: CsvStyle) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_questions(&mut buf, questions, style);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
