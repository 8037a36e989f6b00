// src/gui/actions/print.rs
use std::io::{self, Write};

use crate::{error::TriviaError, export, gui::app::App};

/// Dump the full stored set as pretty JSON on stdout.
pub fn print(app: &mut App) {
    let questions = app.view().questions();

    let res = export::to_json_string(questions).and_then(|json| {
        let mut out = io::stdout().lock();
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok::<_, TriviaError>(())
    });

    match res {
        Ok(()) => {
            logf!("Print: rows={}", questions.len());
            app.status(format!("Printed {} question(s) to console", questions.len()));
        }
        Err(e) => {
            loge!("Print: Error: {}", e);
            app.status(format!("Print error: {e}"));
        }
    }
}
