// src/runner.rs
use std::io::Write;
use std::num::NonZeroU32;

use crate::{
    config::options::AppOptions,
    error::TriviaError,
    export::{self, ExportOutcome},
    fetch::QuestionSource,
    normalize::normalize_all,
    progress::{Progress, Stage},
    question::Question,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub questions: usize,
    pub outcome: ExportOutcome,
}

/// Fetch then normalize. Nothing is normalized until the fetch has fully
/// completed; a failed fetch yields no questions at all.
/// Pass `&mut NullProgress` when you don't care.
pub fn fetch_questions(
    source: &dyn QuestionSource,
    count: NonZeroU32,
    progress: &mut dyn Progress,
) -> Result<Vec<Question>, TriviaError> {
    progress.begin(count.get() as usize);

    let raws = match source.fetch(count) {
        Ok(r) => r,
        Err(e) => {
            loge!("Fetch: {}", e);
            progress.log("No questions retrieved. Please try again.");
            return Err(e.into());
        }
    };
    progress.stage_done(Stage::Fetched(raws.len()));

    let questions = normalize_all(raws);
    progress.stage_done(Stage::Normalized(questions.len()));
    Ok(questions)
}

/// Top-level CLI pipeline: fetch → normalize → export.
/// `console` receives the console-format output.
pub fn run<W: Write>(
    source: &dyn QuestionSource,
    opts: &AppOptions,
    console: &mut W,
    progress: &mut dyn Progress,
) -> Result<RunSummary, TriviaError> {
    let res = fetch_questions(source, opts.fetch.count, progress).and_then(|questions| {
        let outcome = export::export_to(&questions, opts.export.format, &opts.export.out_dir, console)?;
        Ok(RunSummary { questions: questions.len(), outcome })
    });

    if res.is_ok() {
        progress.stage_done(Stage::Exported);
    }
    progress.finish();
    res
}
