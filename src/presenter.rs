// src/presenter.rs
//
// View state for the question table.
//
// - PresenterState: immutable snapshot. Only `reduce` produces a new one,
//                   consuming the old; nothing mutates a state in place.
// - Store:          owns the current snapshot and runs the dispatch cycle
//                   (Action → reduce → new state).
// - FilteredView:   derived row-index projection for display. Never touches
//                   the stored set, so downloads always see every question.

use std::io;
use std::mem;
use std::path::{Path, PathBuf};

use crate::config::consts::{DOWNLOAD_CSV_FILE, DOWNLOAD_JSON_FILE};
use crate::config::options::OrderPolicy;
use crate::csv::{self, CsvStyle};
use crate::error::TriviaError;
use crate::export::to_json_string;
use crate::file;
use crate::question::Question;

/// (value, label) pairs for the difficulty selector. `""` means no filter.
pub const DIFFICULTY_CHOICES: [(&str, &str); 4] = [
    ("", "All"),
    ("easy", "Easy"),
    ("medium", "Medium"),
    ("hard", "Hard"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FetchStarted,
    Loaded(Vec<Question>),
    FetchFailed(String),
    SelectDifficulty(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresenterState {
    questions: Vec<Question>,
    difficulty: String,
    order: OrderPolicy,
    phase: LoadPhase,
}

impl PresenterState {
    pub fn new(order: OrderPolicy) -> Self {
        Self { order, ..Self::default() }
    }

    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::FetchStarted => Self { phase: LoadPhase::Loading, ..self },
            Action::Loaded(questions) => Self {
                questions: apply_order(questions, self.order),
                phase: LoadPhase::Ready,
                ..self
            },
            // Keep whatever was loaded before; only the phase changes.
            Action::FetchFailed(msg) => Self { phase: LoadPhase::Failed(msg), ..self },
            Action::SelectDifficulty(difficulty) => Self { difficulty, ..self },
        }
    }

    /// Full stored set, in stored order.
    pub fn questions(&self) -> &[Question] { &self.questions }
    pub fn difficulty(&self) -> &str { &self.difficulty }
    pub fn phase(&self) -> &LoadPhase { &self.phase }

    /// Rows currently shown for the selected difficulty.
    pub fn visible(&self) -> FilteredView<'_> {
        FilteredView::new(&self.questions, &self.difficulty)
    }

    /// Build a download of the full stored set, ignoring the filter.
    pub fn download(&self, format: DownloadFormat) -> Result<Download, TriviaError> {
        let download = match format {
            DownloadFormat::Json => Download {
                file_name: DOWNLOAD_JSON_FILE,
                mime: "application/json",
                contents: to_json_string(&self.questions)?,
            },
            DownloadFormat::Csv => Download {
                file_name: DOWNLOAD_CSV_FILE,
                mime: "text/csv;charset=utf-8",
                contents: csv::to_csv_string(&self.questions, CsvStyle::DOWNLOAD),
            },
        };
        Ok(download)
    }
}

/// Owns the current state; the only place a new state replaces the old one.
#[derive(Debug, Default)]
pub struct Store {
    state: PresenterState,
}

impl Store {
    pub fn new(state: PresenterState) -> Self { Self { state } }

    pub fn state(&self) -> &PresenterState { &self.state }

    pub fn dispatch(&mut self, action: Action) {
        logd!("Store: dispatch {}", action_name(&action));
        let prev = mem::take(&mut self.state);
        self.state = prev.reduce(action);
    }
}

fn action_name(action: &Action) -> String {
    match action {
        Action::FetchStarted => s!("FetchStarted"),
        Action::Loaded(qs) => format!("Loaded({})", qs.len()),
        Action::FetchFailed(_) => s!("FetchFailed"),
        Action::SelectDifficulty(d) => format!("SelectDifficulty({d:?})"),
    }
}

/// Stored order for freshly loaded questions.
pub fn apply_order(mut questions: Vec<Question>, order: OrderPolicy) -> Vec<Question> {
    if order == OrderPolicy::CategoryAsc {
        // sort_by_cached_key is stable; equal categories keep fetch order
        questions.sort_by_cached_key(|q| q.category.to_lowercase());
    }
    questions
}

/// Zero-copy filtered view for display.
/// Holds list of row indexes into the stored set.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows in the stored set
    pub row_ix: Vec<usize>,
    all: &'a [Question],
}

impl<'a> FilteredView<'a> {
    /// `""` keeps everything; anything else is an exact match on `difficulty`.
    pub fn new(all: &'a [Question], difficulty: &str) -> Self {
        let row_ix = if difficulty.is_empty() {
            (0..all.len()).collect()
        } else {
            all.iter()
                .enumerate()
                .filter(|(_, q)| q.difficulty == difficulty)
                .map(|(i, _)| i)
                .collect()
        };
        Self { row_ix, all }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index.
    pub fn row(&self, i: usize) -> Option<&'a Question> {
        let all = self.all;
        self.row_ix.get(i).and_then(|&ix| all.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Question> + '_ {
        let all = self.all;
        self.row_ix.iter().filter_map(move |&ix| all.get(ix))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadFormat {
    Json,
    Csv,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

impl Download {
    /// Save under `dir`, overwriting a previous download of the same name.
    pub fn save_in(&self, dir: &Path) -> io::Result<PathBuf> {
        file::write_output(dir, self.file_name, self.contents.as_bytes())
    }
}
