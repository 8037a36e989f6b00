// src/progress.rs
/// Lightweight progress reporting for the fetch → normalize → export run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of questions requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage of the run completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetched(usize),
    Normalized(usize),
    Exported,
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to the log; used by the CLI.
pub struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        logf!("Fetching {} questions...", total);
    }
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
    fn stage_done(&mut self, stage: Stage) {
        match stage {
            Stage::Fetched(n) => logd!("Fetched {} raw record(s)", n),
            Stage::Normalized(n) => logd!("Normalized {} question(s)", n),
            Stage::Exported => logd!("Export finished"),
        }
    }
}
