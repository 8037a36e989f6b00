// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

/// Mirrors fetch progress into the status line shown under the buttons.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Fetching {} questions...", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn stage_done(&mut self, stage: Stage) {
        if let Stage::Normalized(n) = stage {
            self.set_status(format!("Loaded {} of {} question(s)", n, self.total));
        }
    }
}
