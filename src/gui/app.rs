// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    presenter::{Action, LoadPhase, PresenterState, Store},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Trivia Questions",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // options from the command line; read-only after start
    pub state: AppState,

    // single source of truth for the table (UI thread only)
    pub store: Store,

    // status/progress (fetch worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // pending result of the mount-time fetch
    pub(crate) inbox: Option<Receiver<Action>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let order = state.options.view.order;
        logf!(
            "Init: amount={}, order={:?}, downloads → {}",
            state.options.fetch.count,
            order,
            state.options.view.download_dir.display()
        );

        Self {
            state,
            store: Store::new(PresenterState::new(order)),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            inbox: None,
        }
    }

    #[inline]
    pub fn view(&self) -> &PresenterState { self.store.state() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One fetch per mount.
        if *self.view().phase() == LoadPhase::Idle {
            actions::fetch(self, ctx);
        }
        actions::poll_fetch(self);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Trivia Questions");

            components::filter_bar::draw(ui, self);

            ui.separator();

            components::action_buttons::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
