// src/gui/actions/fetch.rs
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    error::TriviaError,
    fetch::OpenTdb,
    gui::{app::App, progress::GuiProgress},
    presenter::Action,
    progress::Progress,
    runner,
};

/// Start the single fetch for this window. The worker only produces an
/// `Action`; the UI thread applies it in `poll_fetch`.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let opts = app.state.options.fetch.clone();
    logf!("Fetch: Begin amount={} url={}", opts.count, opts.api_url);

    app.store.dispatch(Action::FetchStarted);
    app.running = true;

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);

        let res = OpenTdb::new(&opts)
            .map_err(TriviaError::from)
            .and_then(|src| runner::fetch_questions(&src, opts.count, &mut prog));

        let action = match res {
            Ok(questions) => Action::Loaded(questions),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        prog.finish();

        // Receiver gone means the window closed; nothing left to update.
        let _ = tx.send(action);
        ctx.request_repaint();
    });

    app.inbox = Some(rx);
}

/// Apply the worker's result, if it has arrived.
pub fn poll_fetch(app: &mut App) {
    let Some(rx) = app.inbox.as_ref() else { return };

    let action = match rx.try_recv() {
        Ok(action) => action,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Action::FetchFailed(s!("fetch worker stopped unexpectedly")),
    };

    match &action {
        Action::Loaded(qs) => {
            logf!("Fetch: OK rows={}", qs.len());
            app.status(format!("Loaded {} question(s)", qs.len()));
        }
        Action::FetchFailed(msg) => {
            loge!("Fetch: Error: {}", msg);
            app.status(format!("Error: {msg}"));
        }
        _ => {}
    }

    app.store.dispatch(action);
    app.running = false;
    app.inbox = None;
}
