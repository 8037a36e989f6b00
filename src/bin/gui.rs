// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use clap::Parser;
use eframe::egui::ViewportBuilder;
use trivia_export::{
    gui::{self, GuiArgs},
    log::{self, LogOptions},
    logd,
};

fn main() {
    let state = GuiArgs::parse().into_state();
    let log_opts = LogOptions { to_file: true, ..LogOptions::default() };
    let _guard = log::init(&log_opts);
    let log_path = log_opts.log_path();
    logd!("Log file: {}", log_path.display());

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_title("Trivia Questions"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
