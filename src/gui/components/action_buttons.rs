// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{gui::{actions, app::App}, presenter::DownloadFormat};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Print to Console").clicked() {
            actions::print(app);
        }

        if ui.button("Download JSON").clicked() {
            actions::download(app, DownloadFormat::Json);
        }

        if ui.button("Download CSV").clicked() {
            actions::download(app, DownloadFormat::Csv);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
