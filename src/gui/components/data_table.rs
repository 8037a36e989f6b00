// src/gui/components/data_table.rs
//
// Draws the live table from the store's filtered view.
// Purely a view; never dispatches.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{csv::TITLE_HEADERS, gui::app::App, presenter::LoadPhase};

// Question, Category, Difficulty, Correct Answer; Incorrect Answers takes the rest.
const WIDTHS: [f32; 4] = [360.0, 180.0, 80.0, 160.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let state = app.view();

    match state.phase() {
        LoadPhase::Loading => {
            ui.label("Loading questions...");
        }
        LoadPhase::Failed(msg) => {
            ui.label(RichText::new(format!("Error fetching questions: {msg}")).color(egui::Color32::from_rgb(220, 60, 60)));
        }
        LoadPhase::Idle | LoadPhase::Ready => {}
    }

    let view = state.visible();
    let avail_h = ui.available_height();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h);
    for w in WIDTHS {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }
    table = table.column(Column::remainder().at_least(80.0).clip(true));

    table
        .header(24.0, |mut header| {
            for title in TITLE_HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(q) = view.row(row.index()) else { return };
                for cell in q.cells() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell).on_hover_text(cell);
                    });
                }
            });
        });
}
