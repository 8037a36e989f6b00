// src/gui/components/filter_bar.rs
//
// Difficulty selector. Reads the current filter from the store and, on
// change, dispatches SelectDifficulty; it never edits state directly.

use eframe::egui;

use crate::{
    gui::app::App,
    presenter::{Action, DIFFICULTY_CHOICES},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.view();
    let current = s!(view.difficulty());
    let shown = view.visible().len();
    let total = view.questions().len();

    let mut picked = current.clone();
    let label = DIFFICULTY_CHOICES
        .iter()
        .find(|(value, _)| *value == current)
        .map(|(_, label)| *label)
        .unwrap_or(current.as_str());

    ui.horizontal(|ui| {
        ui.label("Difficulty:");
        egui::ComboBox::from_id_salt("difficulty_filter")
            .selected_text(label)
            .show_ui(ui, |ui| {
                for (value, text) in DIFFICULTY_CHOICES {
                    ui.selectable_value(&mut picked, s!(value), text);
                }
            });
        ui.label(format!("Showing {shown} of {total}"));
    });

    if picked != current {
        logf!("UI: Difficulty filter {:?} → {:?}", current, picked);
        app.store.dispatch(Action::SelectDifficulty(picked));
    }
}
