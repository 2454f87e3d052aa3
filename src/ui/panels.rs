use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::SourceId;
use crate::state::AppState;
use crate::view::table::REMOVE_LABEL;

// ---------------------------------------------------------------------------
// Left side panel – source table
// ---------------------------------------------------------------------------

/// Render the source table. Returns the sources whose button was clicked this
/// frame; the caller dispatches them once drawing is done.
pub fn source_table(ui: &mut Ui, state: &AppState) -> Vec<SourceId> {
    let mut clicked = Vec::new();

    ui.heading("Files");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("No measurement files loaded.");
        return clicked;
    }

    let header = state.table.header();
    let row_height = egui::TextStyle::Button.resolve(ui.style()).size + 8.0;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto())
        .header(20.0, |mut row| {
            for title in header {
                row.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for entry in &state.table.rows {
                body.row(row_height, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(RichText::new(entry.source.as_str()).strong().color(entry.color));
                    });
                    row.col(|ui: &mut Ui| {
                        if ui.button(REMOVE_LABEL).clicked() {
                            log::debug!("Remove clicked for {}", entry.source);
                            clicked.push(entry.source.clone());
                        }
                    });
                });
            }
        });

    clicked
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} records from {} files, {} visible",
            state.dataset.len(),
            state.dataset.sources().len(),
            state.dataset.visible_len()
        ));

        ui.separator();

        ui.label(format!("{} frequencies", state.means.len()));

        if state.debug {
            ui.separator();
            if ui
                .selectable_label(state.show_snapshot, "Dataset snapshot")
                .clicked()
            {
                state.show_snapshot = !state.show_snapshot;
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Debug window – JSON interchange snapshot
// ---------------------------------------------------------------------------

pub fn snapshot_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.debug {
        return;
    }
    let json = state.snapshot_json();
    egui::Window::new("Dataset snapshot")
        .open(&mut state.show_snapshot)
        .default_size([360.0, 480.0])
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.monospace(json);
                });
        });
}
