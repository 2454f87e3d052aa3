use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FvViewerApp {
    pub state: AppState,
}

impl FvViewerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for FvViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: counts and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: source table ----
        let clicked = egui::SidePanel::left("sorted_table")
            .default_width(ctx.screen_rect().width() * 0.5)
            .resizable(true)
            .show(ctx, |ui| panels::source_table(ui, &self.state))
            .inner;

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::velocity_plot(ui, &self.state);
        });

        panels::snapshot_window(ctx, &mut self.state);

        // One update per frame; the next frame draws the result.
        if !clicked.is_empty() {
            self.state.handle_clicks(&clicked);
            ctx.request_repaint();
        }
    }
}
