use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;
use crate::view::chart::{X_LABEL, Y_LABEL};

// ---------------------------------------------------------------------------
// Mean velocity scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the mean-velocity-by-frequency scatter. An empty series still draws
/// the axes.
pub fn velocity_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;

    Plot::new("averaged_by_freq")
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .label_formatter(|_name, value| {
            format!("{X_LABEL}: {:.4}\n{Y_LABEL}: {:.4}", value.x, value.y)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if chart.is_empty() {
                return;
            }
            let points: PlotPoints = chart.points.iter().copied().collect();
            let total: usize = chart.counts.iter().sum();
            plot_ui.points(
                Points::new(points)
                    .name(format!("mean velocity ({total} records)"))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0)
                    .color(Color32::from_rgb(99, 110, 250)),
            );
        });
}
