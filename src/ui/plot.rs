use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::model::Dataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scan plot (central panel)
// ---------------------------------------------------------------------------

/// Build the single line series: x = angle, y = depth value, file order.
pub fn scan_series(dataset: &Dataset) -> PlotPoints {
    PlotPoints::from(dataset.points())
}

/// Render depth against angle with the plot defaults.
pub fn scan_plot(ui: &mut Ui, state: &AppState) {
    let series = scan_series(&state.dataset);

    Plot::new("scan_plot").show(ui, |plot_ui| {
        plot_ui.line(Line::new(series));
    });
}
