mod app;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::ScanPlotApp;
use eframe::egui;
use state::AppState;

/// Capture read when no path is given on the command line.
const DEFAULT_INPUT: &str = "linear_scanner.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let dataset = match data::loader::load_file(&path) {
        Ok(ds) => ds,
        Err(e) => {
            if let Some(line) = e.line() {
                log::error!("{} is malformed at line {line}", path.display());
            }
            return Err(e).with_context(|| format!("loading {}", path.display()));
        }
    };
    log::info!("Loaded {} readings from {}", dataset.len(), path.display());
    if dataset.is_empty() {
        log::warn!("{} holds no readings, the plot will be empty", path.display());
    }

    let state = AppState::new(&path, dataset);
    let title = format!("Scan Plot – {}", state.source_name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ScanPlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
