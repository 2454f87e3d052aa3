use anyhow::Context;
use clap::Parser;
use eframe::egui;

use fv_viewer::app::FvViewerApp;
use fv_viewer::config::{Cli, Config};
use fv_viewer::data::loader;
use fv_viewer::state::AppState;

fn main() -> anyhow::Result<()> {
    let config: Config = Cli::parse().into();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    )
    .init();

    let dataset = loader::load_dir(&config.dir, &config.extension, config.layout)
        .with_context(|| format!("loading measurements from {}", config.dir.display()))?;
    log::info!(
        "Loaded {} records from {} files",
        dataset.len(),
        dataset.sources().len()
    );

    let state = AppState::new(dataset, config.debug);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FV Viewer – Mean Velocity by Frequency",
        options,
        Box::new(|_cc| Ok(Box::new(FvViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
