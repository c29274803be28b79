mod app;
mod cli;
mod ui;

use anyhow::{anyhow, Context};
use app::LaunchDashApp;
use clap::Parser;
use cli::Cli;
use eframe::egui;
use launch_dash::data::loader::load_file;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    // A missing or malformed table aborts startup.
    let dataset = load_file(&cli.data)
        .with_context(|| format!("loading launch data from {}", cli.data.display()))?;
    log::info!(
        "Loaded {} launches from {} sites, payload {}..{} kg",
        dataset.len(),
        dataset.sites().len(),
        dataset.payload_min(),
        dataset.payload_max()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let debug = cli.debug;
    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset, debug)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
