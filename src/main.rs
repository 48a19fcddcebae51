mod app;
mod color;
mod config;
mod curve;
mod data;
mod scale;
mod state;
mod ui;

use app::SocialPlotsApp;
use config::ChartConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ChartConfig::from_env();
    log::info!("Reading chart data from {}", config.data_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Social Plots – Likes",
        options,
        Box::new(move |_cc| Ok(Box::new(SocialPlotsApp::new(config)))),
    )
}
