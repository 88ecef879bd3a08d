mod app;
mod data;
mod intake;
mod upload;
mod utils;

use eframe::CreationContext;
use tracing_subscriber::EnvFilter;

use crate::app::PramaanApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pramaan=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PRAMAAN Legal Aid Assistant",
        options,
        Box::new(|cc: &CreationContext| Box::new(PramaanApp::new(cc))),
    )
}
