mod app;
mod ui;

use clap::Parser;
use eframe::egui;

use cosmic_orbit::config::LaunchConfig;
use cosmic_orbit::content::APP_TITLE;

use app::CosmicApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("cosmic_orbit=info"),
    )
    .init();

    let config = LaunchConfig::parse().sanitized();
    log::info!(
        "starting at {} (speed {:.2}x, volume {:.2}, {} stars)",
        config.page,
        config.speed,
        config.volume,
        config.stars
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CosmicApp::new(config)))
        }),
    )
}
