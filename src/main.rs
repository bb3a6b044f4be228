// Countdown Widget Application
// Main entry point

use countdown_widget::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use countdown_widget::services::settings::SettingsService;
use countdown_widget::ui_egui::CountdownApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Countdown Widget");

    let config_path = SettingsService::resolve_config_path();
    let settings = SettingsService::load_or_default(&config_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Countdown")
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Countdown Widget",
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, settings)))),
    )
}
