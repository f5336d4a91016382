use visiondesk::config::AppConfig;
use visiondesk::constants::window;
use visiondesk::VisionDeskApp;

fn main() -> eframe::Result<()> {
    let config = AppConfig::load();

    env_logger::Builder::from_default_env()
        .filter_level(config.preferences.log_level.to_level_filter())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("VisionDesk")
            .with_inner_size(window::DEFAULT_SIZE)
            .with_min_inner_size(window::MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "VisionDesk",
        options,
        Box::new(move |cc| Ok(Box::new(VisionDeskApp::new(cc, config)?))),
    )
}
