use pattern_lock::gui::PatternLockDemo;
use pattern_lock::logging;
use pattern_lock::settings::{Settings, SETTINGS_FILE};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );
    tracing::info!(
        dot_size = settings.dot_size,
        arity = settings.grid_arity,
        "starting pattern lock demo"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 520.0])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pattern Lock",
        native_options,
        Box::new(move |_cc| Box::new(PatternLockDemo::new(settings, SETTINGS_FILE.into()))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run pattern lock demo: {e}"))
}
