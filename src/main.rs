use std::process::ExitCode;

use eframe::egui;
use water_potability::app::PotabilityApp;
use water_potability::config::AppConfig;
use water_potability::{predict, theme};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    log::debug!("{config:?}");

    // Without both artifacts there is nothing to serve.
    let (predictor, source) = match predict::load_predictor(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to load model artifacts: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let summary = format!(
        "Model: {}  ·  {}",
        config.model_path.display(),
        source.describe()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Water Quality Analysis",
        options,
        Box::new(|cc| {
            theme::install(&cc.egui_ctx);
            Ok(Box::new(PotabilityApp::new(predictor, summary)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
