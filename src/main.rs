mod app;

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;
use webcrippling::{AppConfig, IllustrationSlot, Predictor};

use app::PredictionApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("webcrippling=info".parse()?))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Both models must load before any window exists; there is no fallback.
    let predictor = Predictor::load(&config.models).context("Failed to load prediction models")?;

    // A missing picture only degrades the form.
    let illustration = IllustrationSlot::load(&config.illustration);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    info!(title = %config.window.title, "Opening prediction window");
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| Ok(Box::new(PredictionApp::new(cc, predictor, illustration)))),
    )
    .map_err(|e| anyhow!("Window event loop failed: {e}"))?;

    Ok(())
}
