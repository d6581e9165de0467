use anyhow::{Context, Result};
use heart_failure_predictor::{ArtifactPaths, PredictorContext};

mod app;
mod logging;
mod state;
mod ui;

fn main() -> Result<()> {
    let log_path = logging::init()?;
    log::info!("logging to {}", log_path.display());

    let paths = ArtifactPaths::from_env().context("cannot locate the artifacts directory")?;

    // Loaded before the terminal enters raw mode.
    let context = PredictorContext::load(&paths).with_context(|| {
        format!(
            "cannot load the predictor (model: {}, scaler: {})",
            paths.model.display(),
            paths.scaler.display()
        )
    })?;

    app::run::run(&context)
}
