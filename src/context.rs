use crate::{
    config::ArtifactPaths,
    error::Result,
    features::FeatureVector,
    handler::PredictionResult,
    model::{self, Model, Sequential},
    scaler::{Scaler, StandardScaler},
};

/// The scaler and model, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PredictorContext<S = StandardScaler, M = Sequential> {
    scaler: S,
    model: M,
}

impl<S: Scaler, M: Model> PredictorContext<S, M> {
    pub fn new(scaler: S, model: M) -> Self {
        Self { scaler, model }
    }

    pub fn scaler(&self) -> &S {
        &self.scaler
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Scales the vector and runs it through the model.
    ///
    /// # Arguments
    /// * `x` - A validated, unscaled feature vector.
    ///
    /// # Returns
    /// The probability and its classification.
    pub fn predict(&self, x: &FeatureVector) -> PredictionResult {
        let scaled = self.scaler.transform(x);
        let probability = self.model.infer(&scaled);
        PredictionResult::from_probability(probability)
    }
}

impl PredictorContext {
    /// Loads the scaler and the model from disk.
    ///
    /// # Errors
    /// Returns an [`ArtifactErr`](crate::ArtifactErr) if either artifact can't be read or is
    /// inconsistent with the feature table.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let scaler = StandardScaler::load(&paths.scaler)?;
        let model = model::load_sequential(&paths.model)?;

        log::info!(
            "artifacts loaded: model {}, scaler {}",
            paths.model.display(),
            paths.scaler.display()
        );

        Ok(Self::new(scaler, model))
    }
}
