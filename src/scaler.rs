use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{ArtifactErr, Result},
    features::{FeatureVector, FEATURE_COUNT},
};

/// A pre-fitted transform applied to the raw feature vector before inference.
pub trait Scaler {
    /// Maps a raw feature vector into the space the model was trained on.
    fn transform(&self, x: &FeatureVector) -> FeatureVector;
}

#[derive(Deserialize)]
struct ScalerArtifact {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

/// Standardizes each feature by removing its mean and dividing by its scale.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: FeatureVector,
    scale: FeatureVector,
}

impl StandardScaler {
    /// Creates a new `StandardScaler`.
    ///
    /// # Arguments
    /// * `mean` - The per-feature mean.
    /// * `scale` - The per-feature scale, every entry must be finite and non-zero.
    ///
    /// # Returns
    /// A new `StandardScaler` instance or an error if a scale entry is unusable.
    pub fn new(mean: FeatureVector, scale: FeatureVector) -> Result<Self> {
        if let Some((index, &value)) = scale
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s == 0.0)
        {
            return Err(ArtifactErr::InvalidScale { index, value });
        }

        Ok(Self { mean, scale })
    }

    /// Loads the scaler from a JSON artifact of the form `{"mean": [..], "scale": [..]}`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ArtifactErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ScalerArtifact =
            serde_json::from_str(&content).map_err(|source| ArtifactErr::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let mean = to_feature_vector("scaler mean", artifact.mean)?;
        let scale = to_feature_vector("scaler scale", artifact.scale)?;

        log::debug!("loaded scaler from {}", path.display());
        Self::new(mean, scale)
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, x: &FeatureVector) -> FeatureVector {
        let mut z = *x;
        for ((v, mean), scale) in z.iter_mut().zip(&self.mean).zip(&self.scale) {
            *v = (*v - mean) / scale;
        }

        z
    }
}

fn to_feature_vector(what: &str, values: Vec<f32>) -> Result<FeatureVector> {
    let got = values.len();
    values.try_into().map_err(|_| ArtifactErr::SizeMismatch {
        what: what.to_string(),
        got,
        expected: FEATURE_COUNT,
    })
}
