pub mod config;
pub mod context;
pub mod error;
pub mod features;
pub mod handler;
pub mod model;
pub mod scaler;

pub use config::ArtifactPaths;
pub use context::PredictorContext;
pub use error::{ArtifactErr, Result, ValidationErr};
pub use features::{Feature, FeatureVector, NumericKind, FEATURES, FEATURE_COUNT};
pub use handler::{Phase, PredictionResult, RequestHandler};
