use std::fmt::{self, Display};

use crate::{
    context::PredictorContext,
    error::ValidationErr,
    features::{self, FEATURE_COUNT},
    model::Model,
    scaler::Scaler,
};

/// Probabilities strictly above this value classify as positive.
pub const CLASSIFICATION_THRESHOLD: f32 = 0.5;

/// The outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub probability: f32,
    pub classification: bool,
}

impl PredictionResult {
    pub fn from_probability(probability: f32) -> Self {
        Self {
            probability,
            classification: probability > CLASSIFICATION_THRESHOLD,
        }
    }

    /// Returns the classification as the `0`/`1` class label.
    pub fn risk_class(&self) -> u8 {
        u8::from(self.classification)
    }
}

impl Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Risk Classification: {}", self.risk_class())?;
        write!(f, "Death Probability: {:.2}%", self.probability * 100.0)
    }
}

/// Where the handler is in its per-request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Failed,
    Predicted,
}

/// Holds the form's captured input and runs the validate, scale and infer chain over it.
///
/// Only one request exists at a time. Nothing from a finished request is carried into the
/// next one besides the raw field text the user typed.
pub struct RequestHandler<'ctx, S, M> {
    context: &'ctx PredictorContext<S, M>,
    fields: [String; FEATURE_COUNT],
    phase: Phase,
}

impl<'ctx, S: Scaler, M: Model> RequestHandler<'ctx, S, M> {
    /// Creates a new `RequestHandler` with every field empty.
    pub fn new(context: &'ctx PredictorContext<S, M>) -> Self {
        Self {
            context,
            fields: Default::default(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fields(&self) -> &[String; FEATURE_COUNT] {
        &self.fields
    }

    /// Returns the raw text of the `index`-th field.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Mutable access to the `index`-th field's raw text, `None` if out of range.
    ///
    /// Editing a field ends any finished request.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        let field = self.fields.get_mut(index)?;
        self.phase = Phase::Idle;
        Some(field)
    }

    /// Replaces the `index`-th field's raw text. Out of range indexes are ignored.
    pub fn set_field(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.field_mut(index) {
            *field = value.into();
        }
    }

    /// Validates the captured fields without touching the scaler or the model.
    pub fn validate_and_collect(&self) -> Result<[f32; FEATURE_COUNT], ValidationErr> {
        features::validate_and_collect(&self.fields)
    }

    /// Runs a full request over the captured fields.
    ///
    /// # Returns
    /// The prediction or the first field that failed validation, in which case neither
    /// collaborator was invoked.
    pub fn submit(&mut self) -> Result<PredictionResult, ValidationErr> {
        self.phase = Phase::Validating;

        let vector = match self.validate_and_collect() {
            Ok(vector) => vector,
            Err(e) => {
                log::warn!("rejected input: {e}");
                self.phase = Phase::Failed;
                return Err(e);
            }
        };

        let result = self.context.predict(&vector);
        log::info!(
            "prediction: class={} probability={:.4}",
            result.risk_class(),
            result.probability
        );

        self.phase = Phase::Predicted;
        Ok(result)
    }

    /// Marks the outcome of the last request as seen, returning to idle.
    pub fn acknowledge(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Clears every captured field for a fresh request.
    pub fn clear(&mut self) {
        self.fields.iter_mut().for_each(String::clear);
        self.phase = Phase::Idle;
    }
}
