use crate::error::ValidationErr;

/// Number of clinical measurements the model takes.
pub const FEATURE_COUNT: usize = 4;

/// A numeric vector with one entry per declared feature, in declaration order.
pub type FeatureVector = [f32; FEATURE_COUNT];

/// The numeric kind a field must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Real,
    Integer,
}

/// A single declared input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub label: &'static str,
    pub kind: NumericKind,
}

impl Feature {
    const fn new(label: &'static str, kind: NumericKind) -> Self {
        Self { label, kind }
    }

    /// Parses an already trimmed, non-empty value as this feature's numeric kind.
    ///
    /// # Returns
    /// The parsed value or `None` if it isn't a valid number of the declared kind.
    pub fn parse(&self, value: &str) -> Option<f32> {
        match self.kind {
            NumericKind::Real => value.parse::<f32>().ok().filter(|v| v.is_finite()),
            NumericKind::Integer => value.parse::<i64>().ok().map(|v| v as f32),
        }
    }
}

/// The feature table. Its order is the column order the scaler and the model were fitted on.
pub const FEATURES: [Feature; FEATURE_COUNT] = [
    Feature::new("Age (years)", NumericKind::Real),
    Feature::new("Ejection fraction (percentage)", NumericKind::Integer),
    Feature::new("Serum creatinine (mg/dL)", NumericKind::Real),
    Feature::new("Serum sodium (mEq/L)", NumericKind::Integer),
];

/// Validates the raw form values and converts them into a numeric vector.
///
/// Fields are scanned in declaration order and the first failure is returned.
///
/// # Arguments
/// * `raw_fields` - One raw string per declared feature, in declaration order.
///
/// # Returns
/// The parsed feature vector or the first field that is missing or invalid.
pub fn validate_and_collect<S: AsRef<str>>(
    raw_fields: &[S; FEATURE_COUNT],
) -> Result<FeatureVector, ValidationErr> {
    let mut vector = [0.0; FEATURE_COUNT];

    for (index, (feature, raw)) in FEATURES.iter().zip(raw_fields).enumerate() {
        let value = raw.as_ref().trim();

        if value.is_empty() {
            return Err(ValidationErr::MissingField {
                index,
                label: feature.label,
            });
        }

        vector[index] = feature.parse(value).ok_or_else(|| ValidationErr::InvalidValue {
            index,
            label: feature.label,
            raw: value.to_string(),
        })?;
    }

    Ok(vector)
}
