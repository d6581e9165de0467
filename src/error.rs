use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used when loading the predictor's artifacts.
pub type Result<T> = std::result::Result<T, ArtifactErr>;

/// Why a form submission was rejected before reaching the scaler or the model.
///
/// Both variants carry the index of the offending field in the feature table so the
/// presentation layer can flag exactly that input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErr {
    MissingField {
        index: usize,
        label: &'static str,
    },
    InvalidValue {
        index: usize,
        label: &'static str,
        raw: String,
    },
}

impl ValidationErr {
    /// Returns the position of the failing field in the feature table.
    pub fn index(&self) -> usize {
        match self {
            ValidationErr::MissingField { index, .. } | ValidationErr::InvalidValue { index, .. } => {
                *index
            }
        }
    }

    /// Returns the label of the failing field.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationErr::MissingField { label, .. } | ValidationErr::InvalidValue { label, .. } => {
                label
            }
        }
    }
}

impl Display for ValidationErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErr::MissingField { label, .. } => write!(f, "Please fill in: {label}"),
            ValidationErr::InvalidValue { label, raw, .. } => {
                write!(f, "Invalid value for {label}: '{raw}'")
            }
        }
    }
}

impl Error for ValidationErr {}

/// Failures while loading the scaler or the model at startup.
#[derive(Debug)]
pub enum ArtifactErr {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Tensors {
        path: PathBuf,
        source: safetensors::SafeTensorError,
    },
    SizeMismatch {
        what: String,
        got: usize,
        expected: usize,
    },
    InvalidScale {
        index: usize,
        value: f32,
    },
    UnsupportedDtype {
        tensor: String,
        dtype: String,
    },
    InvalidArchitecture(String),
}

impl Display for ArtifactErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactErr::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            ArtifactErr::Json { path, source } => {
                write!(f, "invalid JSON in '{}': {source}", path.display())
            }
            ArtifactErr::Tensors { path, source } => {
                write!(f, "invalid safetensors file '{}': {source}", path.display())
            }
            ArtifactErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            ArtifactErr::InvalidScale { index, value } => {
                write!(f, "scale entry {index} must be finite and non-zero, got {value}")
            }
            ArtifactErr::UnsupportedDtype { tensor, dtype } => {
                write!(f, "tensor '{tensor}' has dtype {dtype}, expected F32")
            }
            ArtifactErr::InvalidArchitecture(msg) => write!(f, "invalid architecture: {msg}"),
        }
    }
}

impl Error for ArtifactErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactErr::Io { source, .. } => Some(source),
            ArtifactErr::Json { source, .. } => Some(source),
            ArtifactErr::Tensors { source, .. } => Some(source),
            _ => None,
        }
    }
}
