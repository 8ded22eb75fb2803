use thiserror::Error;

use foresight_core::TwinError;

/// Failure raised by a predictor artifact while scoring a record.
///
/// Never fatal to a projection: the engine turns it into an "unavailable"
/// value for that predictor only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictorError {
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("invalid predictor output: {0}")]
    InvalidOutput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),

    #[error("predictor unavailable: {0}")]
    Unavailable(String),
}

impl PredictorError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    pub fn invalid_output(msg: impl Into<String>) -> Self {
        Self::InvalidOutput(msg.into())
    }
}

impl From<PredictorError> for TwinError {
    fn from(value: PredictorError) -> Self {
        TwinError::predictor(value.to_string())
    }
}

/// Failure while loading a predictor artifact from storage.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("artifact kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("artifact feature columns {found:?} do not match the expected schema {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("invalid artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
