//! Request-level error model.

use thiserror::Error;

/// Result type used across the projection layer.
pub type TwinResult<T> = Result<T, TwinError>;

/// Error taxonomy of a twin projection.
///
/// Only `MissingAttribute` aborts a projection. Predictor failures are
/// recovered next to the predictor call and surface as "unavailable" values
/// inside an otherwise complete result; horizon validation happens at the
/// transport boundary before the engine is ever invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TwinError {
    /// A required profile attribute was absent.
    #[error("missing required attribute: {0}")]
    MissingAttribute(&'static str),

    /// The requested horizon is not one of the supported month counts.
    #[error("unsupported projection horizon: {0} months (expected 6, 24 or 60)")]
    UnsupportedHorizon(i64),

    /// A predictor artifact call failed.
    #[error("predictor invocation failed: {0}")]
    PredictorInvocation(String),
}

impl TwinError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingAttribute(field)
    }

    pub fn predictor(msg: impl Into<String>) -> Self {
        Self::PredictorInvocation(msg.into())
    }

    /// Whether this error aborts the whole request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingAttribute(_) | Self::UnsupportedHorizon(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_input_errors_are_fatal() {
        assert!(TwinError::missing("industry").is_fatal());
        assert!(TwinError::UnsupportedHorizon(12).is_fatal());
        assert!(!TwinError::predictor("schema mismatch").is_fatal());
    }

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            TwinError::missing("industry").to_string(),
            "missing required attribute: industry"
        );
    }
}
