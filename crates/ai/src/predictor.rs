use foresight_core::ProjectedFeatureRecord;

use crate::result::PredictorError;

/// A trained model that maps a feature record to a scalar estimate.
///
/// Implementations are loaded once and shared read-only across concurrent
/// requests, so `predict` takes `&self` and must not mutate model state.
pub trait RegressionPredictor: Send + Sync + 'static {
    fn predict(&self, record: &ProjectedFeatureRecord) -> Result<f64, PredictorError>;
}

/// A trained model that maps a feature record to a distribution over labels.
pub trait ClassificationPredictor: Send + Sync + 'static {
    /// Ordered label set; index `i` corresponds to `predict_proba(..)[i]`.
    fn classes(&self) -> &[String];

    /// Probability of each label in [`classes`](Self::classes) order.
    fn predict_proba(&self, record: &ProjectedFeatureRecord) -> Result<Vec<f64>, PredictorError>;
}

/// Stand-in for an artifact that could not be loaded.
///
/// Every call fails, which the engine reports as "unavailable" for that
/// predictor while the rest of the projection still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailablePredictor {
    reason: String,
}

impl UnavailablePredictor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl RegressionPredictor for UnavailablePredictor {
    fn predict(&self, _record: &ProjectedFeatureRecord) -> Result<f64, PredictorError> {
        Err(PredictorError::Unavailable(self.reason.clone()))
    }
}

impl ClassificationPredictor for UnavailablePredictor {
    fn classes(&self) -> &[String] {
        &[]
    }

    fn predict_proba(&self, _record: &ProjectedFeatureRecord) -> Result<Vec<f64>, PredictorError> {
        Err(PredictorError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_predictor_always_fails_with_reason() {
        let p = UnavailablePredictor::new("models/salary_predictor_model.json not found");
        let record = ProjectedFeatureRecord::new("BSc", "Oslo", "Dev", "IT", 30, 12, true);

        assert_eq!(
            RegressionPredictor::predict(&p, &record),
            Err(PredictorError::Unavailable(
                "models/salary_predictor_model.json not found".to_string()
            ))
        );
        assert!(p.predict_proba(&record).is_err());
        assert!(p.classes().is_empty());
    }
}
