use serde::{Deserialize, Serialize};

use foresight_core::ProjectedFeatureRecord;

use crate::encoder::FeatureEncoder;
use crate::predictor::RegressionPredictor;
use crate::result::{ArtifactError, PredictorError};

/// Ordinary least-squares salary model over the encoded feature row.
///
/// `estimate = intercept + Σ coefficients[i] * row[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionModel {
    pub encoder: FeatureEncoder,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressionModel {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        self.encoder.validate()?;
        if self.coefficients.len() != self.encoder.width() {
            return Err(ArtifactError::invalid(format!(
                "regression has {} coefficients but the encoder produces {} features",
                self.coefficients.len(),
                self.encoder.width()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::invalid("regression parameters must be finite"));
        }
        Ok(())
    }
}

impl RegressionPredictor for LinearRegressionModel {
    fn predict(&self, record: &ProjectedFeatureRecord) -> Result<f64, PredictorError> {
        let row = self.encoder.encode(record);
        if row.len() != self.coefficients.len() {
            return Err(PredictorError::schema(format!(
                "expected {} features, encoded {}",
                self.coefficients.len(),
                row.len()
            )));
        }

        let estimate = self.intercept
            + self
                .coefficients
                .iter()
                .zip(&row)
                .map(|(c, x)| c * x)
                .sum::<f64>();

        if !estimate.is_finite() {
            return Err(PredictorError::invalid_output(format!(
                "non-finite salary estimate {estimate}"
            )));
        }
        Ok(estimate)
    }
}
