use serde::{Deserialize, Serialize};

use foresight_core::ProjectedFeatureRecord;

use crate::encoder::FeatureEncoder;
use crate::predictor::ClassificationPredictor;
use crate::result::{ArtifactError, PredictorError};

/// Multinomial logistic (softmax) classifier over next job titles.
///
/// `weights[k]` and `biases[k]` score `classes[k]`; probabilities are the
/// softmax of those scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxClassifierModel {
    pub encoder: FeatureEncoder,
    pub classes: Vec<String>,
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

impl SoftmaxClassifierModel {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        self.encoder.validate()?;

        if self.classes.is_empty() {
            return Err(ArtifactError::invalid("classifier has no classes"));
        }
        if self.weights.len() != self.classes.len() || self.biases.len() != self.classes.len() {
            return Err(ArtifactError::invalid(format!(
                "classifier has {} classes but {} weight rows and {} biases",
                self.classes.len(),
                self.weights.len(),
                self.biases.len()
            )));
        }

        let width = self.encoder.width();
        if let Some((k, row)) = self.weights.iter().enumerate().find(|(_, w)| w.len() != width) {
            return Err(ArtifactError::invalid(format!(
                "weight row for class {:?} has {} entries, expected {width}",
                self.classes[k],
                row.len()
            )));
        }

        let finite = self.biases.iter().chain(self.weights.iter().flatten()).all(|x| x.is_finite());
        if !finite {
            return Err(ArtifactError::invalid("classifier parameters must be finite"));
        }
        Ok(())
    }
}

impl ClassificationPredictor for SoftmaxClassifierModel {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, record: &ProjectedFeatureRecord) -> Result<Vec<f64>, PredictorError> {
        let row = self.encoder.encode(record);

        let mut logits = Vec::with_capacity(self.weights.len());
        for (w, b) in self.weights.iter().zip(&self.biases) {
            if w.len() != row.len() {
                return Err(PredictorError::schema(format!(
                    "expected {} features, encoded {}",
                    w.len(),
                    row.len()
                )));
            }
            logits.push(b + w.iter().zip(&row).map(|(w, x)| w * x).sum::<f64>());
        }

        softmax(&logits)
    }
}

/// Numerically stable softmax (max-subtracted).
fn softmax(logits: &[f64]) -> Result<Vec<f64>, PredictorError> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Err(PredictorError::invalid_output("non-finite class scores"));
    }

    let exps: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    Ok(exps.into_iter().map(|e| e / total).collect())
}
