//! Serialized predictor artifacts.
//!
//! An artifact is a JSON envelope around a fitted model:
//!
//! ```json
//! {
//!   "kind": "regression",
//!   "name": "salary_predictor",
//!   "version": "2024-11-02",
//!   "trained_at": "2024-11-02T09:30:00Z",
//!   "feature_columns": ["education", "location", "title", "industry", "age", "tenure_months", "remote_flag"],
//!   "model": { ... }
//! }
//! ```
//!
//! Loading checks the kind and that `feature_columns` matches the engine's
//! column order exactly before the model is ever used for inference.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use foresight_core::FEATURE_COLUMNS;

use crate::classifier::SoftmaxClassifierModel;
use crate::linear::LinearRegressionModel;
use crate::result::ArtifactError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Regression,
    Classification,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regression => "regression",
            Self::Classification => "classification",
        }
    }
}

/// Descriptive part of an artifact, kept after loading for status reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub kind: ArtifactKind,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

/// On-disk envelope. `model` stays untyped until the kind has been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(flatten)]
    pub metadata: ArtifactMetadata,
    pub feature_columns: Vec<String>,
    pub model: JsonValue,
}

/// A validated model plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedArtifact<M> {
    pub metadata: ArtifactMetadata,
    pub model: M,
}

impl ModelArtifact {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_slice(&bytes)
    }

    pub fn regression(
        name: impl Into<String>,
        version: impl Into<String>,
        model: &LinearRegressionModel,
    ) -> Result<Self, ArtifactError> {
        Self::wrap(ArtifactKind::Regression, name.into(), version.into(), model)
    }

    pub fn classification(
        name: impl Into<String>,
        version: impl Into<String>,
        model: &SoftmaxClassifierModel,
    ) -> Result<Self, ArtifactError> {
        Self::wrap(ArtifactKind::Classification, name.into(), version.into(), model)
    }

    fn wrap<M: Serialize>(
        kind: ArtifactKind,
        name: String,
        version: String,
        model: &M,
    ) -> Result<Self, ArtifactError> {
        Ok(Self {
            metadata: ArtifactMetadata {
                kind,
                name,
                version,
                trained_at: None,
            },
            feature_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            model: serde_json::to_value(model)?,
        })
    }

    pub fn with_trained_at(mut self, trained_at: DateTime<Utc>) -> Self {
        self.metadata.trained_at = Some(trained_at);
        self
    }

    pub fn into_regression(self) -> Result<LoadedArtifact<LinearRegressionModel>, ArtifactError> {
        self.check(ArtifactKind::Regression)?;
        let model: LinearRegressionModel = serde_json::from_value(self.model)?;
        model.validate()?;
        Ok(LoadedArtifact {
            metadata: self.metadata,
            model,
        })
    }

    pub fn into_classification(self) -> Result<LoadedArtifact<SoftmaxClassifierModel>, ArtifactError> {
        self.check(ArtifactKind::Classification)?;
        let model: SoftmaxClassifierModel = serde_json::from_value(self.model)?;
        model.validate()?;
        Ok(LoadedArtifact {
            metadata: self.metadata,
            model,
        })
    }

    fn check(&self, expected: ArtifactKind) -> Result<(), ArtifactError> {
        if self.metadata.kind != expected {
            return Err(ArtifactError::KindMismatch {
                expected: expected.as_str(),
                found: self.metadata.kind.as_str(),
            });
        }
        if self.feature_columns.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ArtifactError::SchemaMismatch {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: self.feature_columns.clone(),
            });
        }
        Ok(())
    }
}

/// Read and validate a salary regression artifact.
pub fn load_regression(path: impl AsRef<Path>) -> Result<LoadedArtifact<LinearRegressionModel>, ArtifactError> {
    let path = path.as_ref();
    let loaded = ModelArtifact::read(path)?.into_regression()?;
    tracing::info!(
        path = %path.display(),
        name = %loaded.metadata.name,
        version = %loaded.metadata.version,
        "loaded regression artifact"
    );
    Ok(loaded)
}

/// Read and validate a job-title classification artifact.
pub fn load_classification(
    path: impl AsRef<Path>,
) -> Result<LoadedArtifact<SoftmaxClassifierModel>, ArtifactError> {
    let path = path.as_ref();
    let loaded = ModelArtifact::read(path)?.into_classification()?;
    tracing::info!(
        path = %path.display(),
        name = %loaded.metadata.name,
        version = %loaded.metadata.version,
        classes = loaded.model.classes.len(),
        "loaded classification artifact"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::FeatureEncoder;

    fn encoder() -> FeatureEncoder {
        FeatureEncoder {
            education: vec!["Bachelors".into()],
            location: vec!["Berlin".into()],
            title: vec!["Engineer".into()],
            industry: vec!["Software".into()],
        }
    }

    fn regression() -> LinearRegressionModel {
        LinearRegressionModel {
            encoder: encoder(),
            coefficients: vec![1.0; 7],
            intercept: 10.0,
        }
    }

    fn classification() -> SoftmaxClassifierModel {
        SoftmaxClassifierModel {
            encoder: encoder(),
            classes: vec!["Lead".into(), "Manager".into()],
            weights: vec![vec![0.0; 7], vec![0.1; 7]],
            biases: vec![0.0, 0.0],
        }
    }

    #[test]
    fn regression_envelope_loads_back() {
        let trained_at = "2024-11-02T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let artifact = ModelArtifact::regression("salary_predictor", "1", &regression())
            .unwrap()
            .with_trained_at(trained_at);
        let bytes = serde_json::to_vec(&artifact).unwrap();

        let loaded = ModelArtifact::from_slice(&bytes).unwrap().into_regression().unwrap();
        assert_eq!(loaded.model, regression());
        assert_eq!(loaded.metadata.name, "salary_predictor");
        assert_eq!(loaded.metadata.trained_at, Some(trained_at));
    }

    #[test]
    fn envelope_uses_flat_kind_field() {
        let artifact = ModelArtifact::classification("job_classifier", "1", &classification()).unwrap();
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["kind"], "classification");
        assert_eq!(json["feature_columns"][4], "age");
        assert!(json.get("trained_at").is_none());
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let artifact = ModelArtifact::classification("job_classifier", "1", &classification()).unwrap();
        let err = artifact.into_regression().unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::KindMismatch {
                expected: "regression",
                found: "classification"
            }
        ));
    }

    #[test]
    fn reordered_columns_are_rejected() {
        let mut artifact = ModelArtifact::regression("salary_predictor", "1", &regression()).unwrap();
        artifact.feature_columns.swap(4, 5);
        assert!(matches!(
            artifact.into_regression(),
            Err(ArtifactError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn inconsistent_model_is_rejected() {
        let mut model = classification();
        model.weights.pop();
        let artifact = ModelArtifact::classification("job_classifier", "1", &model).unwrap();
        assert!(matches!(artifact.into_classification(), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn artifacts_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("foresight-ai-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("job_classifier_model.json");
        let artifact = ModelArtifact::classification("job_classifier", "7", &classification()).unwrap();
        std::fs::write(&path, serde_json::to_vec_pretty(&artifact).unwrap()).unwrap();

        let loaded = load_classification(&path).unwrap();
        assert_eq!(loaded.metadata.version, "7");
        assert_eq!(loaded.model.classes, vec!["Lead".to_string(), "Manager".to_string()]);

        assert!(matches!(
            load_regression(dir.join("missing.json")),
            Err(ArtifactError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
