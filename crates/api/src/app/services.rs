//! Service wiring: predictor artifacts loaded once and shared by all requests.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use foresight_ai::{
    ArtifactError, ArtifactMetadata, ClassificationPredictor, RegressionPredictor, UnavailablePredictor,
    load_classification, load_regression,
};
use foresight_projection::TwinProjector;

use crate::config::ApiConfig;

/// Load status of one predictor artifact, reported by `GET /models`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStatus {
    pub role: &'static str,
    pub path: String,
    pub loaded: bool,
    #[serde(flatten)]
    pub metadata: Option<ArtifactMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelStatus {
    fn loaded(role: &'static str, path: &Path, metadata: ArtifactMetadata) -> Self {
        Self {
            role,
            path: path.display().to_string(),
            loaded: true,
            metadata: Some(metadata),
            error: None,
        }
    }

    fn failed(role: &'static str, path: &Path, error: &ArtifactError) -> Self {
        Self {
            role,
            path: path.display().to_string(),
            loaded: false,
            metadata: None,
            error: Some(error.to_string()),
        }
    }
}

pub struct AppServices {
    projector: TwinProjector,
    models: Vec<ModelStatus>,
}

impl AppServices {
    pub fn new(projector: TwinProjector, models: Vec<ModelStatus>) -> Self {
        Self { projector, models }
    }

    pub fn projector(&self) -> &TwinProjector {
        &self.projector
    }

    pub fn models(&self) -> &[ModelStatus] {
        &self.models
    }
}

/// Load both artifacts from the configured model directory.
///
/// An artifact that fails to load is replaced by an [`UnavailablePredictor`]
/// so the service still starts and reports that predictor as unavailable.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let salary_path = config.salary_model_path();
    let (salary, salary_status): (Arc<dyn RegressionPredictor>, ModelStatus) =
        match load_regression(&salary_path) {
            Ok(artifact) => (
                Arc::new(artifact.model),
                ModelStatus::loaded("salary", &salary_path, artifact.metadata),
            ),
            Err(e) => {
                tracing::warn!(path = %salary_path.display(), error = %e, "salary model unavailable");
                (
                    Arc::new(UnavailablePredictor::new(format!("salary model not loaded: {e}"))),
                    ModelStatus::failed("salary", &salary_path, &e),
                )
            }
        };

    let job_path = config.job_model_path();
    let (jobs, job_status): (Arc<dyn ClassificationPredictor>, ModelStatus) =
        match load_classification(&job_path) {
            Ok(artifact) => (
                Arc::new(artifact.model),
                ModelStatus::loaded("job", &job_path, artifact.metadata),
            ),
            Err(e) => {
                tracing::warn!(path = %job_path.display(), error = %e, "job model unavailable");
                (
                    Arc::new(UnavailablePredictor::new(format!("job model not loaded: {e}"))),
                    ModelStatus::failed("job", &job_path, &e),
                )
            }
        };

    let projector = TwinProjector::new(salary, jobs).with_parallel_inference(config.parallel_inference);
    AppServices::new(projector, vec![salary_status, job_status])
}
