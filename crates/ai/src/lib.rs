//! `foresight-ai`
//!
//! **Responsibility:** the predictor boundary of the projection engine.
//!
//! - Predictor contracts (`RegressionPredictor`, `ClassificationPredictor`).
//! - Inference-only model implementations and the artifact format they load from.
//! - It must not know about projections, horizons, or health; it scores records.

pub mod artifact;
pub mod classifier;
pub mod encoder;
pub mod linear;
pub mod predictor;
pub mod result;

pub use artifact::{
    ArtifactKind, ArtifactMetadata, LoadedArtifact, ModelArtifact, load_classification, load_regression,
};
pub use classifier::SoftmaxClassifierModel;
pub use encoder::FeatureEncoder;
pub use linear::LinearRegressionModel;
pub use predictor::{ClassificationPredictor, RegressionPredictor, UnavailablePredictor};
pub use result::{ArtifactError, PredictorError};
