//! `foresight-core`: data model shared by the projection engine and its boundaries.
//!
//! This crate contains **pure** types (no I/O, no predictors).

pub mod error;
pub mod horizon;
pub mod id;
pub mod profile;
pub mod record;
pub mod value_object;

pub use error::{TwinError, TwinResult};
pub use horizon::ProjectionHorizon;
pub use id::ProjectionId;
pub use profile::{DEFAULT_AVG_SLEEP_HOURS, UserProfile, require_text};
pub use record::{CATEGORICAL_COLUMNS, FEATURE_COLUMNS, FeatureValue, ProjectedFeatureRecord};
pub use value_object::ValueObject;
