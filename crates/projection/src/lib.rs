//! `foresight-projection`: the digital-twin projection engine.
//!
//! Stages, leaves first:
//! - `health`: sleep → multiplicative health factor
//! - `time`: age/tenure advanced by the horizon
//! - `features`: profile + projected time → fixed-schema feature record
//! - `adapter`: predictor calls with per-predictor failure isolation
//! - `top_k`: most probable labels from a class distribution
//! - `engine`: composes the above into a `ProjectionResult`

pub mod adapter;
pub mod engine;
pub mod features;
pub mod health;
pub mod result;
pub mod time;
pub mod top_k;

pub use adapter::{PredictorOutcome, predict_jobs, predict_salary};
pub use engine::{RECOMMENDED_JOBS, TwinProjector};
pub use features::assemble_features;
pub use health::{health_factor, health_increase_percent};
pub use result::{JobRecommendations, ProjectionResult, SalaryEstimate, UNAVAILABLE};
pub use time::{ProjectedTime, project_time};
pub use top_k::top_k;

/// Round to `decimals` places based on the exact binary value of `value`.
///
/// Scaling by a power of ten first is inexact and can flip a decimal tie
/// (`1030.135` sits just below the midpoint), so the rounding goes through
/// the correctly-rounded decimal formatter instead.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
