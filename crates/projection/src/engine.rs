//! Twin projection orchestrator.

use std::sync::Arc;

use foresight_ai::{ClassificationPredictor, PredictorError, RegressionPredictor};
use foresight_core::{ProjectedFeatureRecord, ProjectionHorizon, ProjectionId, TwinResult, UserProfile};

use crate::adapter::{PredictorOutcome, predict_jobs, predict_salary};
use crate::features::assemble_features;
use crate::health::health_increase_percent;
use crate::result::{JobRecommendations, ProjectionResult, SalaryEstimate};
use crate::round_to;
use crate::time::project_time;

/// Number of job titles recommended per projection.
pub const RECOMMENDED_JOBS: usize = 3;

/// Projects a user's twin forward by a horizon.
///
/// Holds shared, read-only handles to the two predictor artifacts; cloning a
/// projector is cheap and every clone scores against the same artifacts.
/// The projector itself keeps no per-request state, so one instance serves
/// any number of concurrent requests.
#[derive(Clone)]
pub struct TwinProjector {
    salary: Arc<dyn RegressionPredictor>,
    jobs: Arc<dyn ClassificationPredictor>,
    parallel_inference: bool,
}

impl TwinProjector {
    pub fn new(salary: Arc<dyn RegressionPredictor>, jobs: Arc<dyn ClassificationPredictor>) -> Self {
        Self {
            salary,
            jobs,
            parallel_inference: false,
        }
    }

    /// Run the salary and job predictors on separate threads within a request.
    pub fn with_parallel_inference(mut self, parallel: bool) -> Self {
        self.parallel_inference = parallel;
        self
    }

    pub fn parallel_inference(&self) -> bool {
        self.parallel_inference
    }

    /// Project `profile` forward by `horizon`.
    ///
    /// The only error is a missing profile attribute. Predictor failures are
    /// reported inside the result as unavailable values.
    pub fn project(&self, profile: &UserProfile, horizon: ProjectionHorizon) -> TwinResult<ProjectionResult> {
        let projection_id = ProjectionId::new();
        let span = tracing::info_span!(
            "project_twin",
            projection_id = %projection_id,
            horizon_months = horizon.months()
        );
        let _guard = span.enter();

        let age = profile.require_age()?;
        let tenure_months = profile.require_tenure_months()?;
        let projected = project_time(age, tenure_months, horizon.months());

        let health_increase_percent = health_increase_percent(profile.avg_sleep_hours_or_default());

        let record = assemble_features(profile, projected)?;

        let (salary, jobs) = self.run_predictors(&record);

        let result = ProjectionResult {
            projected_age: projected.age,
            health_increase_percent,
            predicted_salary: match salary {
                Ok(estimate) => SalaryEstimate::Available(round_to(estimate, 2)),
                Err(_) => SalaryEstimate::Unavailable,
            },
            recommended_jobs: match jobs {
                Ok(labels) => JobRecommendations::Ranked(labels),
                Err(_) => JobRecommendations::Unavailable,
            },
            time_projection_months: horizon.months(),
        };

        tracing::debug!(
            projected_age = result.projected_age,
            salary_available = result.predicted_salary.is_available(),
            jobs_available = result.recommended_jobs.is_available(),
            "projection complete"
        );
        Ok(result)
    }

    /// Both predictors always run to completion before this returns.
    fn run_predictors(
        &self,
        record: &ProjectedFeatureRecord,
    ) -> (PredictorOutcome<f64>, PredictorOutcome<Vec<String>>) {
        if !self.parallel_inference {
            return (
                predict_salary(self.salary.as_ref(), record),
                predict_jobs(self.jobs.as_ref(), record, RECOMMENDED_JOBS),
            );
        }

        let span = tracing::Span::current();
        std::thread::scope(|s| {
            let salary = s.spawn(|| span.in_scope(|| predict_salary(self.salary.as_ref(), record)));
            let jobs = predict_jobs(self.jobs.as_ref(), record, RECOMMENDED_JOBS);
            let salary = salary.join().unwrap_or_else(|_| {
                Err(PredictorError::InferenceFailed("salary worker thread panicked".to_string()))
            });
            (salary, jobs)
        })
    }
}

impl core::fmt::Debug for TwinProjector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TwinProjector")
            .field("parallel_inference", &self.parallel_inference)
            .finish_non_exhaustive()
    }
}
