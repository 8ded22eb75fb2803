//! Predictor invocation with per-predictor failure isolation.
//!
//! Each entry point calls its artifact exactly once. Errors *and* panics
//! raised by the artifact are caught here, logged, and handed back as an
//! `Err` so the caller can substitute an "unavailable" value; nothing a
//! predictor does can abort the surrounding projection.

use std::panic::{self, AssertUnwindSafe};

use foresight_ai::{ClassificationPredictor, PredictorError, RegressionPredictor};
use foresight_core::ProjectedFeatureRecord;

use crate::top_k::top_k;

/// Outcome of a single predictor call.
pub type PredictorOutcome<T> = Result<T, PredictorError>;

pub fn predict_salary(predictor: &dyn RegressionPredictor, record: &ProjectedFeatureRecord) -> PredictorOutcome<f64> {
    let outcome = guarded("salary", || predictor.predict(record)).and_then(|estimate| {
        if estimate.is_finite() {
            Ok(estimate)
        } else {
            Err(PredictorError::invalid_output(format!("non-finite salary estimate {estimate}")))
        }
    });

    if let Err(e) = &outcome {
        tracing::warn!(predictor = "salary", error = %e, "salary prediction failed; reporting as unavailable");
    }
    outcome
}

/// Score the record and keep the `k` most probable labels.
pub fn predict_jobs(
    predictor: &dyn ClassificationPredictor,
    record: &ProjectedFeatureRecord,
    k: usize,
) -> PredictorOutcome<Vec<String>> {
    let outcome = guarded("job", || predictor.predict_proba(record)).and_then(|probabilities| {
        let classes = predictor.classes();
        if probabilities.len() != classes.len() {
            return Err(PredictorError::schema(format!(
                "{} probabilities for {} classes",
                probabilities.len(),
                classes.len()
            )));
        }
        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(PredictorError::invalid_output("non-finite class probability"));
        }
        Ok(top_k(classes, &probabilities, k))
    });

    if let Err(e) = &outcome {
        tracing::warn!(predictor = "job", error = %e, "job classification failed; reporting as unavailable");
    }
    outcome
}

fn guarded<T>(name: &str, call: impl FnOnce() -> PredictorOutcome<T>) -> PredictorOutcome<T> {
    panic::catch_unwind(AssertUnwindSafe(call))
        .unwrap_or_else(|_| Err(PredictorError::InferenceFailed(format!("{name} predictor panicked"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<f64, PredictorError>);

    impl RegressionPredictor for Fixed {
        fn predict(&self, _record: &ProjectedFeatureRecord) -> Result<f64, PredictorError> {
            self.0.clone()
        }
    }

    struct Panicking;

    impl RegressionPredictor for Panicking {
        fn predict(&self, _record: &ProjectedFeatureRecord) -> Result<f64, PredictorError> {
            panic!("corrupt weights")
        }
    }

    struct Distribution {
        classes: Vec<String>,
        probs: Vec<f64>,
    }

    impl Distribution {
        fn new(classes: &[&str], probs: &[f64]) -> Self {
            Self {
                classes: classes.iter().map(|c| c.to_string()).collect(),
                probs: probs.to_vec(),
            }
        }
    }

    impl ClassificationPredictor for Distribution {
        fn classes(&self) -> &[String] {
            &self.classes
        }

        fn predict_proba(&self, _record: &ProjectedFeatureRecord) -> Result<Vec<f64>, PredictorError> {
            Ok(self.probs.clone())
        }
    }

    fn record() -> ProjectedFeatureRecord {
        ProjectedFeatureRecord::new("Bachelors", "Berlin", "Engineer", "Software", 32, 34, true)
    }

    #[test]
    fn salary_passes_through_on_success() {
        assert_eq!(predict_salary(&Fixed(Ok(72_000.0)), &record()), Ok(72_000.0));
    }

    #[test]
    fn salary_errors_are_returned_not_raised() {
        let err = PredictorError::schema("missing column");
        assert_eq!(predict_salary(&Fixed(Err(err.clone())), &record()), Err(err));
    }

    #[test]
    fn salary_nan_is_invalid_output() {
        assert!(matches!(
            predict_salary(&Fixed(Ok(f64::NAN)), &record()),
            Err(PredictorError::InvalidOutput(_))
        ));
    }

    #[test]
    fn predictor_panic_is_contained() {
        assert!(matches!(
            predict_salary(&Panicking, &record()),
            Err(PredictorError::InferenceFailed(_))
        ));
    }

    #[test]
    fn jobs_are_top_k_of_the_distribution() {
        let p = Distribution::new(&["A", "B", "C", "D"], &[0.1, 0.4, 0.4, 0.1]);
        assert_eq!(
            predict_jobs(&p, &record(), 3),
            Ok(vec!["B".to_string(), "C".to_string(), "A".to_string()])
        );
    }

    #[test]
    fn misaligned_distribution_is_a_schema_mismatch() {
        let p = Distribution::new(&["A", "B"], &[1.0]);
        assert!(matches!(
            predict_jobs(&p, &record(), 3),
            Err(PredictorError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn non_finite_probability_is_rejected() {
        let p = Distribution::new(&["A", "B"], &[f64::NAN, 0.5]);
        assert!(matches!(
            predict_jobs(&p, &record(), 3),
            Err(PredictorError::InvalidOutput(_))
        ));
    }
}
