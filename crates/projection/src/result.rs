//! The projection result record and its "unavailable" variants.

use serde::{Serialize, Serializer};

/// Wire marker used wherever a predictor could not produce a value.
pub const UNAVAILABLE: &str = "N/A";

/// Salary estimate, or the marker that the salary predictor failed.
///
/// Serialized as a number or as the string `"N/A"`. Being a distinct
/// variant, no real estimate (negative ones included) can be mistaken for a
/// failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryEstimate {
    Available(f64),
    Unavailable,
}

impl SalaryEstimate {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Available(v) => Some(*v),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl Serialize for SalaryEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Available(v) => serializer.serialize_f64(*v),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

/// Ranked next-title recommendations, or the marker that the classifier failed.
///
/// Serialized as a list; the unavailable case is the single-element list `["N/A"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobRecommendations {
    Ranked(Vec<String>),
    Unavailable,
}

impl JobRecommendations {
    /// Labels as they appear on the wire.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Ranked(labels) => labels.iter().map(String::as_str).collect(),
            Self::Unavailable => vec![UNAVAILABLE],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }
}

impl Serialize for JobRecommendations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labels().serialize(serializer)
    }
}

/// Outcome of one twin projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub projected_age: u32,
    /// Percent, one decimal.
    pub health_increase_percent: f64,
    /// Two decimals when available.
    pub predicted_salary: SalaryEstimate,
    /// At most three labels, most likely first.
    pub recommended_jobs: JobRecommendations,
    pub time_projection_months: u32,
}
