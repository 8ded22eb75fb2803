//! The fixed-schema feature record scored by predictor artifacts.

use serde::Serialize;

use crate::value_object::ValueObject;

/// Column order every predictor artifact is fit against.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "education",
    "location",
    "title",
    "industry",
    "age",
    "tenure_months",
    "remote_flag",
];

/// Names of the categorical columns, in schema order.
pub const CATEGORICAL_COLUMNS: [&str; 4] = ["education", "location", "title", "industry"];

/// A single cell of a feature record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Categorical(&'a str),
    Numeric(f64),
}

/// Profile attributes with age and tenure moved forward by a horizon.
///
/// All fields are mandatory, so holding one of these means the record is
/// complete; there is no partially-populated state to score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedFeatureRecord {
    education: String,
    location: String,
    title: String,
    industry: String,
    age: u32,
    tenure_months: u32,
    remote_flag: bool,
}

impl ValueObject for ProjectedFeatureRecord {}

impl ProjectedFeatureRecord {
    pub fn new(
        education: impl Into<String>,
        location: impl Into<String>,
        title: impl Into<String>,
        industry: impl Into<String>,
        age: u32,
        tenure_months: u32,
        remote_flag: bool,
    ) -> Self {
        Self {
            education: education.into(),
            location: location.into(),
            title: title.into(),
            industry: industry.into(),
            age,
            tenure_months,
            remote_flag,
        }
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    pub fn remote_flag(&self) -> bool {
        self.remote_flag
    }

    /// Cells in [`FEATURE_COLUMNS`] order. `remote_flag` is scored as 0/1.
    pub fn columns(&self) -> [(&'static str, FeatureValue<'_>); 7] {
        [
            (FEATURE_COLUMNS[0], FeatureValue::Categorical(&self.education)),
            (FEATURE_COLUMNS[1], FeatureValue::Categorical(&self.location)),
            (FEATURE_COLUMNS[2], FeatureValue::Categorical(&self.title)),
            (FEATURE_COLUMNS[3], FeatureValue::Categorical(&self.industry)),
            (FEATURE_COLUMNS[4], FeatureValue::Numeric(f64::from(self.age))),
            (FEATURE_COLUMNS[5], FeatureValue::Numeric(f64::from(self.tenure_months))),
            (
                FEATURE_COLUMNS[6],
                FeatureValue::Numeric(if self.remote_flag { 1.0 } else { 0.0 }),
            ),
        ]
    }

    /// Categorical cells in [`CATEGORICAL_COLUMNS`] order.
    pub fn categorical(&self) -> [&str; 4] {
        [&self.education, &self.location, &self.title, &self.industry]
    }

    /// Numeric cells (age, tenure, remote flag) in schema order.
    pub fn numeric(&self) -> [f64; 3] {
        [
            f64::from(self.age),
            f64::from(self.tenure_months),
            if self.remote_flag { 1.0 } else { 0.0 },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectedFeatureRecord {
        ProjectedFeatureRecord::new("Masters", "Lisbon", "Analyst", "Finance", 32, 34, false)
    }

    #[test]
    fn columns_follow_schema_order() {
        let names: Vec<&str> = record().columns().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, FEATURE_COLUMNS);
    }

    #[test]
    fn categorical_columns_are_a_prefix_of_the_schema() {
        assert_eq!(&FEATURE_COLUMNS[..4], &CATEGORICAL_COLUMNS);
    }

    #[test]
    fn remote_flag_is_scored_numerically() {
        let binding = record();
        let cols = binding.columns();
        assert_eq!(cols[6].1, FeatureValue::Numeric(0.0));
        assert_eq!(record().numeric(), [32.0, 34.0, 0.0]);
        assert_eq!(record().categorical(), ["Masters", "Lisbon", "Analyst", "Finance"]);
    }
}
