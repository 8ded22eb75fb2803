//! Feature record assembly.

use foresight_core::{ProjectedFeatureRecord, TwinResult, UserProfile, require_text};

use crate::time::ProjectedTime;

/// Build the record the predictors score: the profile's categorical
/// attributes and remote flag, with age and tenure replaced by their
/// projected values.
///
/// Fails with `MissingAttribute` naming the first absent column, in schema
/// order. The caller's profile is only borrowed.
pub fn assemble_features(profile: &UserProfile, projected: ProjectedTime) -> TwinResult<ProjectedFeatureRecord> {
    let education = require_text(&profile.education, "education")?;
    let location = require_text(&profile.location, "location")?;
    let title = require_text(&profile.title, "title")?;
    let industry = require_text(&profile.industry, "industry")?;
    let remote_flag = profile.require_remote_flag()?;

    Ok(ProjectedFeatureRecord::new(
        education,
        location,
        title,
        industry,
        projected.age,
        projected.tenure_months,
        remote_flag,
    ))
}
