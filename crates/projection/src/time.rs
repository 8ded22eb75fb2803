//! Temporal projection of age and tenure.

/// Age and tenure after a horizon has elapsed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProjectedTime {
    pub age: u32,
    pub tenure_months: u32,
}

/// Advance age and tenure by `horizon_months`.
///
/// Age moves in whole years only (months are truncated, so a 6-month
/// horizon leaves the age unchanged); tenure is already tracked in months
/// and moves exactly.
pub fn project_time(age: u32, tenure_months: u32, horizon_months: u32) -> ProjectedTime {
    ProjectedTime {
        age: age.saturating_add(horizon_months / 12),
        tenure_months: tenure_months.saturating_add(horizon_months),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn two_years_adds_two_years_and_24_months() {
        assert_eq!(
            project_time(30, 10, 24),
            ProjectedTime {
                age: 32,
                tenure_months: 34
            }
        );
    }

    #[test]
    fn six_months_truncates_to_zero_years() {
        assert_eq!(
            project_time(30, 0, 6),
            ProjectedTime {
                age: 30,
                tenure_months: 6
            }
        );
    }

    #[test]
    fn five_years() {
        assert_eq!(project_time(45, 120, 60).age, 50);
        assert_eq!(project_time(45, 120, 60).tenure_months, 180);
    }

    proptest! {
        #[test]
        fn tenure_is_exact_and_age_truncates(
            age in 0u32..120,
            tenure in 0u32..1_000,
            horizon in 0u32..240,
        ) {
            let p = project_time(age, tenure, horizon);
            prop_assert_eq!(p.tenure_months, tenure + horizon);
            prop_assert_eq!(p.age, age + horizon / 12);
            prop_assert!(p.age - age <= horizon / 12);
        }
    }
}
