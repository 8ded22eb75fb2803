//! Supported projection horizons.

use serde::{Deserialize, Serialize};

use crate::error::TwinError;
use crate::value_object::ValueObject;

/// How far into the future a twin is projected.
///
/// The set is closed; anything else is rejected when the horizon is built
/// from a raw month count, so the engine never sees an unsupported value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ProjectionHorizon {
    SixMonths,
    TwoYears,
    FiveYears,
}

impl ValueObject for ProjectionHorizon {}

impl ProjectionHorizon {
    pub const ALL: [ProjectionHorizon; 3] = [Self::SixMonths, Self::TwoYears, Self::FiveYears];

    pub fn months(self) -> u32 {
        match self {
            Self::SixMonths => 6,
            Self::TwoYears => 24,
            Self::FiveYears => 60,
        }
    }
}

impl TryFrom<i64> for ProjectionHorizon {
    type Error = TwinError;

    fn try_from(months: i64) -> Result<Self, Self::Error> {
        match months {
            6 => Ok(Self::SixMonths),
            24 => Ok(Self::TwoYears),
            60 => Ok(Self::FiveYears),
            other => Err(TwinError::UnsupportedHorizon(other)),
        }
    }
}

impl From<ProjectionHorizon> for i64 {
    fn from(value: ProjectionHorizon) -> Self {
        i64::from(value.months())
    }
}

impl core::fmt::Display for ProjectionHorizon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} months", self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn supported_month_counts_map_to_variants() {
        for h in ProjectionHorizon::ALL {
            assert_eq!(ProjectionHorizon::try_from(i64::from(h)), Ok(h));
        }
    }

    #[test]
    fn serde_uses_plain_month_count() {
        let json = serde_json::to_string(&ProjectionHorizon::TwoYears).unwrap();
        assert_eq!(json, "24");
        assert!(serde_json::from_str::<ProjectionHorizon>("12").is_err());
    }

    proptest! {
        #[test]
        fn anything_else_is_unsupported(months in any::<i64>()) {
            prop_assume!(![6, 24, 60].contains(&months));
            prop_assert_eq!(
                ProjectionHorizon::try_from(months),
                Err(TwinError::UnsupportedHorizon(months))
            );
        }
    }
}
