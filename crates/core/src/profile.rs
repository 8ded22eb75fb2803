//! Inbound user profile.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TwinError, TwinResult};
use crate::value_object::ValueObject;

/// Sleep hours assumed when the caller does not report any.
pub const DEFAULT_AVG_SLEEP_HOURS: f64 = 7.5;

/// The person being projected, as received from the caller.
///
/// Required attributes are optional at this layer so that an incomplete
/// payload still deserializes and the missing field can be named precisely
/// (`TwinError::MissingAttribute`) instead of surfacing as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub tenure_months: Option<u32>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    /// Accepts `true`/`false` as well as `1`/`0`.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub remote_flag: Option<bool>,
    #[serde(default)]
    pub avg_sleep_hours: Option<f64>,
}

impl ValueObject for UserProfile {}

impl UserProfile {
    pub fn require_age(&self) -> TwinResult<u32> {
        self.age.ok_or(TwinError::missing("age"))
    }

    pub fn require_tenure_months(&self) -> TwinResult<u32> {
        self.tenure_months.ok_or(TwinError::missing("tenure_months"))
    }

    pub fn require_remote_flag(&self) -> TwinResult<bool> {
        self.remote_flag.ok_or(TwinError::missing("remote_flag"))
    }

    /// Reported sleep hours, or [`DEFAULT_AVG_SLEEP_HOURS`].
    pub fn avg_sleep_hours_or_default(&self) -> f64 {
        self.avg_sleep_hours.unwrap_or(DEFAULT_AVG_SLEEP_HOURS)
    }
}

/// Borrow a required categorical attribute.
pub fn require_text<'a>(value: &'a Option<String>, field: &'static str) -> TwinResult<&'a str> {
    value.as_deref().ok_or(TwinError::missing(field))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlagRepr::Bool(b)) => Ok(Some(b)),
        Some(FlagRepr::Int(0)) => Ok(Some(false)),
        Some(FlagRepr::Int(1)) => Ok(Some(true)),
        Some(FlagRepr::Int(other)) => Err(serde::de::Error::custom(format!(
            "remote_flag must be a boolean or 0/1, got {other}"
        ))),
    }
}
