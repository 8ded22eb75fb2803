//! Strongly-typed identifiers.

use uuid::Uuid;

/// Identifier of a single projection request.
///
/// Only used for log correlation; projections are never persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ProjectionId(Uuid);

impl ProjectionId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered) so log lines sort by request start.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ProjectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProjectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
