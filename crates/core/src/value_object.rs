//! Value object marker: records compared by value and never mutated in place.

/// Marker trait for value objects.
///
/// Everything the engine passes between its stages is a value object: a
/// profile is received, a projected record is *derived* from it, and a
/// result is built once. "Changing" one means constructing a new one, which
/// is what lets a single profile be shared by concurrent predictor calls
/// without locking.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Band { min: f64, max: f64 }
///
/// impl ValueObject for Band {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
