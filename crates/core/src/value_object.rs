//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values; identity doesn't exist for them. `DurationRange { min_hours: 4.0,
/// max_hours: 6.0 }` is a value object, a tenant with a `TenantId` is not.
///
/// To "modify" a value object, build a new one. This keeps them safe to share
/// across the parallel analysis stages without synchronization.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
