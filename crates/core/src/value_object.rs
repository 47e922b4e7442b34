//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two prices of `$12.50` are the same
/// price. They are immutable; "changing" one means building a new value.
///
/// - **Value Object**: `Price`, `Rating` (compared by their attributes)
/// - **Entity**: `Product` (compared by `ProductId`, see [`crate::Entity`])
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
