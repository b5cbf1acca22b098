//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two value
/// objects with the same attribute values are the same value. To "modify"
/// one, construct a new one (validating again at the boundary).
///
/// Example: `Money { amount_cents: 100, currency: "USD" }` is a value object;
/// `Product { id: ProductId(...), .. }` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
