//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two prices of 1.50 are the same price)
/// - **Entity**: Has identity (an item stays the same item while its quantity changes)
///
/// In this workspace `Price` and `ItemKey` are value objects, while an
/// inventory `Item` is an entity identified by its `ItemKey`.
///
/// ```ignore
/// let a = Price::from_cents(150);
/// let b: Price = "1.50".parse()?;
/// assert_eq!(a, b); // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
