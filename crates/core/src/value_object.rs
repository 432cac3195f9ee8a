//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one and replace it on the owning entity (e.g. `Book::change_title`).
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Price { amount: 1000, currency: "JPY" }` is a value object
/// - `Book { id: BookId(...), title: ... }` is an entity
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price {
///     amount: u64,
///     currency: String,
/// }
///
/// impl ValueObject for Price {}
///
/// let a = Price { amount: 880, currency: "JPY".to_string() };
/// let b = Price { amount: 880, currency: "JPY".to_string() };
/// assert!(a.equals(&b));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Structural equality over every field.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}
