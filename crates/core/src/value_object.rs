//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In the catalog,
/// currencies, durations and per-currency prices are value objects, while
/// products, plans and price lists are entities (see [`crate::Entity`]).
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Duration {
///     unit: TimeUnit,
///     number: i32,
/// }
///
/// impl ValueObject for Duration {}
///
/// let d1 = Duration { unit: TimeUnit::Days, number: 30 };
/// let d2 = Duration { unit: TimeUnit::Days, number: 30 };
/// assert_eq!(d1, d2);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
