//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// value object that exists has already passed validation; "changing" one
/// means constructing a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemCode(String);
///
/// impl ValueObject for ItemCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
