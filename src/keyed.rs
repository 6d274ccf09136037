//! Keyed collection primitives shared by the floor plan and cost ledger.
//!
//! Both aggregates keep an ordered `Vec` of records with generated
//! identifiers, appended on creation and addressed by key afterwards.

/// A record addressable by a copyable identifier.
pub trait Keyed {
    /// Identifier type.
    type Key: Copy + PartialEq;

    /// Returns the record identifier.
    fn key(&self) -> Self::Key;
}

/// Returns the record with the given key, if present.
#[must_use]
pub fn find_by_key<T: Keyed>(items: &[T], key: T::Key) -> Option<&T> {
    items.iter().find(|item| item.key() == key)
}

/// Returns a mutable reference to the record with the given key, if present.
#[must_use]
pub fn find_by_key_mut<T: Keyed>(items: &mut [T], key: T::Key) -> Option<&mut T> {
    items.iter_mut().find(|item| item.key() == key)
}

/// Removes the record with the given key, preserving the order of the rest.
///
/// Returns the removed record, or `None` when no record matched.
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: T::Key) -> Option<T> {
    let position = items.iter().position(|item| item.key() == key)?;
    Some(items.remove(position))
}
