// seqcol - seqcol
// Module: Collection - ordered sequence with cursor traversal
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The [`Collection`] container.
//!
//! A mutable ordered sequence over a [`SlotArray`] backing store, exposing
//! tail insertion/removal, indexed lookup, the external cursor-traversal
//! protocol, an indexed-access capability set and JSON serialization.
//!
//! Two behaviors of the indexed-access surface are preserved from the
//! contract this container reproduces, and are asserted by tests rather
//! than corrected:
//!
//! - [`Collection::offset_set`] ignores the requested index and always
//!   appends.
//! - [`Collection::offset_get`] reports a missing position as `None`
//!   instead of the [`OutOfRangeError`](seqcol_error::kinds::OutOfRangeError)
//!   that [`Collection::get`] returns.

use core::fmt;
use core::ops::Index;

use seqcol_error::{helpers, Result};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::store::SlotArray;

/// A mutable ordered sequence with cursor traversal and indexed access.
///
/// Elements are owned exclusively by the collection. Created empty; grows by
/// exactly one logical slot per [`push`](Self::push) and shrinks by one per
/// [`pop`](Self::pop). Heterogeneous contents are expressed through the type
/// parameter; `Collection<serde_json::Value>` holds values of any JSON type.
///
/// The traversal cursor is traversal state, not value state: it is excluded
/// from equality and serialization. Mutating the collection mid-traversal is
/// not detected; `rewind` before relying on a coherent pass.
///
/// # Examples
///
/// ```
/// use seqcol::Collection;
///
/// let mut items = Collection::new();
/// items.push(1).push(2).push(3);
///
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.get(1)?, &2);
/// assert_eq!(items.pop()?, 3);
/// # Ok::<(), seqcol_error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Collection<T> {
    store: SlotArray<T>,
}

impl<T> Collection<T> {
    /// Creates a new empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: SlotArray::new(),
        }
    }

    /// Creates a new empty collection with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: SlotArray::with_capacity(capacity),
        }
    }

    /// Returns the current size. Always O(1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Appends every element of `values` in order, then returns the
    /// collection for chaining.
    ///
    /// Keys or indices associated with the input are ignored; this is
    /// equivalent to calling [`add`](Self::add) once per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqcol::Collection;
    ///
    /// let mut items = Collection::new();
    /// items.add_from_iter(["a", "b", "c"]);
    ///
    /// assert_eq!(items.len(), 3);
    /// assert_eq!(items.get(0)?, &"a");
    /// # Ok::<(), seqcol_error::Error>(())
    /// ```
    pub fn add_from_iter<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push(value);
        }
        self
    }

    /// Appends `item` in the new final slot, then returns the collection
    /// for chaining. Never fails.
    #[inline]
    pub fn push(&mut self, item: T) -> &mut Self {
        self.store.push_slot(item);
        log::trace!("push: len is now {}", self.store.len());
        self
    }

    /// Appends `item` in the new final slot. Alias for [`push`](Self::push).
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, item: T) -> &mut Self {
        self.push(item)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns an underflow error when the collection is empty; an empty
    /// collection never yields a silent default.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqcol::Collection;
    ///
    /// let mut items = Collection::new();
    /// items.push(7);
    ///
    /// assert_eq!(items.pop()?, 7);
    /// assert!(items.pop().unwrap_err().is_underflow());
    /// # Ok::<(), seqcol_error::Error>(())
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        let item = self
            .store
            .pop_slot()
            .ok_or_else(helpers::underflow_error)?;
        log::trace!("pop: len is now {}", self.store.len());
        Ok(item)
    }

    /// Returns the element at the 0-based position `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error, carrying the offending index, when
    /// `index` is not a currently valid position.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqcol::Collection;
    ///
    /// let mut items = Collection::new();
    /// items.push("x");
    ///
    /// assert_eq!(items.get(0)?, &"x");
    /// let err = items.get(5).unwrap_err();
    /// assert!(err.is_out_of_range());
    /// assert!(err.message().contains("5"));
    /// # Ok::<(), seqcol_error::Error>(())
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.store
            .offset_get(index)
            .ok_or_else(|| helpers::out_of_range_error(index))
    }

    // ----- cursor traversal protocol -----

    /// Returns the element at the cursor, or `None` when the cursor is not
    /// a valid position.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.store.current()
    }

    /// Advances the cursor by one position.
    ///
    /// The name follows the traversal protocol; the `Iterator` form of the
    /// collection is [`iter`](Self::iter).
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.store.advance();
    }

    /// Returns the cursor position, or `None` when the cursor is not valid.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<usize> {
        self.store.key()
    }

    /// Returns `true` iff the cursor is at a valid position.
    #[inline]
    #[must_use]
    pub fn valid(&self) -> bool {
        self.store.valid()
    }

    /// Resets the cursor to the first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqcol::Collection;
    ///
    /// let mut items = Collection::new();
    /// items.push(10).push(20);
    ///
    /// items.rewind();
    /// while items.valid() {
    ///     let key = items.key().unwrap();
    ///     let value = *items.current().unwrap();
    ///     assert_eq!(value, (key as i32 + 1) * 10);
    ///     items.next();
    /// }
    /// ```
    #[inline]
    pub fn rewind(&mut self) {
        self.store.rewind();
    }

    // ----- indexed-access capability -----

    /// Returns `true` iff `index` is a currently valid position.
    #[inline]
    #[must_use]
    pub fn offset_exists(&self, index: usize) -> bool {
        self.store.offset_exists(index)
    }

    /// Returns the element at `index`, or `None` when the position is not
    /// valid.
    ///
    /// This path delegates to the backing store's own bounds check and does
    /// not produce the error kind that [`get`](Self::get) does.
    #[inline]
    #[must_use]
    pub fn offset_get(&self, index: usize) -> Option<&T> {
        self.store.offset_get(index)
    }

    /// Appends `value`, ignoring `index` entirely.
    ///
    /// Indexed assignment through this capability never overwrites: whatever
    /// position is requested, the value lands in a new final slot and the
    /// size grows by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqcol::Collection;
    ///
    /// let mut items = Collection::new();
    /// items.push(1).push(2);
    ///
    /// items.offset_set(0, 9);
    /// assert_eq!(items.len(), 3);
    /// assert_eq!(items.get(0)?, &1); // untouched
    /// assert_eq!(items.get(2)?, &9); // appended
    /// # Ok::<(), seqcol_error::Error>(())
    /// ```
    pub fn offset_set(&mut self, index: usize, value: T) {
        log::trace!("offset_set: requested index {index} ignored, appending");
        self.push(value);
    }

    /// Views the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Borrowed iterator over the elements in insertion order.
    ///
    /// Independent of the cursor protocol; iterating here does not move the
    /// cursor.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.store.iter()
    }
}

impl<T: Default> Collection<T> {
    /// Clears the slot at `index` in place.
    ///
    /// The size stays unchanged and no elements shift; the slot becomes a
    /// hole holding `T::default()` (JSON `null` for
    /// `Collection<serde_json::Value>`). Returns `false` when `index` is not
    /// a valid position.
    pub fn offset_unset(&mut self, index: usize) -> bool {
        let cleared = self.store.offset_unset(index);
        if cleared {
            log::trace!("offset_unset: cleared slot {index}");
        }
        cleared
    }
}

impl<T: Serialize> Collection<T> {
    /// Renders the collection as a JSON array of the elements in order.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when an element cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqcol::Collection;
    /// use serde_json::json;
    ///
    /// let mut items = Collection::new();
    /// items.push(json!(1)).push(json!("two")).push(json!(3.0));
    ///
    /// assert_eq!(items.to_json()?, r#"[1,"two",3.0]"#);
    /// # Ok::<(), seqcol_error::Error>(())
    /// ```
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| helpers::serialization_error(err.to_string()))
    }

    /// Converts the collection into a [`serde_json::Value`] array of the
    /// elements in order.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when an element cannot be encoded.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|err| helpers::serialization_error(err.to_string()))
    }
}

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Equality compares the element sequence only; the cursor is traversal
// state, not value state.
impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Collection<T> {}

// Indexing delegates to the backing slice and shares its bounds behavior:
// an invalid position panics rather than producing the `get` error kind.
impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.store.as_slice()[index]
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_from_iter(iter);
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.add_from_iter(iter);
        collection
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_items().into_iter()
    }
}

// Serializes as a sequence of the elements in order, the form rendered into
// a JSON array.
impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new() {
        let items: Collection<u32> = Collection::new();
        assert_eq!(items.len(), 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_push_get_count() -> Result<()> {
        let mut items = Collection::new();
        items.push(1).push(2).push(3);

        assert_eq!(items.len(), 3);
        assert_eq!(items.get(0)?, &1);
        assert_eq!(items.get(1)?, &2);
        assert_eq!(items.get(2)?, &3);

        Ok(())
    }

    #[test]
    fn test_add_is_push() -> Result<()> {
        let mut items = Collection::new();
        items.add(10).add(20);

        assert_eq!(items.len(), 2);
        assert_eq!(items.get(1)?, &20);

        Ok(())
    }

    #[test]
    fn test_pop_lifo() -> Result<()> {
        let mut items = Collection::new();
        items.push(1).push(2).push(3);

        assert_eq!(items.pop()?, 3);
        assert_eq!(items.pop()?, 2);
        assert_eq!(items.len(), 1);

        Ok(())
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut items: Collection<u32> = Collection::new();
        let err = items.pop().unwrap_err();
        assert!(err.is_underflow());
        assert_eq!(err.message(), "no items to pop");
    }

    #[test]
    fn test_get_out_of_range_names_index() {
        let mut items = Collection::new();
        items.push(1);

        let err = items.get(9).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(err.message().contains('9'));
    }

    #[test]
    fn test_offset_get_does_not_raise() {
        let items: Collection<u32> = Collection::new();
        // The backing-store path reports absence, not the `get` error kind.
        assert_eq!(items.offset_get(0), None);
    }

    #[test]
    fn test_offset_set_appends_regardless_of_index() -> Result<()> {
        let mut items = Collection::new();
        items.push(1).push(2);

        items.offset_set(0, 99);
        assert_eq!(items.len(), 3);
        assert_eq!(items.get(0)?, &1);
        assert_eq!(items.get(2)?, &99);

        // Same outcome for an index far past the end.
        items.offset_set(1000, 100);
        assert_eq!(items.len(), 4);
        assert_eq!(items.get(3)?, &100);

        Ok(())
    }

    #[test]
    fn test_offset_unset_keeps_size() -> Result<()> {
        let mut items = Collection::new();
        items.push(json!(1)).push(json!(2)).push(json!(3));

        assert!(items.offset_unset(1));
        assert_eq!(items.len(), 3);
        assert_eq!(items.get(1)?, &json!(null));
        assert!(!items.offset_unset(5));

        Ok(())
    }

    #[test]
    fn test_cursor_protocol() {
        let mut items = Collection::new();
        items.add_from_iter(["a", "b", "c"]);

        items.rewind();
        let mut keys = Vec::new();
        let mut values = Vec::new();
        while items.valid() {
            keys.push(items.key().unwrap());
            values.push(*items.current().unwrap());
            items.next();
        }

        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(items.key(), None);
        assert_eq!(items.current(), None);
    }

    #[test]
    fn test_iter_does_not_move_cursor() {
        let mut items = Collection::new();
        items.push(1).push(2);
        items.rewind();

        let collected: Vec<_> = items.iter().copied().collect();
        assert_eq!(collected, vec![1, 2]);
        assert_eq!(items.key(), Some(0));
    }

    #[test]
    fn test_index_delegates_to_slice() {
        let mut items = Collection::new();
        items.push(5).push(6);
        assert_eq!(items[1], 6);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_panics_like_slice() {
        let items: Collection<u32> = Collection::new();
        let _ = items[0];
    }

    #[test]
    fn test_extend_and_from_iterator() -> Result<()> {
        let mut items: Collection<u32> = (1..=3).collect();
        items.extend(4..=5);

        assert_eq!(items.len(), 5);
        assert_eq!(items.get(4)?, &5);

        Ok(())
    }

    #[test]
    fn test_serialize_heterogeneous() -> Result<()> {
        let mut items = Collection::new();
        items.push(json!(1)).push(json!("two")).push(json!(3.0));

        assert_eq!(items.to_json()?, r#"[1,"two",3.0]"#);
        assert_eq!(items.to_json_value()?, json!([1, "two", 3.0]));

        Ok(())
    }

    #[test]
    fn test_deserialize_round_trip() -> Result<()> {
        let source: Collection<u32> = (10..13).collect();
        let encoded = source.to_json()?;
        let decoded: Collection<u32> = serde_json::from_str(&encoded)
            .map_err(|err| helpers::serialization_error(err.to_string()))?;

        assert_eq!(decoded, source);

        Ok(())
    }

    #[test]
    fn test_display() {
        let mut items = Collection::new();
        items.push(1).push(2);
        assert_eq!(items.to_string(), "[1, 2]");
    }

    #[test]
    fn test_equality_ignores_cursor() {
        let mut a = Collection::new();
        let mut b = Collection::new();
        a.push(1).push(2);
        b.push(1).push(2);

        a.rewind();
        a.next();
        assert_eq!(a, b);
    }
}
