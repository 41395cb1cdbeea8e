// seqcol - seqcol
// Module: SlotArray - growable backing store with traversal cursor
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable backing store with an owned traversal cursor.
//!
//! `SlotArray<T>` holds the elements of a [`Collection`](crate::Collection)
//! in contiguous storage with amortized growth, and owns the cursor used by
//! the external-traversal protocol. It exposes slot-level operations only;
//! error mapping and the public contract live in the collection layer.
//!
//! # Characteristics
//!
//! - **Amortized growth**: backed by `Vec<T>`, one logical slot per push
//! - **O(1) operations**: `push_slot`, `pop_slot`, `offset_get` and the
//!   cursor primitives are constant time
//! - **Cursor ownership**: the traversal position lives with the storage

/// Contiguous element storage plus the traversal cursor.
///
/// # Invariants
///
/// 1. `len()` always equals the number of logically present elements
/// 2. The cursor normally stays in `[0, len]`; a shrink can leave it past
///    the end, and `valid()` re-checks bounds instead of assuming it
///
/// Mutating the store does not reposition or invalidate the cursor. A
/// traversal that interleaves with mutation sees whatever the bounds checks
/// see at that moment; callers that need a coherent pass must `rewind()`
/// first and not mutate until done.
#[derive(Debug, Clone)]
pub struct SlotArray<T> {
    /// Element storage, index order is insertion order
    items: Vec<T>,

    /// Traversal position for the cursor protocol
    cursor: usize,
}

impl<T> SlotArray<T> {
    /// Creates a new empty store.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }

    /// Creates a new empty store with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value in the new final slot.
    #[inline]
    pub fn push_slot(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the last element, or `None` when empty.
    #[inline]
    pub fn pop_slot(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns `true` iff `index` is a currently valid position.
    #[inline]
    #[must_use]
    pub fn offset_exists(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Returns the element at `index`, bounds-checked at the slice level.
    #[inline]
    #[must_use]
    pub fn offset_get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Views the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Borrowed iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the store, returning the elements.
    #[inline]
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    // ----- cursor protocol -----

    /// Returns the element at the cursor, or `None` when the cursor is not
    /// a valid position.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Advances the cursor by one position, pinning it at `len`.
    #[inline]
    pub fn advance(&mut self) {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Returns the cursor position, or `None` when it is not valid.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<usize> {
        if self.cursor < self.items.len() {
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Returns `true` iff the cursor is at a valid position.
    #[inline]
    #[must_use]
    pub fn valid(&self) -> bool {
        self.cursor < self.items.len()
    }

    /// Resets the cursor to the first position.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl<T: Default> SlotArray<T> {
    /// Clears the slot at `index` in place, writing the default value.
    ///
    /// The size stays unchanged and no elements shift; a cleared slot is a
    /// hole holding `T::default()`. Returns `false` when `index` is not a
    /// valid position.
    pub fn offset_unset(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = T::default();
                true
            },
            None => false,
        }
    }
}

impl<T> Default for SlotArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a SlotArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
