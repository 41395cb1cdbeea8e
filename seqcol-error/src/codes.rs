// seqcol - seqcol-error
// Module: Error Codes
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Numeric error codes, one per error kind.

// Collection errors (1000-1099)

/// Removing an element from an empty collection
pub const COLLECTION_UNDERFLOW: u16 = 1000;
/// Indexing a position outside `[0, len)`
pub const INDEX_OUT_OF_RANGE: u16 = 1001;

// Serialization errors (1100-1199)

/// JSON encoding of the collection failed
pub const SERIALIZATION_FAILED: u16 = 1100;
