// seqcol - seqcol-error
// Module: Error Helpers
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper functions for creating the common error values.

use alloc::borrow::Cow;
use alloc::format;

use crate::{codes, Error, ErrorCategory};

/// Create an underflow error (removing from an empty collection).
#[must_use]
pub const fn underflow_error() -> Error {
    Error::from_static(
        ErrorCategory::Capacity,
        codes::COLLECTION_UNDERFLOW,
        "no items to pop",
    )
}

/// Create an out-of-range error carrying the offending index.
#[must_use]
pub fn out_of_range_error(index: usize) -> Error {
    Error::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_RANGE,
        format!("index {index} is out of range"),
    )
}

/// Create a serialization error from the encoder's message.
pub fn serialization_error(message: impl Into<Cow<'static, str>>) -> Error {
    Error::new(
        ErrorCategory::Serialization,
        codes::SERIALIZATION_FAILED,
        message,
    )
}
