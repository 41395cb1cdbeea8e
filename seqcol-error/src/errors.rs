// seqcol - seqcol-error
// Module: Unified Error Type
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The unified [`Error`] type and its categories.

use alloc::borrow::Cow;
use core::fmt;

use crate::codes;

/// Error categories for collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Capacity errors (removing from an empty collection)
    Capacity = 1,
    /// Bounds errors (indexing outside the valid positions)
    Bounds = 2,
    /// Serialization errors (JSON encoding failures)
    Serialization = 3,
}

/// The seqcol error type.
///
/// Categorized errors with a numeric code and a message. The message may
/// carry dynamic context, such as the offending index of a bounds error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Error category
    pub category: ErrorCategory,
    /// Error code
    pub code: u16,
    message: Cow<'static, str>,
}

impl Error {
    /// Create a new error with a static message.
    #[must_use]
    pub const fn from_static(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message: Cow::Borrowed(message),
        }
    }

    /// Create a new error.
    pub fn new(category: ErrorCategory, code: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is an underflow error.
    #[must_use]
    pub fn is_underflow(&self) -> bool {
        self.code == codes::COLLECTION_UNDERFLOW
    }

    /// Check if this is an out-of-range error.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.code == codes::INDEX_OUT_OF_RANGE
    }

    /// Check if this is a serialization error.
    #[must_use]
    pub fn is_serialization_error(&self) -> bool {
        self.category == ErrorCategory::Serialization
    }
}

// Display shows only the message; category and code are reachable through
// the public fields.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.message, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_dynamic_messages() {
        let a = Error::from_static(ErrorCategory::Capacity, codes::COLLECTION_UNDERFLOW, "no items to pop");
        assert_eq!(a.message(), "no items to pop");
        assert!(a.is_underflow());

        let b = Error::new(
            ErrorCategory::Bounds,
            codes::INDEX_OUT_OF_RANGE,
            alloc::format!("index {} is out of range", 7),
        );
        assert!(b.is_out_of_range());
        assert_eq!(b.to_string(), "index 7 is out of range");
    }

    #[test]
    fn categories_are_distinguishable() {
        let under = Error::from_static(ErrorCategory::Capacity, codes::COLLECTION_UNDERFLOW, "no items to pop");
        let range = Error::from_static(ErrorCategory::Bounds, codes::INDEX_OUT_OF_RANGE, "index 0 is out of range");
        assert_ne!(under.category, range.category);
        assert!(!under.is_out_of_range());
        assert!(!range.is_underflow());
    }
}
