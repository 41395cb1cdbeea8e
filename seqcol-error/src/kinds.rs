// seqcol - seqcol-error
// Module: Error Kind Definitions
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Data-carrying error kinds.
//!
//! Each kind is a small struct that knows its own code and category and can
//! be converted into the unified [`Error`].

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Debug, Display};

use crate::{codes, Error, ErrorCategory};

/// Base trait for all error kinds.
pub trait ErrorSource: Debug + Display {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// Error when removing from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderflowError;

impl Display for UnderflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no items to pop")
    }
}

impl ErrorSource for UnderflowError {
    fn code(&self) -> u16 {
        codes::COLLECTION_UNDERFLOW
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Capacity
    }
}

impl From<UnderflowError> for Error {
    fn from(_: UnderflowError) -> Self {
        Error::from_static(
            ErrorCategory::Capacity,
            codes::COLLECTION_UNDERFLOW,
            "no items to pop",
        )
    }
}

/// Error for an index outside the valid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError(pub usize);

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} is out of range", self.0)
    }
}

impl ErrorSource for OutOfRangeError {
    fn code(&self) -> u16 {
        codes::INDEX_OUT_OF_RANGE
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Bounds
    }
}

impl From<OutOfRangeError> for Error {
    fn from(kind: OutOfRangeError) -> Self {
        Error::new(
            ErrorCategory::Bounds,
            codes::INDEX_OUT_OF_RANGE,
            format!("{kind}"),
        )
    }
}

/// Error for a failed JSON encoding, with the encoder's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationError(pub String);

impl Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "serialization failed: {}", self.0)
    }
}

impl ErrorSource for SerializationError {
    fn code(&self) -> u16 {
        codes::SERIALIZATION_FAILED
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Serialization
    }
}

impl From<SerializationError> for Error {
    fn from(kind: SerializationError) -> Self {
        Error::new(
            ErrorCategory::Serialization,
            codes::SERIALIZATION_FAILED,
            format!("{kind}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn out_of_range_carries_index() {
        let kind = OutOfRangeError(13);
        assert_eq!(kind.to_string(), "index 13 is out of range");
        let err: Error = kind.into();
        assert!(err.is_out_of_range());
        assert!(err.message().contains("13"));
    }

    #[test]
    fn kind_codes_match_error_codes() {
        assert_eq!(UnderflowError.code(), codes::COLLECTION_UNDERFLOW);
        assert_eq!(OutOfRangeError(0).code(), codes::INDEX_OUT_OF_RANGE);
        let err: Error = UnderflowError.into();
        assert_eq!(err.code, UnderflowError.code());
        assert_eq!(err.category, UnderflowError.category());
    }
}
