// seqcol - seqcol-error
// Module: Collection Error Handling
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling library for the seqcol collection crate.
//!
//! Errors are categorized and carry a numeric code alongside a human-readable
//! message. Two kinds are part of the collection's public contract:
//!
//! - [`kinds::UnderflowError`] — removing from an empty collection
//! - [`kinds::OutOfRangeError`] — indexing outside the valid positions
//!
//! A third, [`kinds::SerializationError`], covers JSON encoding failures.
//!
//! # Usage
//!
//! ```
//! use seqcol_error::{helpers, ErrorCategory};
//!
//! let err = helpers::out_of_range_error(42);
//! assert_eq!(err.category, ErrorCategory::Bounds);
//! assert!(err.is_out_of_range());
//! assert!(err.message().contains("42"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod codes;
pub mod errors;
pub mod helpers;
pub mod kinds;
pub mod prelude;

pub use errors::{Error, ErrorCategory};
pub use helpers::*;
pub use kinds::ErrorSource;

/// A specialized `Result` type for collection operations.
pub type Result<T> = core::result::Result<T, Error>;
