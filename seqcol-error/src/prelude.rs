// seqcol - seqcol-error
// Module: Prelude
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Consistent imports for downstream crates.

pub use crate::codes;
pub use crate::helpers::{out_of_range_error, serialization_error, underflow_error};
pub use crate::kinds::{ErrorSource, OutOfRangeError, SerializationError, UnderflowError};
pub use crate::{Error, ErrorCategory, Result};
