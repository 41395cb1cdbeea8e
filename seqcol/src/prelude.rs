// seqcol - seqcol
// Module: Prelude
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Consistent imports for consumers of the collection crate.

pub use crate::collection::Collection;
pub use crate::store::SlotArray;
pub use seqcol_error::prelude::*;
