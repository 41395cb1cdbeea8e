// seqcol - seqcol
// Module: Growable Sequential Collection
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable sequential collection with cursor traversal, indexed access and
//! JSON serialization.
//!
//! The crate provides one container, [`Collection`], an ordered sequence
//! that grows by one logical slot per insertion and exposes several small
//! capability surfaces on a single concrete type:
//!
//! - tail insertion and removal ([`Collection::push`], [`Collection::add`],
//!   [`Collection::add_from_iter`], [`Collection::pop`])
//! - indexed lookup ([`Collection::get`]) with a distinguishable
//!   out-of-range error
//! - an external cursor-traversal protocol ([`Collection::rewind`],
//!   [`Collection::valid`], [`Collection::current`], [`Collection::key`],
//!   [`Collection::next`])
//! - an indexed-access capability set (`offset_exists` / `offset_get` /
//!   `offset_set` / `offset_unset`)
//! - size query ([`Collection::len`]) and JSON serialization
//!   ([`Collection::to_json`], serde `Serialize`/`Deserialize`)
//!
//! Everything is single-threaded and synchronous; a collection instance is
//! not meant to be shared across threads, and Rust's `&mut` discipline rules
//! out unsynchronized shared mutation at compile time.
//!
//! # Examples
//!
//! ```
//! use seqcol::Collection;
//! use serde_json::json;
//!
//! let mut items = Collection::new();
//! items
//!     .add_from_iter([json!(1), json!("two")])
//!     .push(json!(3.0));
//!
//! assert_eq!(items.len(), 3);
//! assert_eq!(items.to_json()?, r#"[1,"two",3.0]"#);
//! # Ok::<(), seqcol_error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collection;
pub mod prelude;
pub mod store;

pub use collection::Collection;
pub use store::SlotArray;

// Re-export error related types for convenience
pub use seqcol_error::{codes, helpers, Error, ErrorCategory, Result};
