//! A disjoint-set (union-find) forest with path compression and union by
//! rank
//!
//! Elements are owned by a [`DisjointSet`] arena and addressed through
//! copyable, identity-compared [`Handle`]s.  Parent links are arena indices
//! rather than owning pointers, so no operation can form a reference cycle or
//! duplicate part of a tree.
//!
//! ```
//! use disjoint::DisjointSet;
//!
//! let mut set = DisjointSet::new();
//! let a = set.insert("a");
//! let b = set.insert("b");
//! let c = set.insert("c");
//!
//! set.union(a, b)?;
//! assert!(set.are_same_set(a, b)?);
//! assert!(!set.are_same_set(a, c)?);
//! assert_eq!(set.find(b)?, set.find(a)?);
//! # Ok::<_, disjoint::InvalidHandle>(())
//! ```

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod disjoint_set;
pub mod forest;
mod handle;
#[cfg(any(test, feature = "test"))]
pub mod test_tools;

pub use disjoint_set::{DisjointSet, InvalidHandle};
pub use handle::Handle;
