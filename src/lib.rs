//! # leanset
//!
//! Memory-lean sorted-array sets with string interning for services that
//! hold many small, largely-duplicated collections.
//!
//! ## Overview
//!
//! Long-running services (the motivating case is a network proxy replaying
//! thousands of team rosters from persisted state) often hold enormous
//! numbers of small string sets at once. A hash-based set pays a fixed
//! per-entry overhead (bucket arrays, load-factor headroom, wrapper nodes)
//! that dominates when most sets are small and many sets share identical
//! contents. This crate attacks the overhead from both ends:
//!
//! - **[`SortedArraySet`]**: a mutable set stored as a sorted, deduplicated
//!   `Vec` with binary-search lookup and a capacity-trimming heuristic, so
//!   the steady-state footprint is the elements themselves.
//! - **[`InternPool`]**: a process-wide canonicalization table that maps
//!   equal string contents onto one shared allocation, so overlapping
//!   membership across unrelated sets costs one string, not many.
//! - **[`Roster`]**: the integration layer, a membership record that
//!   canonicalizes each incoming name through an injected pool before
//!   storing it in its own `SortedArraySet`.
//!
//! ## Feature Flags
//!
//! - `intern`: the canonicalization pool ([`InternPool`], [`InternedStr`])
//! - `roster`: the membership record built on `intern` ([`Roster`])
//! - `full`: enable all features
//!
//! The set module is always available.
//!
//! ## Example
//!
//! ```rust
//! use leanset::SortedArraySet;
//!
//! let mut members: SortedArraySet<&str> = ["test", "bob", "road"].into_iter().collect();
//! assert!(members.contains(&"bob"));
//!
//! members.insert("food");
//! assert_eq!(members.to_vec(), vec!["bob", "food", "road", "test"]);
//!
//! members.remove(&"test");
//! assert!(!members.contains(&"test"));
//! ```
//!
//! [`InternPool`]: crate::intern::InternPool
//! [`InternedStr`]: crate::intern::InternedStr
//! [`Roster`]: crate::roster::Roster

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use leanset::prelude::*;
/// ```
pub mod prelude {

    pub use crate::set::*;

    #[cfg(feature = "intern")]
    pub use crate::intern::*;

    #[cfg(feature = "roster")]
    pub use crate::roster::*;
}

pub mod set;

#[cfg(feature = "intern")]
pub mod intern;

#[cfg(feature = "roster")]
pub mod roster;

pub use set::SortedArraySet;
