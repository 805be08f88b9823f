//! Named membership lists built on interned names.
//!
//! A [`Roster`] is the intended composition of this crate's two halves: it
//! canonicalizes every member name through a shared
//! [`InternPool`](crate::intern::InternPool) and stores the resulting
//! handles in a [`SortedArraySet`](crate::SortedArraySet). A deployment
//! holding thousands of rosters over a bounded vocabulary of names pays for
//! each name's bytes once, plus one pointer per roster that lists it.
//!
//! Lookups and removals probe by `&str` and never intern, so asking about a
//! name that was never added does not grow the pool.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use leanset::intern::InternPool;
//! use leanset::roster::Roster;
//!
//! let pool = Arc::new(InternPool::new());
//!
//! let mut moderators = Roster::new("moderators", Arc::clone(&pool));
//! moderators.add_member("Aikar");
//! moderators.add_member("Techcable");
//!
//! let mut admins = Roster::new("admins", Arc::clone(&pool));
//! admins.add_member("Aikar");
//!
//! // One pooled allocation backs "Aikar" in both rosters
//! assert_eq!(pool.len(), 2);
//! assert!(moderators.contains_member("Aikar"));
//! assert!(admins.contains_member("Aikar"));
//! ```

mod roster;

pub use roster::Roster;
