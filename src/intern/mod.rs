//! Process-wide string canonicalization.
//!
//! This module provides [`InternPool`], a thread-safe pool that maps equal
//! string content to one shared allocation, and [`InternedStr`], the cheap
//! handle it hands out. Services that hold many collections of largely
//! duplicated names (player rosters, tag lists, symbol tables) intern each
//! name once and store `InternedStr` handles everywhere else, so a name that
//! appears in a thousand collections occupies heap for its bytes exactly
//! once.
//!
//! # Canonicalization Guarantee
//!
//! For any one pool, interning equal content yields handles that share the
//! same allocation:
//!
//! ```rust
//! use leanset::intern::InternPool;
//!
//! let pool = InternPool::new();
//! let first = pool.intern("Aikar");
//! let second = pool.intern("Aikar");
//!
//! assert!(first.shares_allocation_with(&second));
//! ```
//!
//! The guarantee is about memory, not semantics: [`InternedStr`] equality
//! and ordering always follow string content, so handles from different
//! pools compare exactly like the strings they hold. Allocation sharing is
//! observable only through
//! [`shares_allocation_with`](InternedStr::shares_allocation_with), which
//! exists for diagnostics and tests.
//!
//! The pool is append-only: entries live as long as the pool does. That
//! suits bounded vocabularies (names, tags, identifiers); it is the wrong
//! tool for unbounded user input.

mod pool;

pub use pool::InternPool;
pub use pool::InternedStr;
