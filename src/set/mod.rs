//! Sorted-array set.
//!
//! This module provides [`SortedArraySet`], a mutable set stored as a
//! sorted, deduplicated `Vec` and searched by binary search:
//!
//! - [`SortedArraySet`]: the set itself
//! - [`SortedArraySetIter`] / [`SortedArraySetIntoIter`]: ascending iteration
//! - [`SortedArraySetCursor`]: a mutable cursor that can remove the element
//!   it last yielded
//!
//! # Memory Model
//!
//! A hash set spends memory on bucket arrays, load-factor headroom and
//! per-entry nodes even when it holds three elements. `SortedArraySet`
//! spends memory on the elements alone: the backing `Vec` is kept sorted and
//! duplicate-free, and its capacity is trimmed back to the logical size
//! after growth and after large removals. A removing call shrinks capacity
//! only when it removed more than [`TRIM_THRESHOLD`] elements, so a run of
//! small removals does not re-allocate each time; the slack can be released
//! eagerly with the aggressive trim policy or an explicit
//! [`trim`](SortedArraySet::trim). The price is O(n) single-element
//! insertion and removal, which targets workloads that are read-heavy and
//! mutate rarely.
//!
//! # Examples
//!
//! ```rust
//! use leanset::SortedArraySet;
//!
//! let mut set: SortedArraySet<String> = SortedArraySet::new();
//! set.insert("road".to_string());
//! set.insert("bob".to_string());
//! set.insert("test".to_string());
//!
//! // Ascending iteration, borrowed lookups
//! assert_eq!(set.to_vec(), vec!["bob", "road", "test"]);
//! assert!(set.contains("bob"));
//!
//! // Capacity tracks length after insertions
//! assert_eq!(set.capacity(), set.len());
//! ```

mod sorted_array_set;

pub use sorted_array_set::SortedArraySet;
pub use sorted_array_set::SortedArraySetCursor;
pub use sorted_array_set::SortedArraySetIntoIter;
pub use sorted_array_set::SortedArraySetIter;
pub use sorted_array_set::TRIM_THRESHOLD;
