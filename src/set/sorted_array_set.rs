//! Mutable set backed by a sorted, deduplicated vector.
//!
//! This module provides [`SortedArraySet`], a set representation chosen for
//! steady-state memory footprint rather than mutation throughput. The
//! elements live in one contiguous `Vec`, kept strictly ascending and
//! duplicate-free, so the same storage simultaneously serves as a set and as
//! a sorted sequence.
//!
//! # Overview
//!
//! `SortedArraySet` keeps small sets cheap by:
//! - Storing elements contiguously with no per-entry wrapper or bucket
//!   overhead
//! - Answering membership with binary search over the backing vector
//! - Trimming backing capacity back to the logical size after growth and
//!   after large removals
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity                         |
//! |----------------------------|------------------------------------|
//! | `contains`                 | O(log n)                           |
//! | `insert`                   | O(n)                               |
//! | `insert_all` (batch of m)  | O((n + m) log (n + m))             |
//! | `remove`                   | O(n)                               |
//! | `remove_all` / `retain_all`| O(m log m + n)                     |
//! | `remove_if`                | O(n)                               |
//! | `len` / `first` / `last`   | O(1)                               |
//! | `iter`                     | O(1) + O(n) traversal              |
//!
//! **Note**: a successful `insert` may re-allocate twice (growth, then the
//! forced capacity trim). That cost is deliberate: the target workload holds
//! many long-lived sets that are enumerated and queried far more often than
//! they are mutated, and batch insertion through [`SortedArraySet::insert_all`]
//! pays the sort once per batch rather than once per element.
//!
//! # Capacity Trimming
//!
//! Construction, [`clear`](SortedArraySet::clear) and the insert family
//! always shrink capacity to the logical size. The remove family shrinks
//! only when a single call removed more than [`TRIM_THRESHOLD`] elements,
//! leaving slack in place so a run of small removals does not re-allocate
//! every time. Constructing the set with
//! [`with_aggressive_trim`](SortedArraySet::with_aggressive_trim) upgrades
//! every mutating call to an unconditional shrink.
//!
//! # Examples
//!
//! ```rust
//! use leanset::SortedArraySet;
//!
//! let mut set: SortedArraySet<i32> = SortedArraySet::new();
//! assert!(set.insert(3));
//! assert!(set.insert(1));
//! assert!(set.insert(2));
//!
//! // Duplicate insertion reports "no change"
//! assert!(!set.insert(2));
//!
//! // Always ascending, always deduplicated
//! assert_eq!(set.to_vec(), vec![1, 2, 3]);
//!
//! // Capacity tracks length after the insert family
//! assert_eq!(set.capacity(), set.len());
//! ```

use std::borrow::Borrow;
use std::fmt;

/// Number of elements a single removing call must exceed before the backing
/// storage is shrunk to fit. Below this, slack capacity is kept so that a
/// run of small removals does not re-allocate on every call.
pub const TRIM_THRESHOLD: usize = 10;

/// Message for the panic raised when `remove_current` is called without a
/// preceding successful `advance`.
const CURSOR_REMOVE_PANIC_MESSAGE: &str =
    "remove_current requires an element yielded by advance that has not already been removed";

/// A mutable set stored as a sorted, deduplicated vector.
///
/// Membership is answered by binary search, iteration is always ascending,
/// and the backing vector's capacity is trimmed to the logical size after
/// growth and after large removals, so the steady-state footprint is the
/// elements themselves.
///
/// A `SortedArraySet` is exclusively owned: every mutating operation takes
/// `&mut self`, so the borrow checker enforces that a single instance is
/// never mutated concurrently. Distinct instances share no internal state
/// and may be used from different threads freely.
///
/// Equality compares contents only; the trim policy flag is configuration
/// and does not participate.
///
/// # Type Parameters
///
/// * `T` - The element type. Search-based operations require `T: Ord`.
///
/// # Examples
///
/// ```rust
/// use leanset::SortedArraySet;
///
/// let mut set: SortedArraySet<String> = SortedArraySet::new();
/// set.insert("road".to_string());
/// set.insert("bob".to_string());
///
/// // Borrowed lookups: probe a String set with &str
/// assert!(set.contains("bob"));
/// assert!(!set.contains("stupid"));
///
/// assert_eq!(set.to_vec(), vec!["bob", "road"]);
/// ```
#[derive(Clone)]
pub struct SortedArraySet<T> {
    /// Strictly ascending, duplicate-free element storage.
    backing: Vec<T>,
    /// When set, every mutating call shrinks capacity to the logical size.
    trim_aggressively: bool,
}

impl<T> SortedArraySet<T> {
    /// Creates a new empty set with the default trim policy.
    ///
    /// The empty set owns no heap allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = SortedArraySet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backing: Vec::new(),
            trim_aggressively: false,
        }
    }

    /// Creates a new empty set that shrinks capacity on every mutating call.
    ///
    /// Aggressive trimming maximizes memory savings at the cost of a
    /// re-allocation on nearly every mutation; prefer the default policy
    /// unless the set is mutated very rarely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = SortedArraySet::with_aggressive_trim();
    /// assert!(set.is_aggressive_trim());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_aggressive_trim() -> Self {
        Self {
            backing: Vec::new(),
            trim_aggressively: true,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = vec![2, 1, 2].into();
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = SortedArraySet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Returns the capacity of the backing storage.
    ///
    /// Immediately after construction, [`clear`](Self::clear), an insert, or
    /// any forced trim, the capacity equals [`len`](Self::len); after small
    /// removals it may exceed it by the slack described in the module
    /// documentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = vec![1, 2, 3].into();
    /// assert_eq!(set.capacity(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.backing.capacity()
    }

    /// Returns `true` if every mutating call shrinks capacity to fit.
    #[inline]
    #[must_use]
    pub const fn is_aggressive_trim(&self) -> bool {
        self.trim_aggressively
    }

    /// Sets the aggressive-trim policy.
    ///
    /// The policy takes effect from the next mutating call; call
    /// [`trim`](Self::trim) for an immediate shrink.
    #[inline]
    pub fn set_aggressive_trim(&mut self, aggressive: bool) {
        self.trim_aggressively = aggressive;
    }

    /// Shrinks the backing capacity to the logical size now.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<i32> = (0..20).collect();
    /// set.remove(&0);
    /// assert!(set.capacity() > set.len());
    ///
    /// set.trim();
    /// assert_eq!(set.capacity(), set.len());
    /// ```
    #[inline]
    pub fn trim(&mut self) {
        self.backing.shrink_to_fit();
    }

    /// Returns the elements as a slice in ascending order.
    ///
    /// This is a zero-copy view of the backing storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = vec![3, 1, 2].into();
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.backing
    }

    /// Returns a reference to the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.backing.first()
    }

    /// Returns a reference to the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.backing.last()
    }

    /// Returns an iterator over references to the elements in ascending
    /// order.
    ///
    /// The iterator is lazy, finite, and freshly restartable: each call to
    /// `iter` starts a new pass over the current contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = vec![2, 3, 1].into();
    /// let doubled: Vec<i32> = set.iter().map(|element| element * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedArraySetIter<'_, T> {
        SortedArraySetIter {
            inner: self.backing.iter(),
        }
    }

    /// Returns an ascending `Vec` containing clones of all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = vec![3, 1, 2].into();
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.backing.to_vec()
    }

    /// Returns a mutable cursor positioned before the first element.
    ///
    /// The cursor walks the set in ascending order via
    /// [`advance`](SortedArraySetCursor::advance) and can remove the element
    /// it last yielded via
    /// [`remove_current`](SortedArraySetCursor::remove_current). Removing an
    /// element never violates sortedness, so the walk continues seamlessly
    /// after a removal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<i32> = (1..=6).collect();
    /// let mut cursor = set.cursor_mut();
    /// while let Some(&element) = cursor.advance() {
    ///     if element % 2 == 0 {
    ///         cursor.remove_current();
    ///     }
    /// }
    /// assert_eq!(set.to_vec(), vec![1, 3, 5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn cursor_mut(&mut self) -> SortedArraySetCursor<'_, T> {
        SortedArraySetCursor {
            set: self,
            next_index: 0,
            removable: false,
        }
    }

    /// Removes every element satisfying the predicate in one pass.
    ///
    /// Applies the conditional trim policy based on how many elements were
    /// removed by this call.
    ///
    /// # Returns
    ///
    /// `true` if at least one element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<i32> = (1..=10).collect();
    /// assert!(set.remove_if(|element| element % 2 == 0));
    /// assert_eq!(set.to_vec(), vec![1, 3, 5, 7, 9]);
    ///
    /// // Nothing matches: no change
    /// assert!(!set.remove_if(|element| *element > 100));
    /// ```
    pub fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let length_before = self.backing.len();
        self.backing.retain(|element| !predicate(element));
        let removed = length_before - self.backing.len();
        self.trim_after_removal(removed);
        removed > 0
    }

    /// Empties the set and releases the backing allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<i32> = (0..100).collect();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.backing.clear();
        self.backing.shrink_to_fit();
    }

    /// Removes the element at `index` and applies the conditional trim
    /// policy for a single-element removal.
    fn remove_at(&mut self, index: usize) -> T {
        let element = self.backing.remove(index);
        self.trim_after_removal(1);
        element
    }

    /// Shrinks capacity to fit if this call removed more than
    /// [`TRIM_THRESHOLD`] elements, or unconditionally under the aggressive
    /// policy.
    fn trim_after_removal(&mut self, removed: usize) {
        if self.trim_aggressively || removed > TRIM_THRESHOLD {
            self.backing.shrink_to_fit();
        }
    }
}

impl<T: Ord> SortedArraySet<T> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Ord` on the borrowed form must match `Ord` on the element type. For
    /// example, a `SortedArraySet<String>` can be probed with a plain
    /// `&str`.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons (binary search).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let set: SortedArraySet<String> =
    ///     ["test", "bob", "road"].into_iter().map(String::from).collect();
    ///
    /// assert!(set.contains("test"));
    /// assert!(!set.contains("stupid"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.backing
            .binary_search_by(|item| item.borrow().cmp(element))
            .is_ok()
    }

    /// Inserts an element into the set.
    ///
    /// If the element is already present the call is a no-op and returns
    /// `false`. Otherwise the element is placed at its sorted position, the
    /// backing capacity is trimmed to fit, and the call returns `true`.
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) shift; a successful insert may re-allocate
    /// twice (growth, then the forced trim). Use
    /// [`insert_all`](Self::insert_all) to amortize over a batch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<i32> = SortedArraySet::new();
    /// assert!(set.insert(2));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(2)); // already present
    ///
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// assert_eq!(set.capacity(), set.len());
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.backing.binary_search(&element) {
            Ok(_) => false,
            Err(position) => {
                self.backing.insert(position, element);
                self.backing.shrink_to_fit();
                self.debug_assert_strictly_ascending();
                true
            }
        }
    }

    /// Inserts every element of a batch, sorting and deduplicating once.
    ///
    /// Elements already present are skipped. If nothing new was staged the
    /// call is a no-op and returns `false`; otherwise the whole backing
    /// vector is re-sorted, deduplicated and trimmed exactly once for the
    /// batch, and the call returns `true`.
    ///
    /// # Complexity
    ///
    /// O(m log n) duplicate probing plus one O((n + m) log (n + m)) sort for
    /// a batch of m elements; the sort is paid per batch, not per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<String> =
    ///     ["Techcable"].into_iter().map(String::from).collect();
    ///
    /// let names = ["Techcable", "PhanaticD", "Aikar"].map(String::from);
    /// assert!(set.insert_all(names));
    /// assert_eq!(set.len(), 3);
    ///
    /// // Every element already present: no change
    /// assert!(!set.insert_all(["Aikar".to_string()]));
    /// ```
    pub fn insert_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let sorted_length = self.backing.len();
        for element in elements {
            // Probe the sorted prefix only; staged elements are appended
            // unsorted and deduplicated by the batch sort below.
            if self.backing[..sorted_length].binary_search(&element).is_err() {
                self.backing.push(element);
            }
        }

        if self.backing.len() == sorted_length {
            return false;
        }

        self.backing.sort_unstable();
        self.backing.dedup();
        self.backing.shrink_to_fit();
        self.debug_assert_strictly_ascending();
        true
    }

    /// Removes an element from the set.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Ord` on the borrowed form must match `Ord` on the element type.
    ///
    /// Applies the conditional trim policy for a single-element removal
    /// (under the default policy a lone removal never shrinks capacity).
    ///
    /// # Returns
    ///
    /// `true` if the element was present and removed, `false` if it was not
    /// present.
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<String> =
    ///     ["test", "bob"].into_iter().map(String::from).collect();
    ///
    /// assert!(set.remove("test"));
    /// assert!(!set.remove("test")); // already gone
    /// assert!(!set.contains("test"));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self
            .backing
            .binary_search_by(|item| item.borrow().cmp(element))
        {
            Ok(position) => {
                self.remove_at(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every element of the set that appears in the input, in one
    /// filtering pass.
    ///
    /// The input is an iterator of borrowed probes, so a
    /// `SortedArraySet<String>` can be bulk-filtered by plain `&str` names.
    /// Applies the conditional trim policy based on the total number of
    /// elements removed by this call.
    ///
    /// # Returns
    ///
    /// `true` if at least one element was removed.
    ///
    /// # Complexity
    ///
    /// O(m log m) to sort the m probes, then one O(n + m) two-pointer pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<String> =
    ///     ["road", "food", "pain", "bob"].into_iter().map(String::from).collect();
    ///
    /// assert!(set.remove_all(["road", "food", "pain"]));
    /// assert_eq!(set.to_vec(), vec!["bob"]);
    ///
    /// // Nothing present: no change
    /// assert!(!set.remove_all(["road"]));
    /// ```
    pub fn remove_all<'a, Q, I>(&mut self, elements: I) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        let probes = collect_sorted_probes(elements);
        let length_before = self.backing.len();

        // Both sequences are ascending, so one forward pass suffices:
        // retain visits elements in order while the probe index only moves
        // forward.
        let mut probe_index = 0;
        self.backing.retain(|element| {
            let key = element.borrow();
            while probes
                .get(probe_index)
                .is_some_and(|&candidate| candidate < key)
            {
                probe_index += 1;
            }
            probes
                .get(probe_index)
                .is_none_or(|&candidate| candidate != key)
        });

        let removed = length_before - self.backing.len();
        self.trim_after_removal(removed);
        removed > 0
    }

    /// Removes every element of the set that does **not** appear in the
    /// input, in one filtering pass.
    ///
    /// Applies the conditional trim policy based on the total number of
    /// elements removed by this call.
    ///
    /// # Returns
    ///
    /// `true` if at least one element was removed.
    ///
    /// # Complexity
    ///
    /// O(m log m) to sort the m probes, then one O(n + m) two-pointer pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::SortedArraySet;
    ///
    /// let mut set: SortedArraySet<i32> = (1..=10).collect();
    /// assert!(set.retain_all(&[2, 4, 6, 99]));
    /// assert_eq!(set.to_vec(), vec![2, 4, 6]);
    ///
    /// // Everything already retained: no change
    /// assert!(!set.retain_all(&[2, 4, 6]));
    /// ```
    pub fn retain_all<'a, Q, I>(&mut self, elements: I) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        let probes = collect_sorted_probes(elements);
        let length_before = self.backing.len();

        let mut probe_index = 0;
        self.backing.retain(|element| {
            let key = element.borrow();
            while probes
                .get(probe_index)
                .is_some_and(|&candidate| candidate < key)
            {
                probe_index += 1;
            }
            probes
                .get(probe_index)
                .is_some_and(|&candidate| candidate == key)
        });

        let removed = length_before - self.backing.len();
        self.trim_after_removal(removed);
        removed > 0
    }

    /// Debug-build check that the backing vector is strictly ascending.
    #[inline]
    fn debug_assert_strictly_ascending(&self) {
        debug_assert!(
            self.backing.windows(2).all(|window| window[0] < window[1]),
            "backing storage must stay strictly ascending and duplicate-free"
        );
    }
}

/// Collects an iterator of borrowed probes into a sorted, deduplicated
/// vector for two-pointer filtering.
fn collect_sorted_probes<'a, Q, I>(elements: I) -> Vec<&'a Q>
where
    Q: Ord + ?Sized + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    let mut probes: Vec<&Q> = elements.into_iter().collect();
    probes.sort_unstable();
    probes.dedup();
    probes
}

impl<T> Default for SortedArraySet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SortedArraySet<T> {
    /// Contents-only equality: two sets with equal elements are equal even
    /// if their trim policies differ.
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<T: Eq> Eq for SortedArraySet<T> {}

impl<T: Ord> From<Vec<T>> for SortedArraySet<T> {
    /// Builds a set from an arbitrary vector: one sort, one deduplication
    /// pass, one forced trim.
    fn from(mut elements: Vec<T>) -> Self {
        elements.sort_unstable();
        elements.dedup();
        elements.shrink_to_fit();
        let set = Self {
            backing: elements,
            trim_aggressively: false,
        };
        set.debug_assert_strictly_ascending();
        set
    }
}

impl<T: Ord> FromIterator<T> for SortedArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from(iterator.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for SortedArraySet<T> {
    /// Equivalent to [`insert_all`](SortedArraySet::insert_all).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.insert_all(iterator);
    }
}

impl<'a, T> IntoIterator for &'a SortedArraySet<T> {
    type Item = &'a T;
    type IntoIter = SortedArraySetIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SortedArraySet<T> {
    type Item = T;
    type IntoIter = SortedArraySetIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedArraySetIntoIter {
            inner: self.backing.into_iter(),
        }
    }
}

/// Iterator over references to the elements of a [`SortedArraySet`] in
/// ascending order.
pub struct SortedArraySetIter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedArraySetIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedArraySetIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of a [`SortedArraySet`] in ascending
/// order.
pub struct SortedArraySetIntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedArraySetIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedArraySetIntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// A mutable cursor over a [`SortedArraySet`] that can remove the element it
/// last yielded.
///
/// The cursor walks the set in ascending order. After a successful
/// [`advance`](Self::advance), [`remove_current`](Self::remove_current)
/// removes the element that `advance` just yielded; the walk then continues
/// with the element that followed it. This is the safe-removal counterpart
/// to plain iteration: the cursor holds the set's unique borrow, so the set
/// cannot be observed in a half-mutated state.
///
/// # Examples
///
/// ```rust
/// use leanset::SortedArraySet;
///
/// let mut set: SortedArraySet<String> =
///     ["sleep", "sore-thought", "pain"].into_iter().map(String::from).collect();
///
/// let mut cursor = set.cursor_mut();
/// while let Some(name) = cursor.advance() {
///     if name.starts_with("so") {
///         cursor.remove_current();
///     }
/// }
/// assert_eq!(set.to_vec(), vec!["pain", "sleep"]);
/// ```
pub struct SortedArraySetCursor<'a, T> {
    set: &'a mut SortedArraySet<T>,
    /// Index of the next element to yield.
    next_index: usize,
    /// Whether the element before `next_index` was yielded and not yet
    /// removed.
    removable: bool,
}

impl<T> SortedArraySetCursor<'_, T> {
    /// Advances to the next element and returns a reference to it, or
    /// `None` once the walk is exhausted.
    pub fn advance(&mut self) -> Option<&T> {
        let element = self.set.backing.get(self.next_index)?;
        self.next_index += 1;
        self.removable = true;
        Some(element)
    }

    /// Removes and returns the element most recently yielded by
    /// [`advance`](Self::advance).
    ///
    /// Removal through the cursor applies the same conditional trim policy
    /// as [`SortedArraySet::remove`].
    ///
    /// # Panics
    ///
    /// Panics if no element has been yielded yet, or if the last-yielded
    /// element was already removed. Both are caller misuse; the failure is
    /// immediate rather than silently corrupting the walk.
    pub fn remove_current(&mut self) -> T {
        assert!(self.removable, "{CURSOR_REMOVE_PANIC_MESSAGE}");
        self.removable = false;
        self.next_index -= 1;
        self.set.remove_at(self.next_index)
    }
}

static_assertions::assert_impl_all!(SortedArraySet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SortedArraySet<String>: Send, Sync);
