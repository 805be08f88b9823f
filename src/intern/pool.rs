//! String pool and the shared-allocation handle it produces.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashSet;

/// A thread-safe, append-only pool of canonical strings.
///
/// [`intern`](Self::intern) returns an [`InternedStr`] handle; equal content
/// interned through the same pool always yields handles sharing one
/// allocation, no matter how the lookups interleave across threads.
///
/// The pool is an explicit value, not a process singleton: construct one,
/// wrap it in an [`Arc`], and hand it to every component that should share
/// canonical strings. Components given different pools still interoperate
/// (handles compare by content), they merely stop sharing memory.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use leanset::intern::InternPool;
///
/// let pool = Arc::new(InternPool::new());
///
/// let one = pool.intern("md_5");
/// let two = pool.intern("md_5");
/// assert_eq!(one, two);
/// assert!(one.shares_allocation_with(&two));
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Default)]
pub struct InternPool {
    strings: RwLock<FxHashSet<Arc<str>>>,
}

impl InternPool {
    /// Creates a new empty pool.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical handle for `value`, interning it on first use.
    ///
    /// The common path takes the read lock only. On a miss the pool
    /// re-checks under the write lock before allocating, so two threads
    /// racing to intern the same content still end up with one shared
    /// allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::intern::InternPool;
    ///
    /// let pool = InternPool::new();
    /// let name = pool.intern("Techcable");
    /// assert_eq!(name.as_str(), "Techcable");
    /// ```
    pub fn intern(&self, value: &str) -> InternedStr {
        if let Some(existing) = self.strings.read().get(value) {
            return InternedStr(Arc::clone(existing));
        }

        let mut strings = self.strings.write();
        // Another thread may have interned the same content between the
        // read probe above and acquiring the write lock.
        if let Some(existing) = strings.get(value) {
            return InternedStr(Arc::clone(existing));
        }

        let shared: Arc<str> = Arc::from(value);
        strings.insert(Arc::clone(&shared));
        InternedStr(shared)
    }

    /// Returns the canonical handle for `value` if it is already interned,
    /// without interning it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use leanset::intern::InternPool;
    ///
    /// let pool = InternPool::new();
    /// assert!(pool.get("Dragonslayer293").is_none());
    ///
    /// pool.intern("Dragonslayer293");
    /// assert!(pool.get("Dragonslayer293").is_some());
    /// ```
    #[must_use]
    pub fn get(&self, value: &str) -> Option<InternedStr> {
        self.strings
            .read()
            .get(value)
            .map(|existing| InternedStr(Arc::clone(existing)))
    }

    /// Returns the number of distinct strings interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.read().len()
    }

    /// Returns `true` if nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.read().is_empty()
    }
}

impl fmt::Debug for InternPool {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InternPool")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// A canonical string handle produced by an [`InternPool`].
///
/// Cloning an `InternedStr` bumps a reference count; it never copies the
/// string bytes. Equality, ordering and hashing all follow the string
/// content, so the handle behaves like the `&str` it wraps everywhere a
/// borrowed lookup is involved. In particular, a
/// [`SortedArraySet<InternedStr>`](crate::SortedArraySet) can be probed
/// with a plain `&str`.
///
/// # Examples
///
/// ```rust
/// use leanset::SortedArraySet;
/// use leanset::intern::InternPool;
///
/// let pool = InternPool::new();
/// let mut names: SortedArraySet<_> = SortedArraySet::new();
/// names.insert(pool.intern("road"));
/// names.insert(pool.intern("bob"));
///
/// assert!(names.contains("bob"));
/// assert_eq!(names.first().map(|name| name.as_str()), Some("bob"));
/// ```
#[derive(Clone)]
pub struct InternedStr(Arc<str>);

impl InternedStr {
    /// Returns the string content.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if both handles point at the same allocation.
    ///
    /// This observes the pool's memory sharing; it is not an equality test.
    /// Handles with equal content from different pools compare equal while
    /// occupying separate allocations.
    #[inline]
    #[must_use]
    pub fn shares_allocation_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for InternedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InternedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for InternedStr {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq for InternedStr {
    /// Content equality, with a pointer comparison as the fast path for
    /// handles from the same pool.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for InternedStr {}

impl PartialEq<str> for InternedStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InternedStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for InternedStr {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InternedStr {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for InternedStr {
    /// Hashes the string content, keeping `Hash` consistent with the
    /// `Borrow<str>` lookups used by hashed collections.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for InternedStr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), formatter)
    }
}

impl fmt::Debug for InternedStr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), formatter)
    }
}

static_assertions::assert_impl_all!(InternPool: Send, Sync);
static_assertions::assert_impl_all!(InternedStr: Send, Sync, Clone);
