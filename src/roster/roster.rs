//! Roster type combining the intern pool with the sorted-array set.

use std::fmt;
use std::sync::Arc;

use crate::intern::{InternPool, InternedStr};
use crate::set::{SortedArraySet, SortedArraySetIter};

/// A named list of members with canonicalized, sorted, deduplicated storage.
///
/// Every name added to a roster is first canonicalized through the roster's
/// [`InternPool`], so rosters sharing a pool also share the heap bytes of
/// their common names. Member storage is a
/// [`SortedArraySet`], so enumeration is always ascending and the footprint
/// stays trimmed to the member count.
///
/// Equality compares the roster name and members; which pool produced the
/// handles does not matter.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use leanset::intern::InternPool;
/// use leanset::roster::Roster;
///
/// let pool = Arc::new(InternPool::new());
/// let mut roster = Roster::new("regulars", pool);
///
/// assert!(roster.add_member("road"));
/// assert!(roster.add_member("bob"));
/// assert!(!roster.add_member("bob")); // already a member
///
/// let members: Vec<&str> = roster.iter().map(|name| name.as_str()).collect();
/// assert_eq!(members, vec!["bob", "road"]);
/// ```
#[derive(Clone)]
pub struct Roster {
    name: String,
    members: SortedArraySet<InternedStr>,
    pool: Arc<InternPool>,
}

impl Roster {
    /// Creates an empty roster that canonicalizes names through `pool`.
    #[must_use]
    pub fn new(name: impl Into<String>, pool: Arc<InternPool>) -> Self {
        Self {
            name: name.into(),
            members: SortedArraySet::new(),
            pool,
        }
    }

    /// Creates a roster pre-populated from an iterator of names.
    ///
    /// Names are interned and deduplicated in one batch, so building a
    /// roster from a snapshot costs one sort rather than one insertion per
    /// name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use leanset::intern::InternPool;
    /// use leanset::roster::Roster;
    ///
    /// let pool = Arc::new(InternPool::new());
    /// let roster = Roster::from_members(
    ///     "veterans",
    ///     pool,
    ///     ["PhanaticD", "Aikar", "PhanaticD"],
    /// );
    ///
    /// assert_eq!(roster.len(), 2);
    /// ```
    #[must_use]
    pub fn from_members<I, S>(name: impl Into<String>, pool: Arc<InternPool>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let interned: Vec<InternedStr> = members
            .into_iter()
            .map(|member| pool.intern(member.as_ref()))
            .collect();

        Self {
            name: name.into(),
            members: SortedArraySet::from(interned),
            pool,
        }
    }

    /// Returns the roster's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pool this roster canonicalizes names through.
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &Arc<InternPool> {
        &self.pool
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the roster has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `name` is a member.
    ///
    /// Probes by content without interning, so asking about an unknown name
    /// never grows the pool.
    #[inline]
    #[must_use]
    pub fn contains_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Adds a member, canonicalizing the name first.
    ///
    /// # Returns
    ///
    /// `true` if the name was not yet a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use leanset::intern::InternPool;
    /// use leanset::roster::Roster;
    ///
    /// let mut roster = Roster::new("staff", Arc::new(InternPool::new()));
    /// assert!(roster.add_member("md_5"));
    /// assert!(!roster.add_member("md_5"));
    /// ```
    pub fn add_member(&mut self, name: &str) -> bool {
        let canonical = self.pool.intern(name);
        self.members.insert(canonical)
    }

    /// Adds every name in a batch, canonicalizing each and paying one sort
    /// for the whole batch.
    ///
    /// # Returns
    ///
    /// `true` if at least one name was not yet a member.
    pub fn add_members<I, S>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical: Vec<InternedStr> = names
            .into_iter()
            .map(|name| self.pool.intern(name.as_ref()))
            .collect();
        self.members.insert_all(canonical)
    }

    /// Removes a member by name.
    ///
    /// Probes by content without interning; removing a name that was never
    /// added is a no-op that does not grow the pool.
    ///
    /// # Returns
    ///
    /// `true` if the name was a member and is now removed.
    pub fn remove_member(&mut self, name: &str) -> bool {
        self.members.remove(name)
    }

    /// Removes every listed name that is currently a member, in one pass.
    ///
    /// # Returns
    ///
    /// `true` if at least one member was removed.
    pub fn remove_members<'a, I>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.members.remove_all(names)
    }

    /// Returns the members as an ascending slice of canonical handles.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[InternedStr] {
        self.members.as_slice()
    }

    /// Returns an iterator over the members in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedArraySetIter<'_, InternedStr> {
        self.members.iter()
    }

    /// Removes all members and releases the member storage.
    ///
    /// Pooled strings stay interned; only this roster's handles are
    /// dropped.
    pub fn clear_members(&mut self) {
        self.members.clear();
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Roster")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Roster {
    /// Name and membership equality; the pool is plumbing and does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.members == other.members
    }
}

impl Eq for Roster {}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a InternedStr;
    type IntoIter = SortedArraySetIter<'a, InternedStr>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Roster: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pool() -> Arc<InternPool> {
        Arc::new(InternPool::new())
    }

    #[rstest]
    fn test_new_roster_is_empty_and_named() {
        let roster = Roster::new("regulars", pool());
        assert_eq!(roster.name(), "regulars");
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[rstest]
    fn test_add_member_reports_membership_change() {
        let mut roster = Roster::new("staff", pool());
        assert!(roster.add_member("bob"));
        assert!(!roster.add_member("bob"));
        assert_eq!(roster.len(), 1);
    }

    #[rstest]
    fn test_members_enumerate_in_ascending_order() {
        let mut roster = Roster::new("staff", pool());
        roster.add_member("test");
        roster.add_member("bob");
        roster.add_member("road");

        let names: Vec<&str> = roster.iter().map(|name| name.as_str()).collect();
        assert_eq!(names, vec!["bob", "road", "test"]);
    }

    #[rstest]
    fn test_from_members_interns_and_deduplicates() {
        let pool = pool();
        let roster = Roster::from_members(
            "founders",
            Arc::clone(&pool),
            ["Techcable", "Aikar", "Techcable"],
        );

        assert_eq!(roster.len(), 2);
        assert_eq!(pool.len(), 2);
        assert!(roster.contains_member("Aikar"));
    }

    #[rstest]
    fn test_add_members_batches_with_single_result() {
        let mut roster = Roster::from_members("staff", pool(), ["Techcable"]);
        assert!(roster.add_members(["PhanaticD", "Dragonslayer293", "Aikar"]));
        assert_eq!(roster.len(), 4);

        assert!(!roster.add_members(["Aikar", "Techcable"]));
        assert_eq!(roster.len(), 4);
    }

    #[rstest]
    #[case::member("bob", true)]
    #[case::stranger("md_5", false)]
    #[case::stranger_lowercase("techcable", false)]
    fn test_contains_member_probes_by_content(#[case] name: &str, #[case] expected: bool) {
        let roster = Roster::from_members("staff", pool(), ["bob", "Techcable"]);
        assert_eq!(roster.contains_member(name), expected);
    }

    #[rstest]
    fn test_contains_probe_does_not_grow_pool() {
        let pool = pool();
        let roster = Roster::from_members("staff", Arc::clone(&pool), ["bob"]);

        assert!(!roster.contains_member("md_5"));
        assert_eq!(pool.len(), 1);
    }

    #[rstest]
    fn test_remove_absent_member_does_not_grow_pool() {
        let pool = pool();
        let mut roster = Roster::from_members("staff", Arc::clone(&pool), ["bob"]);

        assert!(!roster.remove_member("stupid"));
        assert_eq!(pool.len(), 1);
        assert_eq!(roster.len(), 1);
    }

    #[rstest]
    fn test_remove_member_by_content() {
        let mut roster = Roster::from_members("staff", pool(), ["bob", "road"]);
        assert!(roster.remove_member("road"));
        assert!(!roster.contains_member("road"));
        assert_eq!(roster.len(), 1);
    }

    #[rstest]
    fn test_remove_members_filters_in_one_pass() {
        let mut roster =
            Roster::from_members("staff", pool(), ["bob", "road", "test", "food"]);
        assert!(roster.remove_members(["road", "food", "md_5"]));

        let names: Vec<&str> = roster.iter().map(|name| name.as_str()).collect();
        assert_eq!(names, vec!["bob", "test"]);
    }

    #[rstest]
    fn test_rosters_on_shared_pool_share_name_allocations() {
        let pool = pool();
        let mut first = Roster::new("first", Arc::clone(&pool));
        let mut second = Roster::new("second", Arc::clone(&pool));

        first.add_member("Aikar");
        second.add_member("Aikar");

        assert_eq!(pool.len(), 1);
        assert!(first.members()[0].shares_allocation_with(&second.members()[0]));
    }

    #[rstest]
    fn test_clear_members_keeps_pool_entries() {
        let pool = pool();
        let mut roster = Roster::from_members("staff", Arc::clone(&pool), ["bob", "road"]);

        roster.clear_members();
        assert!(roster.is_empty());
        assert_eq!(roster.name(), "staff");
        assert_eq!(pool.len(), 2);
    }

    #[rstest]
    fn test_equality_ignores_pool_identity() {
        let first = Roster::from_members("staff", pool(), ["bob"]);
        let second = Roster::from_members("staff", pool(), ["bob"]);
        assert_eq!(first, second);

        let renamed = Roster::from_members("admins", pool(), ["bob"]);
        assert_ne!(first, renamed);
    }

    #[rstest]
    fn test_clone_shares_pool() {
        let mut roster = Roster::from_members("staff", pool(), ["bob"]);
        let cloned = roster.clone();

        roster.add_member("road");
        assert_eq!(roster.pool().len(), 2);
        assert!(Arc::ptr_eq(roster.pool(), cloned.pool()));
    }
}
