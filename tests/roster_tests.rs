#![cfg(feature = "roster")]
//! Integration tests for Roster.
//!
//! Exercises the composed behavior: names flow through a shared intern pool
//! into per-roster sorted sets, so replaying many overlapping rosters shares
//! string storage while each roster keeps an independent, trimmed
//! membership.

use std::sync::Arc;

use leanset::intern::InternPool;
use leanset::roster::Roster;
use rstest::rstest;

#[rstest]
fn test_membership_walkthrough() {
    let pool = Arc::new(InternPool::new());
    let mut roster = Roster::new("regulars", pool);

    for name in ["test", "bob", "road", "food", "sleep", "sore-thought", "pain"] {
        assert!(roster.add_member(name));
    }

    assert_eq!(roster.len(), 7);
    assert!(roster.contains_member("sore-thought"));
    assert!(!roster.contains_member("md_5"));
    assert!(!roster.contains_member("stupid"));

    assert!(roster.remove_member("test"));
    assert!(!roster.remove_member("test"));

    let names: Vec<&str> = roster.iter().map(|name| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["bob", "food", "pain", "road", "sleep", "sore-thought"]
    );
}

#[rstest]
fn test_batch_add_pays_one_sort_and_reports_once() {
    let pool = Arc::new(InternPool::new());
    let mut roster = Roster::from_members("staff", pool, ["Techcable"]);

    assert!(roster.add_members(["PhanaticD", "Dragonslayer293", "Aikar", "Techcable"]));
    assert_eq!(roster.len(), 4);

    let names: Vec<&str> = roster.iter().map(|name| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Aikar", "Dragonslayer293", "PhanaticD", "Techcable"]
    );

    assert!(!roster.add_members(["Aikar", "PhanaticD"]));
}

#[rstest]
fn test_replaying_overlapping_rosters_shares_name_storage() {
    let pool = Arc::new(InternPool::new());
    let snapshot = ["Techcable", "PhanaticD", "Dragonslayer293", "Aikar"];

    let rosters: Vec<Roster> = (0..100)
        .map(|index| {
            Roster::from_members(format!("team-{index}"), Arc::clone(&pool), snapshot)
        })
        .collect();

    // 100 rosters, four distinct names, four pooled strings
    assert_eq!(pool.len(), snapshot.len());

    let canonical = pool.get("Aikar").unwrap();
    for roster in &rosters {
        let aikar = &roster.members()[0];
        assert_eq!(aikar.as_str(), "Aikar");
        assert!(aikar.shares_allocation_with(&canonical));
    }
}

#[rstest]
fn test_probes_for_unknown_names_never_touch_the_pool() {
    let pool = Arc::new(InternPool::new());
    let mut roster = Roster::from_members("staff", Arc::clone(&pool), ["bob", "road"]);
    assert_eq!(pool.len(), 2);

    assert!(!roster.contains_member("md_5"));
    assert!(!roster.remove_member("stupid"));
    assert!(!roster.remove_members(["md_5", "stupid"]));

    assert_eq!(pool.len(), 2);
    assert_eq!(roster.len(), 2);
}

#[rstest]
fn test_remove_members_filters_in_one_pass() {
    let pool = Arc::new(InternPool::new());
    let mut roster = Roster::from_members(
        "regulars",
        pool,
        ["test", "bob", "road", "food", "sleep", "sore-thought", "pain"],
    );

    assert!(roster.remove_members(["sleep", "sore-thought", "pain", "md_5"]));

    let names: Vec<&str> = roster.iter().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["bob", "food", "road", "test"]);
}

#[rstest]
fn test_clear_members_keeps_the_roster_usable() {
    let pool = Arc::new(InternPool::new());
    let mut roster = Roster::from_members("staff", Arc::clone(&pool), ["bob", "road"]);

    roster.clear_members();
    assert!(roster.is_empty());

    // The pool still holds the vocabulary; re-adding reuses it
    assert_eq!(pool.len(), 2);
    assert!(roster.add_member("bob"));
    assert_eq!(pool.len(), 2);

    let readded = &roster.members()[0];
    let canonical = pool.get("bob").unwrap();
    assert!(readded.shares_allocation_with(&canonical));
}

#[rstest]
fn test_cloned_roster_keeps_canonicalizing_through_the_shared_pool() {
    let pool = Arc::new(InternPool::new());
    let original = Roster::from_members("staff", Arc::clone(&pool), ["bob"]);
    let mut cloned = original.clone();

    cloned.add_member("road");

    assert_eq!(pool.len(), 2);
    assert!(Arc::ptr_eq(original.pool(), cloned.pool()));
    assert_eq!(original.len(), 1);
    assert_eq!(cloned.len(), 2);
}

#[rstest]
fn test_rosters_iterate_with_for_loops() {
    let pool = Arc::new(InternPool::new());
    let roster = Roster::from_members("staff", pool, ["road", "bob"]);

    let mut walked = Vec::new();
    for member in &roster {
        walked.push(member.as_str().to_string());
    }
    assert_eq!(walked, vec!["bob", "road"]);
}
