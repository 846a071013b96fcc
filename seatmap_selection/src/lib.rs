// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=seatmap_selection --heading-base-level=0

//! Seatmap Selection: the set of currently chosen seats.
//!
//! This crate is only the _bookkeeping_ half of seat selection. It stores a
//! duplicate-free list of keys in insertion order plus a revision counter. It
//! knows nothing about seat availability; callers check whether a seat may be
//! chosen before calling [`Selection::insert`].
//!
//! The core type is [`Selection`], which tracks:
//! - The selected keys, unique by equality, in the order they were added.
//! - The most recently added key (handy for "scroll to last pick" UI).
//! - A monotonically increasing **revision** that bumps only on real changes.
//!
//! Keys need nothing beyond `PartialEq`, so string identifiers, integer
//! handles and generational ids all work.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_selection::Selection;
//!
//! let mut selection = Selection::<&str>::new();
//!
//! assert!(selection.insert("A1"));
//! // Selecting the same seat twice is a no-op.
//! assert!(!selection.insert("A1"));
//! assert_eq!(selection.items(), &["A1"]);
//!
//! // Removing something that was never selected is harmless.
//! assert!(!selection.remove(&"Z9"));
//! assert!(selection.remove(&"A1"));
//! assert!(selection.is_empty());
//! ```
//!
//! ## Revisions
//!
//! Observers that re-render on selection changes can compare
//! [`Selection::revision`] against the value they last saw instead of
//! diffing the contents:
//!
//! ```rust
//! use seatmap_selection::Selection;
//!
//! let mut selection = Selection::new();
//! let seen = selection.revision();
//!
//! selection.insert(7_u32);
//! assert_ne!(selection.revision(), seen);
//!
//! let seen = selection.revision();
//! selection.insert(7);
//! assert_eq!(selection.revision(), seen);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// An insertion-ordered, duplicate-free set of keys with a revision counter.
///
/// Uniqueness is enforced by scanning for an equal key on insert. Seat maps
/// hold at most a few dozen picks at a time, so the linear scan stays cheap
/// and keys never need to be `Hash` or `Ord`.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the most recently added key that is still selected.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the current revision counter.
    ///
    /// The counter is local to this instance and bumps only when the set of
    /// selected keys changes. Redundant inserts and removals leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    /// Keeps only the keys for which `keep` returns `true`.
    ///
    /// Insertion order of the surviving keys is preserved.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(keep);
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Appends `key` if it is not already selected.
    ///
    /// Returns `true` when the key was added.
    pub fn insert(&mut self, key: T) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.items.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key` if present.
    ///
    /// Returns `true` when the key was removed. Removing an absent key is
    /// not an error.
    pub fn remove(&mut self, key: &T) -> bool {
        match self.position_of(key) {
            Some(idx) => {
                self.items.remove(idx);
                self.bump_revision();
                true
            }
            None => false,
        }
    }

    /// Adds `key` if absent, removes it otherwise.
    ///
    /// Returns `true` if the key is selected afterwards.
    pub fn toggle(&mut self, key: T) -> bool {
        if let Some(idx) = self.position_of(&key) {
            self.items.remove(idx);
            self.bump_revision();
            false
        } else {
            self.items.push(key);
            self.bump_revision();
            true
        }
    }

    /// Appends every key from `keys` that is not already selected.
    ///
    /// Duplicates inside `keys` are ignored too. The revision bumps once if
    /// anything was added.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        for key in keys {
            if !self.contains(&key) {
                self.items.push(key);
            }
        }
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
