// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state: which single target the pointer is over, and where.
//!
//! A seat map shows a detail popup for at most one seat. [`HoverState`]
//! remembers that seat together with the screen-space anchor the popup
//! should be drawn at. Setting a new hover replaces the old one; a leave
//! event for a target that is no longer hovered is ignored, so out-of-order
//! enter/leave pairs from the pointer stream cannot clear the wrong popup.
//!
//! ```
//! use kurbo::Point;
//! use seatmap_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! let events = hover.set("A1", Point::new(40.0, 12.0));
//! assert_eq!(events, [HoverEvent::Enter("A1")]);
//!
//! // Moving straight onto a neighbour replaces the hover.
//! let events = hover.set("A2", Point::new(55.0, 12.0));
//! assert_eq!(events, [HoverEvent::Leave("A1"), HoverEvent::Enter("A2")]);
//!
//! // A late leave for A1 is stale and does nothing.
//! assert!(hover.leave(&"A1").is_none());
//! assert_eq!(hover.target(), Some(&"A2"));
//! ```

use alloc::vec::Vec;

use kurbo::Point;

/// The hovered target and its popup anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover<K> {
    /// The hovered target.
    pub target: K,
    /// Screen-space anchor position reported with the hover.
    pub position: Point,
}

/// Enter/leave transition produced by [`HoverState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered this target.
    Enter(K),
    /// The pointer left this target.
    Leave(K),
}

/// Tracks at most one hovered target.
#[derive(Clone, Debug, Default)]
pub struct HoverState<K> {
    current: Option<Hover<K>>,
}

impl<K> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the current hover, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Hover<K>> {
        self.current.as_ref()
    }

    /// Returns the hovered target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&K> {
        self.current.as_ref().map(|h| &h.target)
    }

    /// Returns the popup anchor of the current hover, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.current.as_ref().map(|h| h.position)
    }

    /// Clears the hover unconditionally, returning what was hovered.
    pub fn clear(&mut self) -> Option<Hover<K>> {
        self.current.take()
    }
}

impl<K> HoverState<K>
where
    K: Clone + PartialEq,
{
    /// Hovers `target` at `position`, replacing any previous hover.
    ///
    /// Re-hovering the same target only moves the anchor and yields no events.
    pub fn set(&mut self, target: K, position: Point) -> Vec<HoverEvent<K>> {
        let mut events = Vec::new();
        match self.current.take() {
            Some(prev) if prev.target == target => {}
            Some(prev) => {
                events.push(HoverEvent::Leave(prev.target));
                events.push(HoverEvent::Enter(target.clone()));
            }
            None => events.push(HoverEvent::Enter(target.clone())),
        }
        self.current = Some(Hover { target, position });
        events
    }

    /// Clears the hover only if `target` is the hovered one.
    ///
    /// Returns the cleared hover; `None` means the leave was stale.
    pub fn leave(&mut self, target: &K) -> Option<Hover<K>> {
        if self.target() == Some(target) {
            self.current.take()
        } else {
            None
        }
    }

    /// Returns `true` if `target` is hovered.
    #[must_use]
    pub fn is_hovered(&self, target: &K) -> bool {
        self.target() == Some(target)
    }
}
