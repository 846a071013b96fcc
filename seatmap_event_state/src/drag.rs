// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state for panning: turn pointer moves into proposed content offsets.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the pointer position and the content
//!    offset at the moment the drag began.
//! 2) On each move, [`DragState::update`] returns the offset the content
//!    would have if it followed the pointer exactly. Clamp it before applying.
//! 3) Call [`DragState::end`] on release.
//!
//! Pointer jitter below the configured slop does not count as movement, so a
//! press and release on a seat remains a click rather than a drag.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use seatmap_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Content currently sits at (100, 0); the pointer goes down at (10, 20).
//! drag.start(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! // Pointer moves by (5, 5): the content should follow to (105, 5).
//! let proposed = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(proposed, Vec2::new(105.0, 5.0));
//! assert!(drag.has_moved());
//! ```

use kurbo::{Point, Vec2};

/// Default movement, in view units, a pointer may jitter before a press
/// counts as a drag.
pub const DEFAULT_SLOP: f64 = 3.0;

/// Tracks one pan gesture.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Pointer position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
    /// Content offset when the drag started.
    pub origin_offset: Vec2,
    slop: f64,
    moved: bool,
}

impl Default for DragState {
    fn default() -> Self {
        Self::with_slop(DEFAULT_SLOP)
    }
}

impl DragState {
    /// Creates an idle drag state with a custom jitter tolerance.
    ///
    /// Negative or NaN values are treated as zero.
    #[must_use]
    pub fn with_slop(slop: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            origin_offset: Vec2::ZERO,
            slop: slop.max(0.0),
            moved: false,
        }
    }

    /// Starts a drag at pointer `pos` with the content at `origin_offset`.
    ///
    /// Any drag already in progress is replaced.
    pub fn start(&mut self, pos: Point, origin_offset: Vec2) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.origin_offset = origin_offset;
        self.moved = false;
    }

    /// Records a pointer move and returns the proposed content offset.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        self.last_pos = Some(pos);
        let total = pos - start;
        if !self.moved && total.hypot() > self.slop {
            self.moved = true;
        }
        Some(self.origin_offset + total)
    }

    /// Returns the pointer movement since the drag started.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the drag and resets state.
    ///
    /// Returns `true` if the pointer travelled past the slop, meaning the
    /// gesture was a real drag rather than a click.
    pub fn end(&mut self) -> bool {
        let moved = self.moved;
        self.start_pos = None;
        self.last_pos = None;
        self.origin_offset = Vec2::ZERO;
        self.moved = false;
        moved
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the active drag has moved past the slop.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
