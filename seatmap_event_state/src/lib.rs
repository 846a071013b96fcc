// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=seatmap_event_state --heading-base-level=0

//! Seatmap Event State: pointer state managers for a seat map.
//!
//! Two small state machines cover the stateful parts of seat map input:
//!
//! - [`hover`]: the single hovered (or tapped) seat and its popup anchor.
//! - [`drag`]: a pan gesture, turning pointer moves into proposed content
//!   offsets and telling real drags apart from clicks.
//!
//! Both are independent of one another. Hosts decide how to route events;
//! typically hover and click input is ignored while [`drag::DragState`]
//! reports an active drag, so panning across seats neither opens popups nor
//! selects anything.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use seatmap_event_state::{drag::DragState, hover::HoverState};
//!
//! let mut hover = HoverState::new();
//! let mut drag = DragState::default();
//!
//! hover.set("C7", Point::new(120.0, 80.0));
//! drag.start(Point::new(120.0, 80.0), Vec2::ZERO);
//! drag.update(Point::new(160.0, 80.0));
//!
//! // The host suppresses the popup once the pointer is really dragging.
//! if drag.has_moved() {
//!     hover.clear();
//! }
//! assert!(hover.current().is_none());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod drag;
pub mod hover;
