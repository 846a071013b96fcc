// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=seatmap --heading-base-level=0

//! Seatmap: a headless interactive seat map.
//!
//! This crate wires the seat map primitives into one event-driven engine:
//!
//! - `seatmap_venue` decodes the venue and lays sections and seats out.
//! - `seatmap_view` fits the layout into the container, toggles between the
//!   fitted and full zoom levels, and clamps panning.
//! - `seatmap_selection` keeps the picked seats, unique and in pick order.
//! - `seatmap_event_state` tracks the hovered seat and the pan gesture.
//!
//! [`SeatMap`] owns all of it. It never draws and never talks to the
//! network: hosts render from [`SeatMap::layout`], [`SeatMap::viewport`],
//! [`SeatMap::seat_state`] and [`SeatMap::hover`], feed pointer and resize
//! input through [`SeatMap::handle_event`], and hand [`SeatMap::submission`]
//! to their booking backend.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use seatmap::{Changes, SeatId, SeatMap, SeatMapEvent, SeatState, SelectOutcome, Submission};
//!
//! let mut map = SeatMap::default();
//! assert!(map.is_loading());
//! assert_eq!(map.select("A1"), SelectOutcome::NotLoaded);
//!
//! map.handle_event(SeatMapEvent::Resize { size: Size::new(800.0, 600.0) });
//! map.load_json(r#"{"seats": {"sections": [{"name": "Main", "rows": [
//!     [{"id": "A1"}, {"id": "A2", "status": "reserved"}]
//! ]}]}}"#)?;
//!
//! let changes = map.handle_event(SeatMapEvent::Click { seat: SeatId::new("A1") });
//! assert_eq!(changes, Changes::SELECTION);
//! assert_eq!(map.select("A2"), SelectOutcome::Unavailable);
//! assert_eq!(map.seat_state(&SeatId::new("A1")), Some(SeatState::Selected));
//!
//! let Submission::Ready(request) = map.submission() else { unreachable!() };
//! assert_eq!(request.query_value(), "A1");
//! # Ok::<(), seatmap::VenueError>(())
//! ```
//!
//! ## Logging
//!
//! The engine reports through `tracing`: venue loads and submissions at
//! `info`, refused transitions at `debug`, and viewport changes at `trace`.
//! Install any subscriber to see them.

mod config;
mod event;
mod seat_map;
mod submission;

pub use config::SeatMapConfig;
pub use event::{Changes, SeatMapEvent};
pub use seat_map::{SeatMap, SeatState, SelectOutcome};
pub use submission::{Submission, SubmissionRequest, SubmissionStatus, SubmitError, SubmitSeats};

pub use seatmap_venue::{LayoutMetrics, SeatId, SeatStatus, VenueError};
pub use seatmap_view::{ZoomLevel, ZoomToggle};
