// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=seatmap_venue --heading-base-level=0

//! Seatmap Venue: venue data, section geometry and layout.
//!
//! A venue is an ordered list of sections, each a grid of seat rows. This
//! crate turns that description into world-space rectangles:
//!
//! - [`Venue`] decodes and validates the venue document.
//! - [`section_width`], [`section_height`] and [`max_section_width`] size
//!   sections from their seat grids.
//! - [`Layout::compute`] stacks sections vertically in venue order and
//!   centers each one under the widest, placing every seat along the way.
//!
//! Layout is a pure function of the venue and the [`LayoutMetrics`]. Hosts
//! recompute it when the venue changes and keep it otherwise; scale and pan
//! live in `seatmap_view`.
//!
//! ## Example
//!
//! ```rust
//! use seatmap_venue::{Layout, LayoutMetrics, Venue};
//!
//! let venue = Venue::from_json(r#"{
//!     "seats": { "sections": [
//!         { "name": "Balcony", "rows": [[{"id": "B1"}, {"id": "B2"}]] },
//!         { "name": "Stalls", "rows": [
//!             [{"id": "S1"}, null, {"id": "S2", "status": "reserved"}, {"id": "S3"}],
//!             {"offset": 1, "seats": [{"id": "S4"}]}
//!         ] }
//!     ] }
//! }"#)?;
//!
//! let layout = Layout::compute(&venue, &LayoutMetrics::default());
//! let balcony = &layout.sections()[0];
//! let stalls = &layout.sections()[1];
//!
//! // Stalls are four slots wide, the balcony two; the balcony is centered.
//! assert_eq!(stalls.width(), 60.0);
//! assert_eq!(balcony.x(), 15.0);
//!
//! // Sections stack with a 10 unit margin above each.
//! assert_eq!(balcony.y(), 10.0);
//! assert_eq!(stalls.y(), 10.0 + 15.0 + 10.0);
//! # Ok::<(), seatmap_venue::VenueError>(())
//! ```

mod geometry;
mod layout;
mod model;

pub use geometry::{LayoutMetrics, max_section_width, section_height, section_width};
pub use layout::{Layout, SeatPlacement, SectionPlacement};
pub use model::{Row, Seat, SeatId, SeatRef, SeatStatus, Section, Venue, VenueError};
