// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=seatmap_view --heading-base-level=0

//! Seatmap View: the viewport model of a seat map.
//!
//! This crate is a small, headless model of how a laid-out seat map sits in
//! its container. It covers:
//! - Scale-to-fit from the container size and the content's width.
//! - A two-level zoom ([`ZoomLevel::Fitted`] and [`ZoomLevel::Full`]) driven
//!   by double clicks or double taps.
//! - Pan/drag clamping so the content can never be dragged out of reach.
//! - Coordinate conversion between world (layout) and view (pixel) space.
//!
//! It does **not** own any scene or renderer. Callers measure their
//! container, report the content width from the layout, and forward drag
//! offsets; the viewport answers with the scale and clamped offset to draw at.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use seatmap_view::{Viewport, ZoomLevel};
//!
//! let mut view = Viewport::new();
//! view.set_content_width(1000.0);
//! view.set_container_size(Size::new(500.0, 500.0));
//! assert_eq!(view.scale(), 0.5);
//!
//! // Double tap: show the map at natural size.
//! view.toggle_zoom();
//! assert_eq!(view.level(), ZoomLevel::Full);
//! assert_eq!(view.scale(), 1.0);
//!
//! // Dragging far to the right stops at half the container width.
//! let applied = view.drag_to(Vec2::new(10_000.0, 0.0));
//! assert_eq!(applied.x, 250.0);
//! ```
//!
//! ## Clamping without a viewport
//!
//! [`clamp_offset`] is a pure function, so drag-bound callbacks can use it
//! directly:
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use seatmap_view::clamp_offset;
//!
//! let clamped = clamp_offset(Vec2::new(0.0, 900.0), 1.0, Size::new(400.0, 400.0), 800.0);
//! assert_eq!(clamped, Vec2::new(0.0, 200.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and limited to the two levels above; there is no
//!   continuous pinch zoom.
//! - The fit matches content width to container height.
//! - Unmeasured or degenerate sizes never produce a zero, infinite or NaN
//!   scale; the previous fit is kept until valid measurements arrive.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport;

pub use modes::{ZoomLevel, ZoomToggle};
pub use viewport::{Viewport, ViewportDebugInfo, clamp_offset, offset_bounds};
