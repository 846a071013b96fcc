// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section sizes in world units.

use serde::{Deserialize, Serialize};

use crate::model::Section;

/// Spacing constants for turning seat grids into world units.
///
/// All values are in world units at scale 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Horizontal distance between neighbouring seat slots.
    pub seat_pitch: f64,
    /// Vertical distance between neighbouring rows.
    pub row_pitch: f64,
    /// Edge length of the square drawn for a seat, centered in its slot.
    pub seat_size: f64,
    /// Vertical gap above every section.
    pub section_margin: f64,
}

impl LayoutMetrics {
    /// Default horizontal and vertical slot pitch.
    pub const DEFAULT_PITCH: f64 = 15.0;
    /// Default drawn seat size.
    pub const DEFAULT_SEAT_SIZE: f64 = 10.0;
    /// Default gap between stacked sections.
    pub const DEFAULT_SECTION_MARGIN: f64 = 10.0;
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            seat_pitch: Self::DEFAULT_PITCH,
            row_pitch: Self::DEFAULT_PITCH,
            seat_size: Self::DEFAULT_SEAT_SIZE,
            section_margin: Self::DEFAULT_SECTION_MARGIN,
        }
    }
}

/// Width of `section`: its widest row's slot count times the seat pitch.
#[must_use]
pub fn section_width(section: &Section, metrics: &LayoutMetrics) -> f64 {
    section.max_slots() as f64 * metrics.seat_pitch
}

/// Height of `section`: its row count times the row pitch.
#[must_use]
pub fn section_height(section: &Section, metrics: &LayoutMetrics) -> f64 {
    section.rows.len() as f64 * metrics.row_pitch
}

/// Widest section width in `sections`, or `0.0` when there are none.
#[must_use]
pub fn max_section_width(sections: &[Section], metrics: &LayoutMetrics) -> f64 {
    sections
        .iter()
        .map(|s| section_width(s, metrics))
        .fold(0.0, f64::max)
}
