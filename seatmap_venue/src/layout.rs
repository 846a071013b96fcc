// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute placement of sections and seats.

use std::collections::HashMap;
use std::ops::Range;

use kurbo::{Point, Rect, Size};

use crate::geometry::{LayoutMetrics, max_section_width, section_height, section_width};
use crate::model::{SeatId, SeatStatus, Section, Venue};

/// Where a section is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPlacement {
    /// Index of the section in venue order.
    pub index: usize,
    /// Section name.
    pub name: String,
    /// World-space rectangle of the section's seat grid.
    pub rect: Rect,
    seats: Range<usize>,
}

impl SectionPlacement {
    /// Horizontal offset of the section.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.rect.x0
    }

    /// Vertical offset of the section.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.rect.y0
    }

    /// Section width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Section height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// Where a single seat is drawn, plus what a renderer needs to style it.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatPlacement {
    /// Seat id.
    pub id: SeatId,
    /// Status from the venue document.
    pub status: SeatStatus,
    /// Section index.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
    /// Slot column within the row.
    pub column: usize,
    /// World-space square of the seat.
    pub rect: Rect,
}

/// Placement of every section and seat of a venue, in world units.
///
/// A `Layout` is computed in one pass by [`Layout::compute`] and never
/// patched. Sections stack top to bottom in venue order, each preceded by
/// the section margin, and are centered horizontally against the widest
/// section.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    sections: Vec<SectionPlacement>,
    seats: Vec<SeatPlacement>,
    index: HashMap<SeatId, usize>,
    max_section_width: f64,
    bounds: Rect,
    overhang: f64,
}

impl Layout {
    /// Lays out `venue` with `metrics`.
    #[must_use]
    pub fn compute(venue: &Venue, metrics: &LayoutMetrics) -> Self {
        let max_width = max_section_width(venue.sections(), metrics);

        let (sections, seats, _bottom) = venue.sections().iter().enumerate().fold(
            (Vec::new(), Vec::new(), 0.0),
            |(mut sections, mut seats, bottom), (index, section)| {
                let width = section_width(section, metrics);
                let height = section_height(section, metrics);
                let origin = Point::new((max_width - width) / 2.0, bottom + metrics.section_margin);
                let first_seat = seats.len();
                place_seats(index, section, origin, metrics, &mut seats);
                sections.push(SectionPlacement {
                    index,
                    name: section.name.clone(),
                    rect: Rect::from_origin_size(origin, Size::new(width, height)),
                    seats: first_seat..seats.len(),
                });
                (sections, seats, origin.y + height)
            },
        );

        let bounds = sections
            .iter()
            .map(|s: &SectionPlacement| s.rect)
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO);
        let index = seats
            .iter()
            .enumerate()
            .map(|(i, s): (usize, &SeatPlacement)| (s.id.clone(), i))
            .collect();
        let min_pitch = metrics.seat_pitch.min(metrics.row_pitch);
        let overhang = ((metrics.seat_size - min_pitch) / 2.0).max(0.0);

        Self {
            sections,
            seats,
            index,
            max_section_width: max_width,
            bounds,
            overhang,
        }
    }

    /// Returns `true` if the layout holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns section placements in venue order.
    #[must_use]
    pub fn sections(&self) -> &[SectionPlacement] {
        &self.sections
    }

    /// Returns every seat placement, grouped by section in venue order.
    #[must_use]
    pub fn seats(&self) -> &[SeatPlacement] {
        &self.seats
    }

    /// Returns the seat placements of one section.
    #[must_use]
    pub fn seats_in(&self, section: usize) -> &[SeatPlacement] {
        self.sections
            .get(section)
            .map(|s| &self.seats[s.seats.clone()])
            .unwrap_or(&[])
    }

    /// Looks up a seat placement by id.
    #[must_use]
    pub fn seat(&self, id: &SeatId) -> Option<&SeatPlacement> {
        self.index.get(id).map(|&i| &self.seats[i])
    }

    /// Returns the seat whose square contains the world-space point `pt`.
    #[must_use]
    pub fn seat_at(&self, pt: Point) -> Option<&SeatPlacement> {
        self.sections
            .iter()
            .filter(|s| s.rect.inflate(self.overhang, self.overhang).contains(pt))
            .flat_map(|s| self.seats[s.seats.clone()].iter())
            .find(|seat| seat.rect.contains(pt))
    }

    /// Width of the widest section.
    #[must_use]
    pub fn max_section_width(&self) -> f64 {
        self.max_section_width
    }

    /// Bounding rectangle of all sections.
    ///
    /// The leading margin above the first section is not included.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounding width of the content at scale 1.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.bounds.width()
    }
}

fn place_seats(
    section_idx: usize,
    section: &Section,
    origin: Point,
    metrics: &LayoutMetrics,
    out: &mut Vec<SeatPlacement>,
) {
    let inset_x = (metrics.seat_pitch - metrics.seat_size) / 2.0;
    let inset_y = (metrics.row_pitch - metrics.seat_size) / 2.0;
    for (row_idx, row) in section.rows.iter().enumerate() {
        let y = origin.y + row_idx as f64 * metrics.row_pitch + inset_y;
        for (column, seat) in row.placed_seats() {
            let x = origin.x + column as f64 * metrics.seat_pitch + inset_x;
            out.push(SeatPlacement {
                id: seat.id.clone(),
                status: seat.status,
                section: section_idx,
                row: row_idx,
                column,
                rect: Rect::new(x, y, x + metrics.seat_size, y + metrics.seat_size),
            });
        }
    }
}
