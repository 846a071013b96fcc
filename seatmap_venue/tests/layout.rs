// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout properties over generated venues.

use proptest::prelude::*;
use seatmap_venue::{
    Layout, LayoutMetrics, Row, Seat, SeatStatus, Section, Venue, max_section_width,
    section_width,
};

/// Builds a venue from per-section row widths, numbering seats uniquely.
fn venue_from_shape(shape: &[Vec<(u32, usize)>]) -> Venue {
    let mut next = 0_u64;
    let sections = shape
        .iter()
        .enumerate()
        .map(|(i, rows)| {
            let rows = rows
                .iter()
                .map(|&(offset, len)| {
                    let seats = (0..len)
                        .map(|_| {
                            next += 1;
                            Some(Seat::new(next, SeatStatus::Available))
                        })
                        .collect();
                    Row { offset, seats }
                })
                .collect();
            Section::new(format!("section {i}"), rows)
        })
        .collect();
    Venue::new(sections).expect("generated ids are unique")
}

fn shape() -> impl Strategy<Value = Vec<Vec<(u32, usize)>>> {
    prop::collection::vec(prop::collection::vec((0_u32..4, 0_usize..12), 0..6), 0..6)
}

fn metrics() -> impl Strategy<Value = LayoutMetrics> {
    (1.0_f64..30.0, 1.0_f64..30.0, 0.0_f64..40.0).prop_map(|(pitch, row_pitch, margin)| {
        LayoutMetrics {
            seat_pitch: pitch,
            row_pitch,
            seat_size: pitch.min(row_pitch) * 0.8,
            section_margin: margin,
        }
    })
}

proptest! {
    #[test]
    fn sections_never_overlap_and_keep_declared_order(shape in shape(), metrics in metrics()) {
        let venue = venue_from_shape(&shape);
        let layout = Layout::compute(&venue, &metrics);

        prop_assert_eq!(layout.sections().len(), venue.sections().len());
        let mut bottom = 0.0;
        for (i, placed) in layout.sections().iter().enumerate() {
            prop_assert_eq!(placed.index, i);
            prop_assert_eq!(&placed.name, &venue.sections()[i].name);
            prop_assert!(placed.y() >= bottom + metrics.section_margin - 1e-9);
            bottom = placed.y() + placed.height();
        }
    }

    #[test]
    fn sections_are_centered_within_the_widest(shape in shape(), metrics in metrics()) {
        let venue = venue_from_shape(&shape);
        let layout = Layout::compute(&venue, &metrics);
        let widest = max_section_width(venue.sections(), &metrics);

        for (section, placed) in venue.sections().iter().zip(layout.sections()) {
            let width = section_width(section, &metrics);
            prop_assert!(width <= widest);
            prop_assert!(placed.x() >= 0.0);
            prop_assert!((placed.x() - (widest - width) / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn every_seat_is_placed_and_found_by_hit_test(shape in shape(), metrics in metrics()) {
        let venue = venue_from_shape(&shape);
        let layout = Layout::compute(&venue, &metrics);

        prop_assert_eq!(layout.seats().len(), venue.seat_count());
        for seat in layout.seats() {
            let section = &layout.sections()[seat.section];
            prop_assert!(section.rect.contains(seat.rect.center()));
            let hit = layout.seat_at(seat.rect.center()).map(|s| &s.id);
            prop_assert_eq!(hit, Some(&seat.id));
        }
    }
}

#[test]
fn statuses_flow_through_to_placements() {
    let venue = Venue::from_json(
        r#"{"seats": {"sections": [{"name": "x", "rows": [[
            {"id": "A1"}, {"id": "A2", "status": "unavailable"}, {"id": "A3", "status": "selected"}
        ]]}]}}"#,
    )
    .unwrap();
    let layout = Layout::compute(&venue, &LayoutMetrics::default());
    let statuses: Vec<SeatStatus> = layout.seats().iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        [SeatStatus::Available, SeatStatus::Reserved, SeatStatus::Selected]
    );
}
