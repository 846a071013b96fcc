// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use seatmap_venue::{Layout, LayoutMetrics, Row, Seat, SeatStatus, Section, Venue};

/// Builds `sections` sections of `rows` x `seats_per_row`, with an aisle gap
/// every tenth slot and every seventh seat reserved.
fn build_venue(sections: usize, rows: usize, seats_per_row: usize) -> Venue {
    let mut next = 0_u64;
    let sections = (0..sections)
        .map(|s| {
            let rows = (0..rows)
                .map(|r| {
                    let seats = (0..seats_per_row)
                        .map(|c| {
                            if c % 10 == 9 {
                                return None;
                            }
                            next += 1;
                            let status = if next % 7 == 0 {
                                SeatStatus::Reserved
                            } else {
                                SeatStatus::Available
                            };
                            Some(Seat::new(next, status))
                        })
                        .collect();
                    Row {
                        offset: (r % 3) as u32,
                        seats,
                    }
                })
                .collect();
            Section::new(format!("section {s}"), rows)
        })
        .collect();
    Venue::new(sections).expect("generated ids are unique")
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute");
    let metrics = LayoutMetrics::default();

    for (sections, rows, per_row) in [(4, 10, 20), (12, 20, 40), (24, 30, 60)] {
        let venue = build_venue(sections, rows, per_row);
        group.throughput(Throughput::Elements(venue.seat_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(venue.seat_count()),
            &venue,
            |b, venue| {
                b.iter(|| black_box(Layout::compute(venue, &metrics)));
            },
        );
    }

    group.finish();
}

fn bench_seat_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/seat_at");
    let metrics = LayoutMetrics::default();

    // Hypothesis: filtering by section rect keeps hit tests well below a
    // scan of every seat once there are many sections.
    for sections in [4_usize, 24] {
        let venue = build_venue(sections, 30, 60);
        let layout = Layout::compute(&venue, &metrics);
        let probes: Vec<Point> = layout
            .seats()
            .iter()
            .step_by(97)
            .map(|s| s.rect.center())
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &pt in probes {
                        black_box(layout.seat_at(pt));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let json = serde_json::json!({
        "seats": {
            "sections": (0..12).map(|s| serde_json::json!({
                "name": format!("S{s}"),
                "rows": (0..20).map(|r| (0..40).map(|c| serde_json::json!({
                    "id": format!("{s}-{r}-{c}"),
                    "status": if c % 7 == 0 { "booked" } else { "available" },
                })).collect::<Vec<_>>()).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        }
    })
    .to_string();

    c.bench_function("layout/decode_venue", |b| {
        b.iter(|| black_box(Venue::from_json(black_box(&json)).expect("valid document")));
    });
}

criterion_group!(benches, bench_compute, bench_seat_at, bench_decode);
criterion_main!(benches);
