// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use seatmap::{SeatId, SeatMap, SeatMapEvent};
use seatmap_selection::Selection;
use seatmap_venue::{Row, Seat, SeatStatus, Section, Venue};

fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/insert_remove");

    // Uniqueness is a linear scan; seat picks are small, so measure the
    // sizes a booking UI actually reaches.
    for len in [8_usize, 32, 128] {
        let keys: Vec<SeatId> = (0..len as u64).map(SeatId::from).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("insert", len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<SeatId>::new,
                |mut sel| {
                    for key in keys {
                        sel.insert(key.clone());
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("remove", len), &keys, |b, keys| {
            b.iter_batched(
                || {
                    let mut sel = Selection::new();
                    sel.extend_with(keys.iter().cloned());
                    sel
                },
                |mut sel| {
                    for key in keys.iter().rev() {
                        sel.remove(key);
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_click_events(c: &mut Criterion) {
    let seats: Vec<Option<Seat>> = (0..200_u64)
        .map(|i| Some(Seat::new(i, SeatStatus::Available)))
        .collect();
    let venue = Venue::new(vec![Section::new("main", vec![Row::new(seats)])])
        .expect("unique ids");
    let clicks: Vec<SeatMapEvent> = (0..64_u64)
        .map(|i| SeatMapEvent::Click {
            seat: SeatId::from(i * 3 % 200),
        })
        .collect();

    c.bench_function("selection/seat_map_clicks", |b| {
        b.iter_batched(
            || {
                let mut map = SeatMap::default();
                map.load_venue(venue.clone());
                map
            },
            |mut map| {
                for event in &clicks {
                    black_box(map.handle_event(event.clone()));
                }
                black_box(map);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_insert_remove, bench_click_events);
criterion_main!(benches);
