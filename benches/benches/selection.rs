// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use orrery_selection::{SelectionBroadcaster, SelectionHistory, SelectionResult, SubscriberId};

fn bench_publish_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/publish");

    // Each publish snapshots the subscriber list, so cost should grow with
    // subscribers, not with the size of the result.
    for subscribers in [1usize, 8, 64, 512] {
        let broadcaster = SelectionBroadcaster::<u32>::new();
        for id in 0..(subscribers as u32) {
            broadcaster
                .subscribe(SubscriberId(id), |result| {
                    black_box(result.len());
                    Ok(())
                })
                .unwrap();
        }
        let result = SelectionResult::from((0..16).collect::<Vec<u32>>());
        group.throughput(Throughput::Elements(subscribers as u64));

        group.bench_with_input(
            BenchmarkId::new("subscribers", subscribers),
            &result,
            |b, result| {
                b.iter(|| black_box(broadcaster.publish(result)));
            },
        );
    }

    group.finish();
}

fn bench_publish_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/publish_empty");

    // Empty results skip non-empty subscribers without entering them.
    let broadcaster = SelectionBroadcaster::<u32>::new();
    for id in 0..64 {
        broadcaster
            .subscribe(SubscriberId(id), |_| Ok(()))
            .unwrap();
    }
    let empty = SelectionResult::empty();
    group.bench_function("64_non_empty_subscribers", |b| {
        b.iter(|| black_box(broadcaster.publish(&empty)));
    });

    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/history");

    for len in [1usize, 4, 64, 1_024] {
        let result: SelectionResult<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("record", len), &result, |b, result| {
            let history = SelectionHistory::new();
            b.iter(|| {
                history.record(result);
                if history.len() > 1 << 16 {
                    history.clear();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_publish_fan_out,
    bench_publish_empty,
    bench_history
);
criterion_main!(benches);
