// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast churn through the manager.
//!
//! Measures the performance of:
//! - Showing toasts and dismissing them oldest first
//! - Dismissing a toast from the middle of a populated stack
//! - Applying a burst of commands queued through a handle

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gobarber::ui::notifications::{Manager, ToastContent, ToastId};
use std::hint::black_box;

fn bench_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_manager");

    for size in [4_usize, 32, 256] {
        group.bench_with_input(BenchmarkId::new("add_then_drain", size), &size, |b, &size| {
            b.iter(|| {
                let mut manager = Manager::default();
                let ids: Vec<ToastId> = (0..size)
                    .map(|i| manager.add_toast(ToastContent::info(format!("toast {i}"))).0)
                    .collect();
                for id in ids {
                    black_box(manager.remove_toast(id));
                }
                black_box(manager.has_notifications());
            });
        });
    }

    group.finish();
}

fn bench_remove_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_manager");

    group.bench_function("remove_middle_of_64", |b| {
        b.iter(|| {
            let mut manager = Manager::default();
            let ids: Vec<ToastId> = (0..64)
                .map(|i| manager.add_toast(ToastContent::error(format!("toast {i}"))).0)
                .collect();
            black_box(manager.remove_toast(ids[32]));
            black_box(manager.visible_count());
        });
    });

    group.finish();
}

fn bench_handle_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_manager");

    group.bench_function("pump_32_queued", |b| {
        b.iter(|| {
            let mut manager = Manager::default();
            let handle = manager.handle();
            for i in 0..32 {
                let _ = handle.add_toast(ToastContent::success(format!("toast {i}")));
            }
            let _ = black_box(manager.pump());
            black_box(manager.pending_timers());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_add_remove, bench_remove_middle, bench_handle_burst);
criterion_main!(benches);
