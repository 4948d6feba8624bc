//! Criterion benchmarks for the generic heap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only the removal workloads
//! cargo bench --bench heap_ops -- remove
//! ```
//!
//! Each workload runs against the natural ordering, a closure ordering, and
//! `std::collections::BinaryHeap` (with `Reverse`) as a baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use generic_heap::{GenericHeap, HeapBuilder};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic pseudo-random values (xorshift), so runs are comparable
fn values(n: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &n in &[1_000usize, 10_000, 100_000] {
        let input = values(n);

        group.bench_with_input(BenchmarkId::new("natural", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = GenericHeap::new();
                for &v in input {
                    heap.push(v);
                }
                while let Ok(v) = heap.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("closure", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = HeapBuilder::new()
                    .less(|a: &u64, b: &u64| a < b)
                    .with_capacity(input.len())
                    .bind();
                for &v in input {
                    heap.push(v);
                }
                while let Ok(v) = heap.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &v in input {
                    heap.push(Reverse(v));
                }
                while let Some(Reverse(v)) = heap.pop() {
                    black_box(v);
                }
            })
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for &n in &[1_000usize, 10_000] {
        let input = values(n);

        group.bench_with_input(BenchmarkId::new("middle", n), &input, |b, input| {
            b.iter(|| {
                let mut heap: GenericHeap<u64> = input.iter().copied().collect();
                while !heap.is_empty() {
                    let index = heap.len() / 2;
                    black_box(heap.remove(index).ok());
                }
            })
        });
    }

    group.finish();
}

fn bench_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");

    for &n in &[10_000usize, 100_000] {
        let input = values(n);

        group.bench_with_input(BenchmarkId::new("bind_seeded", n), &input, |b, input| {
            b.iter(|| {
                let heap = HeapBuilder::new()
                    .natural()
                    .elements(input.iter().copied())
                    .bind();
                black_box(heap.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_remove, bench_heapify);
criterion_main!(benches);
