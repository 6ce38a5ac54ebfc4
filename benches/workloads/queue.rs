use super::SIZES;
use chunk_deque::ChunkDeque;
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use std::collections::VecDeque;

/// Steady-state FIFO: a window of `n` elements slides forward `n` times.
pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_slide");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("chunk_deque", n), &n, |b, &n| {
            b.iter_batched(
                || (0..n as u64).collect::<ChunkDeque<u64>>(),
                |mut dq| {
                    for i in 0..n as u64 {
                        dq.push_back(black_box(i));
                        black_box(dq.pop_front());
                    }
                    dq
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("vec_deque", n), &n, |b, &n| {
            b.iter_batched(
                || (0..n as u64).collect::<VecDeque<u64>>(),
                |mut dq| {
                    for i in 0..n as u64 {
                        dq.push_back(black_box(i));
                        black_box(dq.pop_front());
                    }
                    dq
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
