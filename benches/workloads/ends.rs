use super::SIZES;
use chunk_deque::ChunkDeque;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::collections::VecDeque;

pub fn run(c: &mut Criterion) {
    bench_push_back(c);
    bench_push_front(c);
    bench_alternating(c);
}

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("chunk_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut dq: ChunkDeque<u64> = ChunkDeque::new();
                for i in 0..n as u64 {
                    dq.push_back(black_box(i));
                }
                black_box(dq);
            })
        });
        group.bench_with_input(BenchmarkId::new("vec_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut dq = VecDeque::new();
                for i in 0..n as u64 {
                    dq.push_back(black_box(i));
                }
                black_box(dq);
            })
        });
    }

    group.finish();
}

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("chunk_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut dq: ChunkDeque<u64> = ChunkDeque::new();
                for i in 0..n as u64 {
                    dq.push_front(black_box(i));
                }
                black_box(dq);
            })
        });
        group.bench_with_input(BenchmarkId::new("vec_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut dq = VecDeque::new();
                for i in 0..n as u64 {
                    dq.push_front(black_box(i));
                }
                black_box(dq);
            })
        });
    }

    group.finish();
}

fn bench_alternating(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating_ends");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("chunk_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut dq: ChunkDeque<u64> = ChunkDeque::new();
                for i in 0..n as u64 {
                    if i % 2 == 0 {
                        dq.push_back(black_box(i));
                    } else {
                        dq.push_front(black_box(i));
                    }
                }
                black_box(dq);
            })
        });
        group.bench_with_input(BenchmarkId::new("vec_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut dq = VecDeque::new();
                for i in 0..n as u64 {
                    if i % 2 == 0 {
                        dq.push_back(black_box(i));
                    } else {
                        dq.push_front(black_box(i));
                    }
                }
                black_box(dq);
            })
        });
    }

    group.finish();
}
