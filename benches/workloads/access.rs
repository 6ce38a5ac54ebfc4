use super::SIZES;
use chunk_deque::ChunkDeque;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::collections::VecDeque;

pub fn run(c: &mut Criterion) {
    bench_random_index(c);
    bench_iterate(c);
}

/// Deterministic pseudo-random probe order.
fn probes(n: usize) -> Vec<usize> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % n as u64) as usize
        })
        .collect()
}

/// Builds from both ends so the begin position sits mid-chunk.
fn build_chunked(n: usize) -> ChunkDeque<u64> {
    let mut dq = ChunkDeque::new();
    for i in 0..n as u64 {
        if i % 3 == 0 {
            dq.push_front(i);
        } else {
            dq.push_back(i);
        }
    }
    dq
}

fn bench_random_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_index");

    for &n in SIZES {
        let chunked = build_chunked(n);
        let std: VecDeque<u64> = chunked.iter().copied().collect();
        let order = probes(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("chunk_deque", n), &order, |b, order| {
            b.iter(|| {
                let mut sum = 0u64;
                for &i in order {
                    sum = sum.wrapping_add(chunked[i]);
                }
                black_box(sum)
            })
        });
        group.bench_with_input(BenchmarkId::new("vec_deque", n), &order, |b, order| {
            b.iter(|| {
                let mut sum = 0u64;
                for &i in order {
                    sum = sum.wrapping_add(std[i]);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for &n in SIZES {
        let chunked = build_chunked(n);
        let std: VecDeque<u64> = chunked.iter().copied().collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("chunk_deque", n), |b| {
            b.iter(|| black_box(chunked.iter().fold(0u64, |acc, &x| acc.wrapping_add(x))))
        });
        group.bench_function(BenchmarkId::new("vec_deque", n), |b| {
            b.iter(|| black_box(std.iter().fold(0u64, |acc, &x| acc.wrapping_add(x))))
        });
    }

    group.finish();
}
