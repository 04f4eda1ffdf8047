//! Benchmarks for the four batching flavours against `slice::chunks`.

use std::hint::black_box;

use batchwise::{Batcher, batch, batch_func, batch_seq};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Input lengths to test across benchmarks.
const LENGTHS: &[usize] = &[0, 5, 100, 10_000];

const BATCH_SIZE: usize = 32;

fn bench_batching(c: &mut Criterion) {
    let mut group = c.benchmark_group("batching");

    for &len in LENGTHS {
        let values: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("eager", len), &values, |b, values| {
            b.iter(|| black_box(batch(black_box(values), BATCH_SIZE)))
        });

        group.bench_with_input(BenchmarkId::new("func", len), &values, |b, values| {
            b.iter(|| {
                let mut total = 0usize;
                let res: Result<(), ()> = batch_func(black_box(values), BATCH_SIZE, |batch| {
                    total += batch.len();
                    Ok(())
                });
                black_box((res, total))
            })
        });

        group.bench_with_input(BenchmarkId::new("batcher", len), &values, |b, values| {
            b.iter(|| {
                let mut batcher = Batcher::new(black_box(values), BATCH_SIZE);
                let mut total = 0usize;
                while let Some(batch) = batcher.next_batch() {
                    total += batch.len();
                }
                black_box(total)
            })
        });

        group.bench_with_input(BenchmarkId::new("seq", len), &values, |b, values| {
            b.iter(|| {
                let mut total = 0usize;
                batch_seq(black_box(values), BATCH_SIZE).for_each_while(|batch| {
                    total += batch.len();
                    true
                });
                black_box(total)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_chunks", len), &values, |b, values| {
            b.iter(|| {
                let total: usize = black_box(values).chunks(BATCH_SIZE).map(<[u64]>::len).sum();
                black_box(total)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batching);
criterion_main!(benches);
