use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId,
    Criterion,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use bucket_sort::BucketSort;
use count_sort::CountSort;
use inplace_bucket_sort::InplaceBucketSort;

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorts");

    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x91, 0x0C, 0x5E, 0xD7, 0x24, 0x8B, 0x6F, 0x12, 0xE0, 0x77, 0xA9,
        0x4D, 0xC3, 0x08, 0x5B, 0xF1, 0x36, 0x9E, 0x62, 0x2A, 0xBD, 0x40, 0x1F,
        0x83, 0xCC, 0x57, 0x09, 0xEA, 0x74, 0x18, 0xB5,
    ]);

    let n = 100_000;
    for m in [16_u32, 1 << 10, 1 << 16] {
        let pairs: Vec<(u32, u64)> =
            (0..n).map(|i| (rng.gen_range(0..m), i)).collect();
        let keys: Vec<u32> = pairs.iter().map(|&(k, _)| k).collect();

        group
            .bench_function(BenchmarkId::new("count_sort", m), |b| {
                b.iter(|| black_box(keys.count_sort()))
            })
            .bench_function(BenchmarkId::new("bucket_sort", m), |b| {
                b.iter(|| black_box(pairs.bucket_sort()))
            })
            .bench_function(BenchmarkId::new("cyclic_bucket_sort", m), |b| {
                b.iter_batched_ref(
                    || pairs.clone(),
                    |a| black_box(a.cyclic_bucket_sort()),
                    BatchSize::LargeInput,
                )
            })
            .bench_function(BenchmarkId::new("forward_bucket_sort", m), |b| {
                b.iter_batched_ref(
                    || pairs.clone(),
                    |a| black_box(a.forward_bucket_sort()),
                    BatchSize::LargeInput,
                )
            })
            .bench_function(BenchmarkId::new("std_sort_by_key", m), |b| {
                b.iter_batched_ref(
                    || pairs.clone(),
                    |a| a.sort_by_key(|&(k, _)| k),
                    BatchSize::LargeInput,
                )
            });
    }
    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
