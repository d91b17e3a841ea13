use criterion::{black_box, Criterion};
use sample_graphs::prelude::*;

const NBINS: u32 = 256;

fn generate_sample_indices(count: usize) -> Vec<u32> {
    (0..count).map(|x| (x as u32).wrapping_mul(31) % NBINS).collect()
}

fn generate_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|x| Point::new(x as f64, (x as f64 * 0.01).sin()))
        .collect()
}

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for count in [1_000, 100_000] {
        let indices = encode_sample_indices(NBINS, &generate_sample_indices(count));
        group.bench_function(format!("sample_index_{}", count), |b| {
            b.iter(|| decode_sample_indices(black_box(&indices)).unwrap())
        });

        let points = encode_point_pairs(&generate_points(count));
        group.bench_function(format!("point_pair_{}", count), |b| {
            b.iter(|| decode_point_pairs(black_box(&points)).unwrap())
        });
    }

    let counts: Vec<u32> = (0..NBINS).map(|x| x * 3 + 1).collect();
    let bins = encode_bin_counts(&counts);
    group.bench_function("bin_count", |b| {
        b.iter(|| decode_bin_counts(black_box(&bins)).unwrap())
    });

    group.finish();
}
