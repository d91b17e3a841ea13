use criterion::{black_box, Criterion};
use sample_graphs::prelude::*;

pub fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for count in [1_000, 100_000] {
        let series = HistogramSeries::SampleIndices {
            nbins: 256,
            indices: (0..count).map(|x| (x as u32 * 7) % 256).collect(),
        };

        group.bench_function(format!("sample_indices_{}", count), |b| {
            b.iter(|| HistogramResult::from_series(black_box(&series)).unwrap())
        });
    }

    let result = HistogramResult::from_counts((1..=256).collect()).unwrap();
    group.bench_function("entropy_256", |b| b.iter(|| black_box(&result).entropy()));

    group.finish();
}

pub fn bench_bounding_box(c: &mut Criterion) {
    let points: Vec<Point> = (0..100_000)
        .map(|x| Point::new(x as f64, (x as f64 * 0.01).cos()))
        .collect();
    let settings = PointSettings::default();

    c.bench_function("bounding_box_100000", |b| {
        b.iter(|| {
            let bounds = BoundingBox::from_points(black_box(&points)).unwrap();
            bounds.viewport(black_box(&settings))
        })
    });
}
