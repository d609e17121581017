use chart_lod::{optimize_for_large_dataset, ChartDescription, SeriesOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_description(series: usize, n: usize) -> ChartDescription {
    let mut desc = ChartDescription::new().with_title("bench").with_time_axes();
    for s in 0..series {
        let points: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, (i as f64 * 0.01 + s as f64).sin())).collect();
        desc.add_series(SeriesOptions::line(&points).named(format!("s{s}")));
    }
    desc
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    for &series in &[1usize, 10usize] {
        let desc = build_description(series, 50_000);
        let size = desc.data_len();
        group.bench_function(format!("series{series}_n{size}"), |b| {
            b.iter(|| black_box(optimize_for_large_dataset(&desc, size)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
