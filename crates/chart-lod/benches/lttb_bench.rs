use chart_lod::downsample::lttb;
use chart_lod::{ChartDescription, SeriesOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            // simple waveform with drift
            let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
            (i as f64, y)
        })
        .collect()
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_xy(n);
        for &target in &[1_000usize, 2_000usize, 5_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_t{target}")), &target, |b, &t| {
                b.iter(|| black_box(lttb(&data, t).len()));
            });
        }
    }
    group.finish();
}

fn bench_description_downsample(c: &mut Criterion) {
    let mut desc = ChartDescription::new().with_time_axes();
    desc.add_series(SeriesOptions::line(&gen_xy(100_000)));
    c.bench_function("description_downsample_n100000_t2000", |b| {
        b.iter(|| black_box(desc.downsample_lttb(2_000)));
    });
}

criterion_group!(benches, bench_lttb, bench_description_downsample);
criterion_main!(benches);
