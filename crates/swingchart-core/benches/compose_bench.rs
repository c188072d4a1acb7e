use swingchart_core::{compose, ChartConfig, DisplayOptions, HoverState, TimeSeriesPoint};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> Vec<TimeSeriesPoint> {
    let mut v = Vec::with_capacity(n);
    let mut price = 1000.0f64;
    for i in 0..n {
        price += (i as f64 * 0.01).sin() * 5.0;
        // every 50th period is a gap in the averages
        let ma = if i % 50 == 0 { None } else { Some(price - 2.0) };
        v.push(TimeSeriesPoint {
            volume: Some(10_000.0 + (i % 17) as f64 * 300.0),
            ma5: ma,
            ma25: ma.map(|m| m + 1.0),
            ma75: ma.map(|m| m - 1.0),
            ..TimeSeriesPoint::with_close(format!("d{i:08}"), price)
        });
    }
    v
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let cfg = ChartConfig::default();
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let series = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &series, |b, s| {
            b.iter(|| black_box(compose(s, &DisplayOptions::all(), &cfg, HoverState::Active(n / 2))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
