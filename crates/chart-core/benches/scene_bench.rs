use chart_core::{ChartConfig, LineStyle, Scene, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> Series {
    Series::new((0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect())
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_build");
    let config = ChartConfig::default();
    for &n in &[1_000usize, 50_000usize] {
        let series = gen_series(n);
        for smoothing in [false, true] {
            let style = LineStyle::new(smoothing, "steelblue");
            let id = format!("n{n}_{}", if smoothing { "basis" } else { "linear" });
            group.bench_with_input(BenchmarkId::from_parameter(id), &style, |b, style| {
                b.iter(|| black_box(Scene::build(&series, style, &config)));
            });
        }
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let series = gen_series(100_000);
    let config = ChartConfig::default();
    let scene = match Scene::build(&series, &LineStyle::default(), &config) {
        Ok(s) => s,
        Err(e) => panic!("scene: {e}"),
    };
    c.bench_function("pointer_lookup_100k", |b| {
        let mut px = 0.0;
        b.iter(|| {
            px = (px + 7.3) % scene.plot.width;
            black_box(scene.lookup(&series, px))
        });
    });
}

criterion_group!(benches, bench_scene, bench_lookup);
criterion_main!(benches);
