use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use estimator::{great_circle_distance_km, DonationCatalog, GeoPoint, RouteEstimator, SpeedModel};

fn benchmark_great_circle(c: &mut Criterion) {
    let a = GeoPoint::new(-23.5505, -46.6333);
    let b = GeoPoint::new(-23.5615, -46.6565);
    c.bench_function("great_circle_distance_km", |bench| {
        bench.iter(|| great_circle_distance_km(black_box(a), black_box(b)))
    });
}

fn benchmark_route_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_estimate");
    let estimator = RouteEstimator::new(SpeedModel::AverageSpeed { kmh: 50.0 }).unwrap();

    for stops in [2usize, 10, 100, 1_000] {
        let path: Vec<GeoPoint> = (0..stops)
            .map(|i| {
                let t = i as f64 / stops as f64;
                GeoPoint::new(-23.6 + 0.1 * t, -46.7 + 0.1 * (t * 7.0).sin())
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(stops), &path, |bench, path| {
            bench.iter(|| estimator.estimate(black_box(path)))
        });
    }

    group.finish();
}

fn benchmark_builtin_report(c: &mut Criterion) {
    let catalog = DonationCatalog::builtin();
    let stops = catalog.resolve(&["1", "2", "3", "4", "5"]).unwrap();
    let estimator = RouteEstimator::default();

    c.bench_function("builtin_tour_report", |bench| {
        bench.iter(|| estimator.report(black_box(&stops)))
    });
}

criterion_group!(
    benches,
    benchmark_great_circle,
    benchmark_route_estimate,
    benchmark_builtin_report
);
criterion_main!(benches);
