use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geodist::baseline::{self, SphericalFormula};
use geodist::geodesic::{self, ConvergencePolicy, WGS84};
use geodist::GeodeticCoordinate;

fn city_pairs() -> Vec<(GeodeticCoordinate, GeodeticCoordinate)> {
    vec![
        (
            GeodeticCoordinate::new(40.7128, -74.0060), // NYC
            GeodeticCoordinate::new(34.0522, -118.2437), // LA
        ),
        (
            GeodeticCoordinate::new(51.5074, -0.1278), // London
            GeodeticCoordinate::new(35.6895, 139.6917), // Tokyo
        ),
        (
            GeodeticCoordinate::new(-33.8688, 151.2093), // Sydney
            GeodeticCoordinate::new(59.9139, 10.7522),   // Oslo
        ),
        (
            GeodeticCoordinate::new(55.7558, 37.6173), // Moscow
            GeodeticCoordinate::new(-34.6037, -58.3816), // Buenos Aires
        ),
    ]
}

fn bench_vincenty(c: &mut Criterion) {
    let pairs = city_pairs();
    c.bench_function("vincenty_city_pairs", |b| {
        b.iter(|| {
            for &(p, q) in &pairs {
                let _ = black_box(geodesic::distance(black_box(p), black_box(q)));
            }
        })
    });
}

fn bench_spherical(c: &mut Criterion) {
    let pairs = city_pairs();
    for formula in [
        SphericalFormula::Haversine,
        SphericalFormula::GreatCircle,
        SphericalFormula::LawOfCosines,
    ] {
        c.bench_function(&format!("{formula:?}_city_pairs"), |b| {
            b.iter(|| {
                for &(p, q) in &pairs {
                    black_box(baseline::distance(formula, black_box(p), black_box(q)));
                }
            })
        });
    }
}

fn bench_tolerance_sweep(c: &mut Criterion) {
    let nyc = GeodeticCoordinate::new(40.7128, -74.0060);
    let la = GeodeticCoordinate::new(34.0522, -118.2437);

    for tolerance in [1e-6, 1e-9, 1e-12] {
        let policy = ConvergencePolicy {
            max_iterations: 200,
            tolerance,
        };
        c.bench_function(&format!("vincenty_tol_{tolerance:e}"), |b| {
            b.iter(|| geodesic::distance_with(black_box(nyc), black_box(la), &WGS84, &policy))
        });
    }
}

fn bench_worst_case_non_convergent(c: &mut Criterion) {
    // Near-antipodal pair: burns the full iteration cap before failing
    let p = GeodeticCoordinate::new(0.0, 0.0);
    let q = GeodeticCoordinate::new(0.0, 179.9999);
    c.bench_function("vincenty_near_antipodal", |b| {
        b.iter(|| geodesic::distance(black_box(p), black_box(q)))
    });
}

criterion_group!(
    benches,
    bench_vincenty,
    bench_spherical,
    bench_tolerance_sweep,
    bench_worst_case_non_convergent
);
criterion_main!(benches);
