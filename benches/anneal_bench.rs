//! Criterion benchmarks for the annealing loop.
//!
//! Uses synthetic problems (Sphere function, multimodal 1-D) to measure
//! engine overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, RngCore};
use u_anneal::random::create_rng;
use u_anneal::sa::{BestTracking, CoolingSchedule, Optimizer, Tunables};

// ===========================================================================
// Sphere function: minimize sum(x_i^2)
// ===========================================================================

fn sphere_optimizer(dim: usize, tracking: BestTracking) -> Optimizer<Vec<f64>> {
    Optimizer::builder()
        .with_neighbor(move |sol: &Vec<f64>, rng: &mut dyn RngCore| {
            let mut new = sol.clone();
            let i = rng.random_range(0..dim);
            new[i] += rng.random_range(-0.5..0.5);
            new
        })
        .with_energy(|sol: &Vec<f64>| sol.iter().map(|x| x * x).sum::<f64>())
        .with_cooling(CoolingSchedule::Geometric { rate: 1.01 })
        .with_tunables(
            Tunables::default()
                .with_convergence_window(500)
                .with_best_tracking(tracking),
        )
        .build()
        .expect("valid sphere optimizer")
}

// ===========================================================================
// Multimodal 1-D with reheats
// ===========================================================================

fn multimodal(x: &f64) -> f64 {
    -(3.0 * (-x * x).exp()
        + 5.0 * (-0.5 * (x - 5.0).powi(2)).exp()
        + (-4.0 * (x - 2.0).powi(2)).exp())
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sa_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");
    group.sample_size(10);

    for &dim in &[10usize, 50, 100] {
        for tracking in [BestTracking::LastAccepted, BestTracking::AllTime] {
            let mut opt = sphere_optimizer(dim, tracking);
            let initial = vec![3.0; dim];
            group.bench_with_input(
                BenchmarkId::new(format!("{tracking:?}"), dim),
                &initial,
                |b, init| {
                    b.iter(|| {
                        let mut rng = create_rng(42);
                        let result = opt.run_with_rng(100.0, black_box(init.clone()), &mut rng);
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_sa_multimodal_reheat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_multimodal_reheat");
    group.sample_size(10);

    for &reheats in &[0usize, 3, 10] {
        let mut opt = Optimizer::builder()
            .with_neighbor(|x: &f64, rng: &mut dyn RngCore| {
                (x + rng.random_range(-1.0..1.0)).clamp(-10.0, 10.0)
            })
            .with_energy(multimodal)
            .with_tunables(
                Tunables::default()
                    .with_max_reheats(reheats)
                    .with_convergence_window(1000),
            )
            .build()
            .expect("valid multimodal optimizer");
        group.bench_with_input(BenchmarkId::from_parameter(reheats), &reheats, |b, _| {
            b.iter(|| {
                let result = opt.run_with_rng(100.0, black_box(0.0), &mut create_rng(42));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sa_sphere, bench_sa_multimodal_reheat);
criterion_main!(benches);
