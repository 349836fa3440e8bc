//! Performance benchmarks for the simulation loop

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rating_convergence::config::SimulationSettings;
use rating_convergence::rating::win_probability;
use rating_convergence::simulation::{play_match, MemoryRecorder, Simulation};

fn bench_probability(c: &mut Criterion) {
    c.bench_function("win_probability", |b| {
        b.iter(|| win_probability(black_box(1012.4), black_box(987.6)))
    });
}

fn bench_match(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("play_match_race_to_10", |b| {
        b.iter(|| play_match(black_box(0.55), 10, &mut rng).unwrap())
    });
}

fn bench_rounds(c: &mut Criterion) {
    let settings = SimulationSettings {
        rounds: 1_000,
        seed: Some(42),
        ..SimulationSettings::default()
    };

    c.bench_function("run_1000_rounds_201_players", |b| {
        b.iter(|| {
            let mut recorder = MemoryRecorder::new();
            let mut simulation = Simulation::from_settings(settings.clone()).unwrap();
            black_box(simulation.run(&mut recorder).unwrap())
        })
    });
}

criterion_group!(benches, bench_probability, bench_match, bench_rounds);
criterion_main!(benches);
