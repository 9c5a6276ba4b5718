// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Decision Pipeline Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the full decision procedure, fact path and
//! flux path, against a populated atlas.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use astrolabe_core::{Atlas, SessionState};
use astrolabe_engine::DecisionEngine;
use astrolabe_types::EngineConfig;

fn seeded(n: usize) -> (DecisionEngine, Atlas) {
    let engine = DecisionEngine::new(EngineConfig::default()).expect("config");
    let mut atlas = Atlas::default();
    for i in 0..n {
        engine
            .commit_star(&format!("star field {i}"), &mut atlas)
            .expect("commit");
    }
    (engine, atlas)
}

fn bench_decide_fact(c: &mut Criterion) {
    let (engine, atlas) = seeded(256);
    c.bench_function("decide_fact_256", |b| {
        b.iter(|| {
            let mut session = SessionState::new("bench");
            engine.decide(
                black_box("star field 17"),
                black_box(7),
                0.5,
                &atlas,
                &mut session,
            )
        })
    });
}

fn bench_decide_flux(c: &mut Criterion) {
    let (engine, atlas) = seeded(256);
    c.bench_function("decide_flux_256", |b| {
        b.iter(|| {
            let mut session = SessionState::new("bench");
            engine.decide(
                black_box("uncharted resonance"),
                black_box(7),
                0.99,
                &atlas,
                &mut session,
            )
        })
    });
}

criterion_group!(benches, bench_decide_fact, bench_decide_flux);
criterion_main!(benches);
