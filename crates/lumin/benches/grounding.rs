//! Grounding benchmarks using divan
//!
//! Benchmarks for plan evaluation and the cyclic intersect path.

use lumin::{Concept, Expression, GroundingEngine, OntologyStore, SetOperator};
use serde_json::json;

fn main() {
    divan::main();
}

fn store() -> OntologyStore {
    OntologyStore::from_concepts([
        ("Midnight", Concept::cyclic("local_true_solar_time", 23.0, 1.0, 24.0)),
        ("Night", Concept::cyclic("local_true_solar_time", 20.0, 4.0, 24.0)),
        ("Obs_Window", Concept::scalar("local_true_solar_time", 0.5, 2.0)),
        ("Southern Summer", Concept::scalar("solar_longitude", 270.0, 360.0)),
        ("Dust Storm Season", Concept::scalar("solar_longitude", 180.0, 330.0)),
        ("Thermal", Concept::categorical("instrument", ["THEMIS", "TES", "MCS"])),
    ])
    .unwrap()
}

// ============================================================================
// Kernel Benchmarks
// ============================================================================

#[divan::bench]
fn intersect_scalar() -> Concept {
    lumin::eval::apply(
        SetOperator::Intersect,
        divan::black_box(Concept::scalar("latitude", -30.0, 30.0)),
        divan::black_box(Concept::scalar("latitude", 10.0, 60.0)),
    )
    .unwrap()
}

#[divan::bench]
fn intersect_cyclic_pair() -> Concept {
    lumin::eval::apply(
        SetOperator::Intersect,
        divan::black_box(Concept::cyclic("local_true_solar_time", 20.0, 4.0, 24.0)),
        divan::black_box(Concept::cyclic("local_true_solar_time", 23.0, 1.0, 24.0)),
    )
    .unwrap()
}

// ============================================================================
// Plan Benchmarks
// ============================================================================

#[divan::bench]
fn ground_json_plan(bencher: divan::Bencher) {
    let store = store();
    let engine = GroundingEngine::new();
    let plan = json!([
        "UNION",
        ["INTERSECT", ["INTERSECT", "Night", "Midnight"], "Obs_Window"],
        ["DIFFERENCE", "Southern Summer", "Dust Storm Season"]
    ]);

    bencher.bench(|| engine.ground_json(divan::black_box(&plan), &store).unwrap());
}

#[divan::bench(args = [4, 16, 64])]
fn ground_deep_plan(bencher: divan::Bencher, depth: usize) {
    let store = store();
    let engine = GroundingEngine::new();
    let mut plan = Expression::concept("Night");
    for _ in 1..depth {
        plan = Expression::intersect(plan, Expression::concept("Midnight"));
    }

    bencher.bench(|| engine.evaluate(divan::black_box(&plan), &store).unwrap());
}
