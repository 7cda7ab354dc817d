//! Whole-run determinism
//!
//! Two engines built from the same configuration and driven through the
//! same phase sequence must agree on every metric, every event, and the
//! run fingerprint.

use labor_market_core_rs::{
    metrics_fingerprint, EmployerRecord, InMemoryEmployers, MacroPhase, MarketConfig, Orchestrator,
    WorkerSeed,
};

fn config(seed: u64) -> MarketConfig {
    let mut config = MarketConfig::default();
    config.rng_seed = seed;
    config.workers = (0..50)
        .map(|i| WorkerSeed::unemployed(format!("W_{:03}", i)))
        .collect();
    config
}

fn employers() -> Box<InMemoryEmployers> {
    Box::new(InMemoryEmployers::new(vec![
        EmployerRecord {
            id: "EMP_A".to_string(),
            sector: "technology".to_string(),
            capital: 300_000.0,
        },
        EmployerRecord {
            id: "EMP_B".to_string(),
            sector: "services".to_string(),
            capital: 90_000.0,
        },
        EmployerRecord {
            id: "EMP_C".to_string(),
            sector: "manufacturing".to_string(),
            capital: 150_000.0,
        },
    ]))
}

fn phases() -> Vec<MacroPhase> {
    (0..30)
        .map(|i| match i % 5 {
            0 => MacroPhase::Expansion,
            1 => MacroPhase::Other,
            2 => MacroPhase::Recession,
            3 => MacroPhase::Other,
            _ => MacroPhase::Depression,
        })
        .collect()
}

#[test]
fn test_same_seed_same_run() {
    let mut run1 = Orchestrator::new(config(777), employers()).unwrap();
    let mut run2 = Orchestrator::new(config(777), employers()).unwrap();

    for phase in phases() {
        let r1 = run1.run_cycle(phase);
        let r2 = run2.run_cycle(phase);
        assert_eq!(r1, r2, "cycle results diverged at cycle {}", r1.cycle);
    }

    assert_eq!(run1.metrics_history(), run2.metrics_history());
    assert_eq!(run1.event_log().events(), run2.event_log().events());
}

#[test]
fn test_same_seed_same_fingerprint() {
    let mut run1 = Orchestrator::new(config(777), employers()).unwrap();
    let mut run2 = Orchestrator::new(config(777), employers()).unwrap();

    for phase in phases() {
        run1.run_cycle(phase);
        run2.run_cycle(phase);
    }

    let fp1 = metrics_fingerprint(run1.metrics_history()).unwrap();
    let fp2 = metrics_fingerprint(run2.metrics_history()).unwrap();
    assert_eq!(fp1, fp2);
}

#[test]
fn test_different_seeds_diverge() {
    let mut run1 = Orchestrator::new(config(777), employers()).unwrap();
    let mut run2 = Orchestrator::new(config(1234), employers()).unwrap();

    for phase in phases() {
        run1.run_cycle(phase);
        run2.run_cycle(phase);
    }

    // Bootstrap synthesis alone differs between seeds, so event streams
    // (and, with 30 cycles of posting and matching, the metrics) diverge.
    assert_ne!(run1.event_log().events(), run2.event_log().events());
}

#[test]
fn test_bootstrap_is_deterministic() {
    let market1 = Orchestrator::new(config(42), employers()).unwrap();
    let market2 = Orchestrator::new(config(42), employers()).unwrap();

    for (w1, w2) in market1
        .state()
        .workers()
        .iter_in_order()
        .zip(market2.state().workers().iter_in_order())
    {
        assert_eq!(w1, w2);
    }
}
