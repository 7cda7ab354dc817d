//! Cycle orchestration: the engine, its configuration, and run fingerprints

pub mod engine;
pub mod fingerprint;

pub use engine::{
    validate_config, CycleResult, MarketConfig, MarketError, Orchestrator, WorkerSeed,
};
pub use fingerprint::metrics_fingerprint;
