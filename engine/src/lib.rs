//! Labor market simulation core
//!
//! A deterministic search-and-matching labor market engine. The market
//! runs in discrete cycles driven by a cycle orchestrator:
//!
//! 1. **Metrics**: unemployment, average wage, and match rate are
//!    recomputed from current state.
//! 2. **Posting**: employers with sufficient capital probabilistically
//!    post vacancies priced off the wage curve.
//! 3. **Matching**: unemployed workers search, score open vacancies
//!    against their skills, apply, and match; wages settle by Nash
//!    bargaining between the worker's reservation wage and the
//!    employer's cost of continued search.
//! 4. **Aging**: open vacancies age and expire at their lifetime bound.
//! 5. **Destruction**: a macro-phase-dependent fraction of jobs is
//!    destroyed, worst-capitalized employers first.
//! 6. **Drift**: wage-curve parameters adapt for the next cycle.
//!
//! # Determinism
//!
//! Every random draw flows through one seeded [`RngManager`], and all
//! collections iterate in insertion order. Same seed, same configuration,
//! same phase sequence: byte-identical results, checkable with
//! [`orchestrator::metrics_fingerprint`].
//!
//! # Example
//! ```
//! use labor_market_core_rs::{
//!     EmployerRecord, InMemoryEmployers, MacroPhase, MarketConfig, Orchestrator, WorkerSeed,
//! };
//!
//! let mut config = MarketConfig::default();
//! config.workers = (0..20)
//!     .map(|i| WorkerSeed::unemployed(format!("W_{:03}", i)))
//!     .collect();
//!
//! let employers = Box::new(InMemoryEmployers::new(vec![EmployerRecord {
//!     id: "EMP_A".to_string(),
//!     sector: "technology".to_string(),
//!     capital: 250_000.0,
//! }]));
//!
//! let mut market = Orchestrator::new(config, employers).unwrap();
//! for _ in 0..12 {
//!     let result = market.run_cycle(MacroPhase::Expansion);
//!     assert!(result.metrics.unemployment_rate <= 1.0);
//! }
//! ```

pub mod destruction;
pub mod lifecycle;
pub mod matching;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod wage;

pub use destruction::DestructionRates;
pub use lifecycle::PostingParams;
pub use matching::{attempt_hire, HireOutcome, MatchingParams};
pub use models::{
    EmployerDirectory, EmployerRecord, Employment, EventLog, InMemoryEmployers, LaborMarketState,
    MacroPhase, MarketEvent, MarketMetrics, Vacancy, VacancyBoard, VacancyStatus, WorkerProfile,
    WorkerRegistry,
};
pub use orchestrator::{
    metrics_fingerprint, validate_config, CycleResult, MarketConfig, MarketError, Orchestrator,
    WorkerSeed,
};
pub use rng::RngManager;
pub use wage::{market_wage, negotiate_wage, SectorPremiums, WageCurveParams};
