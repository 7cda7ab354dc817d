//! Domain models for the labor market

pub mod employer;
pub mod event;
pub mod metrics;
pub mod state;
pub mod vacancy;
pub mod worker;

use serde::{Deserialize, Serialize};

// Re-exports
pub use employer::{EmployerDirectory, EmployerRecord, InMemoryEmployers};
pub use event::{EventLog, MarketEvent};
pub use metrics::MarketMetrics;
pub use state::LaborMarketState;
pub use vacancy::{Vacancy, VacancyBoard, VacancyStatus};
pub use worker::{Employment, WorkerProfile, WorkerRegistry};

/// Macro-economic cycle phase, read from the surrounding simulation every
/// cycle. Drives the job destruction rate and wage-curve drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacroPhase {
    Expansion,
    Recession,
    Depression,
    Other,
}
