//! Labor market state
//!
//! Holds the two collections the market operates on: the worker registry
//! and the vacancy board.
//!
//! # Critical Invariants
//!
//! 1. **Worker Conservation**: the set of worker identities is fixed at
//!    bootstrap; no cycle creates or destroys a worker.
//! 2. **Exclusive Ownership**: the registry owns all WorkerProfile records
//!    and the board owns all Vacancy records; only the cycle orchestrator
//!    mutates either, inside its designated step (mutable access is
//!    crate-private).
//! 3. **Stable Iteration**: workers iterate in registration order and
//!    vacancies in posting order, so a fixed seed replays identically.

use crate::models::vacancy::VacancyBoard;
use crate::models::worker::WorkerRegistry;

/// Complete market state: all workers plus the active vacancy board
#[derive(Debug, Clone, Default)]
pub struct LaborMarketState {
    workers: WorkerRegistry,
    board: VacancyBoard,
}

impl LaborMarketState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// The worker registry
    pub fn workers(&self) -> &WorkerRegistry {
        &self.workers
    }

    /// Mutable registry access for the orchestrator's passes
    pub(crate) fn workers_mut(&mut self) -> &mut WorkerRegistry {
        &mut self.workers
    }

    /// The vacancy board
    pub fn board(&self) -> &VacancyBoard {
        &self.board
    }

    /// Mutable board access for the orchestrator's passes
    pub(crate) fn board_mut(&mut self) -> &mut VacancyBoard {
        &mut self.board
    }

    /// IDs of unemployed workers, in registration order
    pub fn unemployed_worker_ids(&self) -> Vec<String> {
        self.workers
            .iter_in_order()
            .filter(|w| w.is_unemployed())
            .map(|w| w.id().to_string())
            .collect()
    }

    /// IDs of employed workers, in registration order
    pub fn employed_worker_ids(&self) -> Vec<String> {
        self.workers
            .iter_in_order()
            .filter(|w| !w.is_unemployed())
            .map(|w| w.id().to_string())
            .collect()
    }

    /// Number of unemployed workers
    pub fn unemployed_count(&self) -> usize {
        self.workers.iter_in_order().filter(|w| w.is_unemployed()).count()
    }
}
