//! Employer source boundary
//!
//! Employers live in the surrounding macro-simulation, not in this core.
//! The core reads the active employer set every cycle and invokes a hire
//! operation on a successful match; the operation reports success or
//! failure, and a failed or unresolvable hire leaves the vacancy Vacant.
//!
//! `InMemoryEmployers` is the reference implementation used by tests and
//! simple bootstraps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of one employer, as read from the employer source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerRecord {
    /// Unique employer identifier (e.g., "EMP_A")
    pub id: String,

    /// Primary sector the employer hires for
    pub sector: String,

    /// Capital / solvency figure; drives posting propensity, the wage
    /// premium, and layoff priority
    pub capital: f64,
}

/// External employer directory consumed by the market core
///
/// Implementations must return employers in a stable order: the posting
/// pass iterates the list and draws from the shared RNG, so a reordering
/// would change replay results.
pub trait EmployerDirectory {
    /// Active employers this cycle, in stable order
    fn employers(&self) -> Vec<EmployerRecord>;

    /// Capital of one employer; `None` if the employer cannot be resolved
    fn capital_of(&self, employer_id: &str) -> Option<f64>;

    /// Execute a hire; returns false if the employer declines or fails
    fn hire(&mut self, employer_id: &str, worker_id: &str, wage: f64) -> bool;

    /// Remove an employer–worker link after a layoff
    fn release(&mut self, employer_id: &str, worker_id: &str);
}

/// In-memory employer directory for tests and simple bootstraps
///
/// Accepts every hire for a known employer and keeps a per-employer
/// roster so layoffs can be asserted against.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployers {
    records: Vec<EmployerRecord>,
    rosters: BTreeMap<String, Vec<String>>,
}

impl InMemoryEmployers {
    /// Create a directory over the given employer records
    pub fn new(records: Vec<EmployerRecord>) -> Self {
        Self {
            records,
            rosters: BTreeMap::new(),
        }
    }

    /// Workers currently hired at an employer
    pub fn roster(&self, employer_id: &str) -> &[String] {
        self.rosters
            .get(employer_id)
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    /// Adjust an employer's capital (e.g., between cycles in a test)
    pub fn set_capital(&mut self, employer_id: &str, capital: f64) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == employer_id) {
            record.capital = capital;
        }
    }
}

impl EmployerDirectory for InMemoryEmployers {
    fn employers(&self) -> Vec<EmployerRecord> {
        self.records.clone()
    }

    fn capital_of(&self, employer_id: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.id == employer_id)
            .map(|r| r.capital)
    }

    fn hire(&mut self, employer_id: &str, worker_id: &str, _wage: f64) -> bool {
        if !self.records.iter().any(|r| r.id == employer_id) {
            return false;
        }
        self.rosters
            .entry(employer_id.to_string())
            .or_default()
            .push(worker_id.to_string());
        true
    }

    fn release(&mut self, employer_id: &str, worker_id: &str) {
        if let Some(roster) = self.rosters.get_mut(employer_id) {
            roster.retain(|w| w != worker_id);
        }
    }
}
