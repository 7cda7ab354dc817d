//! Exogenous job destruction
//!
//! Once per cycle, a fixed fraction of employed workers lose their jobs.
//! The fraction depends only on the macro phase; which workers are fired
//! depends on their employer's financial distress. Workers at distressed
//! (low-capital) employers go first; healthy employers still carry a
//! distress floor so no job is perfectly safe.

use crate::models::{EmployerDirectory, EventLog, LaborMarketState, MacroPhase, MarketEvent};
use serde::{Deserialize, Serialize};

/// Distress never falls below this, so every employer can shed jobs.
const DISTRESS_FLOOR: f64 = 0.1;

/// Destruction rate per macro phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestructionRates {
    /// Rate during expansions
    pub expansion: f64,

    /// Rate during recessions
    pub recession: f64,

    /// Rate during depressions
    pub depression: f64,

    /// Rate in any other phase
    pub other: f64,

    /// Capital at which distress reaches zero (before the floor)
    pub distress_capital_scale: f64,
}

impl Default for DestructionRates {
    fn default() -> Self {
        Self {
            expansion: 0.01,
            recession: 0.08,
            depression: 0.08,
            other: 0.02,
            distress_capital_scale: 100_000.0,
        }
    }
}

impl DestructionRates {
    /// The destruction rate for a macro phase
    pub fn rate_for(&self, phase: MacroPhase) -> f64 {
        match phase {
            MacroPhase::Expansion => self.expansion,
            MacroPhase::Recession => self.recession,
            MacroPhase::Depression => self.depression,
            MacroPhase::Other => self.other,
        }
    }
}

/// Run the destruction pass for one cycle; returns jobs destroyed
///
/// Fires exactly `floor(employed × rate)` workers, ranked by their
/// employer's distress (`max(0.1, 1 − capital/scale)`). The ranking sort
/// is stable, so workers at equally distressed employers are fired in
/// registration order and a fixed seed replays identically. Workers whose
/// employer cannot be resolved in the directory are skipped.
pub(crate) fn run_destruction_pass(
    state: &mut LaborMarketState,
    employers: &mut dyn EmployerDirectory,
    rates: &DestructionRates,
    phase: MacroPhase,
    cycle: usize,
    events: &mut EventLog,
) -> usize {
    let employed = state.employed_worker_ids();
    let to_destroy = (employed.len() as f64 * rates.rate_for(phase)).floor() as usize;
    if to_destroy == 0 {
        return 0;
    }

    let mut candidates: Vec<(String, String, f64)> = Vec::new();
    for worker_id in &employed {
        let employer_id = match state
            .workers()
            .get(worker_id)
            .and_then(|w| w.employment())
        {
            Some(employment) => employment.employer_id.clone(),
            None => continue,
        };
        let capital = match employers.capital_of(&employer_id) {
            Some(capital) => capital,
            None => continue,
        };
        let distress = (1.0 - capital / rates.distress_capital_scale).max(DISTRESS_FLOOR);
        candidates.push((worker_id.clone(), employer_id, distress));
    }

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    let mut destroyed = 0;
    for (worker_id, employer_id, _) in candidates.into_iter().take(to_destroy) {
        if let Some(worker) = state.workers_mut().get_mut(&worker_id) {
            worker.lay_off();
        }
        employers.release(&employer_id, &worker_id);
        events.log(MarketEvent::JobDestroyed {
            cycle,
            worker_id,
            employer_id,
        });
        destroyed += 1;
    }

    destroyed
}
